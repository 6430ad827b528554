use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Query, QueryCursor};

use crate::csharp::{language, ParseError};

const CATCH_CLAUSES: &str = "(catch_clause) @catch";

/// Compile the catch-clause query. Built once per engine, reused for
/// every block.
pub fn catch_clause_query() -> Result<Query, ParseError> {
    Query::new(&language(), CATCH_CLAUSES).map_err(|e| ParseError::Query(format!("{e}")))
}

/// Collect every catch clause under `block` in source order, including
/// clauses of try statements nested inside other catch bodies.
pub fn catch_clauses_in<'t>(query: &Query, block: Node<'t>, source: &[u8]) -> Vec<Node<'t>> {
    let mut cursor = QueryCursor::new();
    let mut clauses = Vec::new();
    let mut matches = cursor.matches(query, block, source);
    while let Some(m) = matches.next() {
        for cap in m.captures {
            clauses.push(cap.node);
        }
    }
    clauses
}
