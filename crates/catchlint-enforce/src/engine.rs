use catchlint_core::rule::RuleConfig;
use catchlint_core::types::{FixError, RewriteResult, Span, Violation};
use catchlint_parsers::csharp::{CsharpParser, ParseError};
use catchlint_parsers::queries;
use catchlint_parsers::walk::span_of;
use rayon::prelude::*;
use tree_sitter::{Node, Query};

use crate::classifier;
use crate::context;
use crate::rewrite;
use crate::synthesize;

/// Coordinating engine for the swallowed-exception rule. Owns only the
/// immutable rule configuration and the compiled catch-clause query;
/// every call's result depends solely on the inputs passed to it.
pub struct Engine {
    config: RuleConfig,
    catch_query: Query,
}

impl Engine {
    pub fn new() -> Result<Self, ParseError> {
        Self::with_config(RuleConfig::default())
    }

    pub fn with_config(config: RuleConfig) -> Result<Self, ParseError> {
        Ok(Self {
            config,
            catch_query: queries::catch_clause_query()?,
        })
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Classify every catch clause under one code block. The block may
    /// be any node of a parsed tree: a method body, a lambda body, or
    /// the tree root.
    pub fn classify_block(&self, block: Node<'_>, source: &str) -> Vec<Violation> {
        classifier::classify_block(&self.config, &self.catch_query, block, source)
    }

    /// Parse a full source text and classify it as one block.
    pub fn classify_source(&self, source: &str) -> Result<Vec<Violation>, ParseError> {
        let mut parser = CsharpParser::new()?;
        let tree = parser.parse(source)?;
        Ok(self.classify_block(tree.root_node(), source))
    }

    /// Classify independent sources in parallel. Classification is a
    /// pure traversal per block, so no coordination is needed; results
    /// keep input order.
    pub fn classify_sources(&self, sources: &[&str]) -> Result<Vec<Vec<Violation>>, ParseError> {
        sources
            .par_iter()
            .map(|source| self.classify_source(source))
            .collect()
    }

    /// Fix one previously reported violation, identified by its
    /// catch-clause span. Returns the fully rewritten source; nothing
    /// is observable externally until it does.
    pub fn fix(&self, source: &str, span: Span) -> Result<RewriteResult, FixError> {
        let mut parser = CsharpParser::new().map_err(|e| FixError::Parse(e.to_string()))?;
        let tree = parser
            .parse(source)
            .map_err(|e| FixError::Parse(e.to_string()))?;

        let clause = self
            .find_catch_clause(tree.root_node(), &span, source)
            .ok_or(FixError::NoCatchClauseAtSpan {
                start: span.start_byte,
                end: span.end_byte,
            })?;

        let ctx = context::resolve(clause, source.as_bytes());
        let plan = synthesize::synthesize(&self.config, clause, &ctx, source.as_bytes());
        rewrite::apply(source, clause, &plan)
    }

    /// Smallest catch clause whose extent covers the requested span.
    /// Picking the smallest match keeps nested catches addressable.
    fn find_catch_clause<'t>(
        &self,
        root: Node<'t>,
        span: &Span,
        source: &str,
    ) -> Option<Node<'t>> {
        queries::catch_clauses_in(&self.catch_query, root, source.as_bytes())
            .into_iter()
            .filter(|c| span_of(*c).contains(span))
            .min_by_key(|c| c.end_byte() - c.start_byte())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
