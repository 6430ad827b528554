use catchlint_core::rule::RuleConfig;
use catchlint_core::types::Violation;
use catchlint_parsers::queries::catch_clauses_in;
use catchlint_parsers::walk::{descendants_of_kind, node_text, span_of};
use tree_sitter::{Node, Query};

use crate::binding::{binding_of, ExceptionBinding};

/// Verdict for a single catch clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Compliant,
    Violating,
}

/// Classify every catch clause under `block`, reporting one violation
/// per violating clause, located at the full clause span.
///
/// Clauses are judged in isolation: nothing here depends on sibling
/// catch clauses or on other try constructs in the same block.
pub fn classify_block(
    config: &RuleConfig,
    query: &Query,
    block: Node<'_>,
    source: &str,
) -> Vec<Violation> {
    let bytes = source.as_bytes();
    let mut violations = Vec::new();
    for clause in catch_clauses_in(query, block, bytes) {
        if classify(config, clause, bytes) == Verdict::Violating {
            violations.push(violation_for(config, clause));
        }
    }
    violations
}

/// Judge one catch clause.
///
/// A clause with no usable binding swallows the exception by
/// construction. A named clause is compliant only if some invocation in
/// its subtree looks like a log call and passes the bound variable.
pub fn classify(config: &RuleConfig, clause: Node<'_>, source: &[u8]) -> Verdict {
    let name = match binding_of(clause, source) {
        ExceptionBinding::Bare | ExceptionBinding::TypedUnnamed => return Verdict::Violating,
        ExceptionBinding::Named(name) => name,
    };

    // Every invocation anywhere in the clause body counts, including
    // ones inside nested blocks and nested try/catch constructs.
    for invocation in descendants_of_kind(clause, "invocation_expression") {
        if logs_exception(config, invocation, &name, source) {
            return Verdict::Compliant;
        }
    }
    Verdict::Violating
}

/// True when `invocation` looks like a log call that receives the bound
/// exception variable.
///
/// The callee's identifiers are flattened in source order and the entry
/// at index 1 is taken as the called method's token: `logger.Error(...)`
/// flattens to ["logger", "Error"], while a plain `Log(...)` has a
/// single entry and is never a candidate. This is a positional
/// heuristic over the tree, not symbol resolution.
fn logs_exception(
    config: &RuleConfig,
    invocation: Node<'_>,
    exception_name: &str,
    source: &[u8],
) -> bool {
    let Some(callee) = invocation.child_by_field_name("function") else {
        return false;
    };
    let idents = descendants_of_kind(callee, "identifier");
    if idents.len() < 2 {
        return false;
    }
    let method_token = node_text(idents[1], source);
    if !config
        .log_keywords
        .iter()
        .any(|kw| method_token.contains(kw.as_str()))
    {
        return false;
    }

    let Some(args) = invocation.child_by_field_name("arguments") else {
        return false;
    };
    descendants_of_kind(args, "identifier")
        .into_iter()
        .any(|id| node_text(id, source) == exception_name)
}

fn violation_for(config: &RuleConfig, clause: Node<'_>) -> Violation {
    Violation {
        code: config.rule_id.clone(),
        severity: config.severity,
        category: config.category.clone(),
        message: config.message.clone(),
        span: span_of(clause),
        fix_hint: Some(format!(
            "Insert `{}.{}(...)` with the caught exception as the first statement of the catch body",
            config.logger_receiver, config.logger_method
        )),
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
