use catchlint_core::types::{FixEdit, FixError, RewriteResult};
use tree_sitter::Node;

use crate::binding::declaration_of;
use crate::synthesize::LogCallPlan;

const INDENT_WIDTH: usize = 4;

/// Apply a plan to one catch clause, producing the rewritten source.
///
/// Every edit span is computed from the same original tree before any
/// text changes, then the edits are applied in descending byte order so
/// the binding patch and the body insertion never invalidate each
/// other. One clause is rewritten per invocation; all original
/// statements are retained after the inserted logging call.
pub fn apply(source: &str, clause: Node<'_>, plan: &LogCallPlan) -> Result<RewriteResult, FixError> {
    let mut edits = Vec::new();

    if let Some(patch) = &plan.binding_patch {
        edits.push(binding_edit(clause, patch)?);
    }
    edits.push(statement_edit(clause, plan)?);

    let new_source = apply_edits(source, &edits);
    Ok(RewriteResult { new_source, edits })
}

/// Replace the catch declaration with the patched header, or insert a
/// header after the `catch` keyword when the clause was bare.
fn binding_edit(clause: Node<'_>, patch: &str) -> Result<FixEdit, FixError> {
    if let Some(decl) = declaration_of(clause) {
        return Ok(FixEdit {
            start_byte: decl.start_byte(),
            end_byte: decl.end_byte(),
            replacement: patch.to_string(),
            description: "introduce exception binding".to_string(),
        });
    }
    let keyword = clause
        .child(0)
        .filter(|c| c.kind() == "catch")
        .ok_or(FixError::MalformedClause)?;
    Ok(FixEdit {
        start_byte: keyword.end_byte(),
        end_byte: keyword.end_byte(),
        replacement: format!(" {patch}"),
        description: "introduce exception binding".to_string(),
    })
}

/// Insert the logging statement directly after the body's opening
/// brace, indented one level past the clause itself.
fn statement_edit(clause: Node<'_>, plan: &LogCallPlan) -> Result<FixEdit, FixError> {
    let body = body_of(clause).ok_or(FixError::MalformedClause)?;
    let open_brace = body
        .child(0)
        .filter(|c| c.kind() == "{")
        .ok_or(FixError::MalformedClause)?;

    let indent = " ".repeat(clause.start_position().column + INDENT_WIDTH);
    Ok(FixEdit {
        start_byte: open_brace.end_byte(),
        end_byte: open_brace.end_byte(),
        replacement: format!("\n{indent}{}", plan.statement),
        description: "insert logging call".to_string(),
    })
}

fn body_of(clause: Node<'_>) -> Option<Node<'_>> {
    clause.child_by_field_name("body").or_else(|| {
        let mut cursor = clause.walk();
        let block = clause
            .named_children(&mut cursor)
            .find(|c| c.kind() == "block");
        block
    })
}

/// Splice edits into the source, highest offset first so earlier spans
/// keep their original byte positions.
fn apply_edits(source: &str, edits: &[FixEdit]) -> String {
    let mut ordered: Vec<&FixEdit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.start_byte.cmp(&a.start_byte));

    let mut out = source.to_string();
    for edit in ordered {
        out.replace_range(edit.start_byte..edit.end_byte, &edit.replacement);
    }
    out
}
