use catchlint_parsers::walk::node_text;
use tree_sitter::Node;

/// Nearest enclosing method and type simple names for a catch clause.
/// Either may be absent: catches inside top-level statements, lambdas
/// with no named enclosure, or field initializers resolve to `None` and
/// the synthesizer substitutes a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnclosingContext {
    pub method: Option<String>,
    pub class: Option<String>,
}

const METHOD_KINDS: &[&str] = &[
    "method_declaration",
    "constructor_declaration",
    "destructor_declaration",
    "local_function_statement",
    "operator_declaration",
];

const TYPE_KINDS: &[&str] = &[
    "class_declaration",
    "struct_declaration",
    "record_declaration",
    "interface_declaration",
];

/// Walk ancestors outward from `clause`, taking the first method-like
/// and first type-like construct names. Computed on demand, never
/// cached.
pub fn resolve(clause: Node<'_>, source: &[u8]) -> EnclosingContext {
    let mut ctx = EnclosingContext::default();
    let mut current = clause.parent();
    while let Some(node) = current {
        if ctx.method.is_none() && METHOD_KINDS.contains(&node.kind()) {
            ctx.method = name_of(node, source);
        }
        if ctx.class.is_none() && TYPE_KINDS.contains(&node.kind()) {
            ctx.class = name_of(node, source);
        }
        if ctx.method.is_some() && ctx.class.is_some() {
            break;
        }
        current = node.parent();
    }
    ctx
}

fn name_of(node: Node<'_>, source: &[u8]) -> Option<String> {
    node.child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
}
