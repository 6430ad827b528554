use catchlint_core::types::Span;
use tree_sitter::Node;

/// Text of a node in the original source.
pub fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Span of a node, with 1-based lines.
pub fn span_of(node: Node<'_>) -> Span {
    Span {
        start_byte: node.start_byte(),
        end_byte: node.end_byte(),
        start_line: node.start_position().row as u32 + 1,
        end_line: node.end_position().row as u32 + 1,
    }
}

/// Collect every descendant of `root` (root included) with the given
/// kind, in preorder. Preorder matches source order for the flattened
/// identifier lists the classifier relies on.
pub fn descendants_of_kind<'t>(root: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut out = Vec::new();
    visit(root, &mut |node| {
        if node.kind() == kind {
            out.push(node);
        }
    });
    out
}

fn visit<'t>(node: Node<'t>, f: &mut impl FnMut(Node<'t>)) {
    f(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, f);
    }
}
