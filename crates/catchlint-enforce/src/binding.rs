use catchlint_parsers::walk::node_text;
use tree_sitter::Node;

/// The (type, optional name) pair declared by a catch clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExceptionBinding {
    /// `catch (Exception ex)` — the exception is bound to a variable.
    Named(String),
    /// `catch (Exception)` — a type is declared but nothing is bound.
    TypedUnnamed,
    /// `catch` with no parenthesized declaration at all.
    Bare,
}

/// Read the binding off a `catch_clause` node.
pub fn binding_of(clause: Node<'_>, source: &[u8]) -> ExceptionBinding {
    match declaration_of(clause) {
        None => ExceptionBinding::Bare,
        Some(decl) => match decl.child_by_field_name("name") {
            Some(name) => ExceptionBinding::Named(node_text(name, source).to_string()),
            None => ExceptionBinding::TypedUnnamed,
        },
    }
}

/// The `catch_declaration` child of a catch clause, if present.
pub fn declaration_of(clause: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = clause.walk();
    let decl = clause
        .named_children(&mut cursor)
        .find(|c| c.kind() == "catch_declaration");
    decl
}

/// Text of the declared exception type, if the clause declares one.
pub fn declared_type<'a>(clause: Node<'a>, source: &'a [u8]) -> Option<&'a str> {
    declaration_of(clause)
        .and_then(|decl| decl.child_by_field_name("type"))
        .map(|t| node_text(t, source))
}
