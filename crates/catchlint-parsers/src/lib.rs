//! Tree-sitter C# parsing for catchlint.
//!
//! The classifier and rewriter operate on plain tree-sitter nodes; this
//! crate owns the parser setup, the compiled catch-clause query, and the
//! traversal helpers they share.

pub mod csharp;
pub mod queries;
pub mod walk;
