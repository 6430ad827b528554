use tree_sitter::{Language, Parser, Tree};

/// Tree-sitter parser configured for C#.
pub struct CsharpParser {
    parser: Parser,
}

impl CsharpParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&language())
            .map_err(|e| ParseError::Language(format!("{e}")))?;
        Ok(Self { parser })
    }

    /// Parse a full source text. The returned tree is immutable for the
    /// duration of one analysis pass.
    pub fn parse(&mut self, source: &str) -> Result<Tree, ParseError> {
        self.parser
            .parse(source.as_bytes(), None)
            .ok_or(ParseError::ParseFailed)
    }
}

/// The C# grammar.
pub fn language() -> Language {
    tree_sitter_c_sharp::LANGUAGE.into()
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("language error: {0}")]
    Language(String),
    #[error("query error: {0}")]
    Query(String),
    #[error("parse failed")]
    ParseFailed,
}
