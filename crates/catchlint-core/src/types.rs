use serde::{Deserialize, Serialize};

/// Severity of a reported violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte and line extent of a syntax node in the original source.
/// Lines are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start_byte: usize,
    pub end_byte: usize,
    pub start_line: u32,
    pub end_line: u32,
}

impl Span {
    /// True when `other` lies entirely within this span.
    pub fn contains(&self, other: &Span) -> bool {
        self.start_byte <= other.start_byte && other.end_byte <= self.end_byte
    }
}

/// One swallowed-exception diagnostic, located at the full catch-clause span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub severity: Severity,
    pub category: String,
    pub message: String,
    pub span: Span,
    pub fix_hint: Option<String>,
}

/// A byte-span text edit against the original source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixEdit {
    pub start_byte: usize,
    pub end_byte: usize,
    pub replacement: String,
    pub description: String,
}

/// Result of rewriting one catch clause: the full rewritten source plus
/// the edits that produced it. Presentation and application are the
/// host's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteResult {
    pub new_source: String,
    pub edits: Vec<FixEdit>,
}

/// Errors that can occur while applying a fix.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("no catch clause at bytes {start}..{end}")]
    NoCatchClauseAtSpan { start: usize, end: usize },

    #[error("catch clause has no body block")]
    MalformedClause,
}
