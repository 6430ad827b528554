//! Rule metadata for the swallowed-exception rule.
//!
//! The rule descriptor and synthesis templates live in one immutable
//! value, constructed once and passed explicitly to the classifier and
//! synthesizer. There is no ambient static state.

use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// Immutable configuration for the swallowed-exception rule.
///
/// Covers the diagnostic surface (id, category, severity, message) and
/// the synthesis templates used when a violating catch clause is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Stable rule identifier.
    pub rule_id: String,
    /// Fixed diagnostic category.
    pub category: String,
    /// Fixed diagnostic severity.
    pub severity: Severity,
    /// Diagnostic message attached to each violation.
    pub message: String,
    /// Receiver of the synthesized logging call.
    pub logger_receiver: String,
    /// Method of the synthesized logging call.
    pub logger_method: String,
    /// Substring keywords that mark a called method as a log write.
    /// Matching is case-sensitive and deliberately loose: `ErrorCount`
    /// counts as a log call.
    pub log_keywords: Vec<String>,
    /// Message literal template for the synthesized call. `{method}` and
    /// `{class}` are replaced with the enclosing context's simple names.
    pub log_message_template: String,
    /// Variable name introduced when the clause had no binding.
    pub binding_name: String,
    /// Exception type used when the clause declared none.
    pub binding_type: String,
    /// Name substituted when no enclosing method or type exists.
    pub placeholder_name: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            rule_id: "CL001".to_string(),
            category: "swallowed_exception".to_string(),
            severity: Severity::Error,
            message: "Catch clause swallows the exception without logging it".to_string(),
            logger_receiver: "logger".to_string(),
            logger_method: "Error".to_string(),
            log_keywords: vec![
                "Error".to_string(),
                "Warn".to_string(),
                "Fatal".to_string(),
            ],
            log_message_template: "Error in method {method} of class {class}".to_string(),
            binding_name: "ex".to_string(),
            binding_type: "Exception".to_string(),
            placeholder_name: "unknown".to_string(),
        }
    }
}
