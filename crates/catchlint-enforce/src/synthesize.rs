use catchlint_core::rule::RuleConfig;
use tree_sitter::Node;

use crate::binding::{binding_of, declared_type, ExceptionBinding};
use crate::context::EnclosingContext;

/// A planned logging statement plus the optional catch-header patch.
/// Transient: produced and consumed within one fix invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCallPlan {
    /// Identifier passed as the first logging argument.
    pub exception_ident: String,
    /// Message literal embedded in the logging call.
    pub message: String,
    /// Full statement text, without indentation.
    pub statement: String,
    /// Replacement catch header (`(Type name)`) introducing a binding,
    /// present only when the original clause was bare or typed-unnamed.
    pub binding_patch: Option<String>,
}

/// Build the logging statement for one violating catch clause.
pub fn synthesize(
    config: &RuleConfig,
    clause: Node<'_>,
    context: &EnclosingContext,
    source: &[u8],
) -> LogCallPlan {
    let binding = binding_of(clause, source);

    let exception_ident = match &binding {
        ExceptionBinding::Named(name) => name.clone(),
        ExceptionBinding::Bare | ExceptionBinding::TypedUnnamed => config.binding_name.clone(),
    };

    let message = log_message(config, context);
    let statement = format!(
        "{}.{}({}, \"{}\");",
        config.logger_receiver, config.logger_method, exception_ident, message
    );

    let binding_patch = match &binding {
        ExceptionBinding::Named(_) => None,
        ExceptionBinding::Bare => Some(format!("({} {})", config.binding_type, config.binding_name)),
        ExceptionBinding::TypedUnnamed => {
            // Keep the declared type, introduce the name.
            let type_text = declared_type(clause, source).unwrap_or(&config.binding_type);
            Some(format!("({} {})", type_text, config.binding_name))
        }
    };

    LogCallPlan {
        exception_ident,
        message,
        statement,
        binding_patch,
    }
}

fn log_message(config: &RuleConfig, context: &EnclosingContext) -> String {
    let method = context.method.as_deref().unwrap_or(&config.placeholder_name);
    let class = context.class.as_deref().unwrap_or(&config.placeholder_name);
    config
        .log_message_template
        .replace("{method}", method)
        .replace("{class}", class)
}
