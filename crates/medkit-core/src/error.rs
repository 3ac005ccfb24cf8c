use thiserror::Error;

/// Caller-correctable input problem: names the offending field and the
/// violated constraint (`required`, `type:string`, `minLength:2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input field '{field}': {constraint}")]
pub struct InputError {
    pub field: String,
    pub constraint: String,
}

impl InputError {
    pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

/// The model answered, but the answer does not satisfy the output contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("model output field '{field}' rejected: {reason}")]
pub struct ValidationFailure {
    pub field: String,
    pub reason: String,
}

impl ValidationFailure {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// A tool declaration that cannot be made reachable. Raised while the
/// registry is built, never per request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("template for '{tool}' references undeclared field '{field}'")]
    UndeclaredField { tool: String, field: String },

    #[error("template for '{tool}' uses field '{field}' as {usage}, but it is declared as {kind}")]
    KindMismatch {
        tool: String,
        field: String,
        usage: &'static str,
        kind: &'static str,
    },

    #[error("template for '{tool}' is malformed at byte {offset}: {message}")]
    Syntax {
        tool: String,
        offset: usize,
        message: String,
    },

    #[error("tool '{0}' is registered more than once")]
    DuplicateTool(String),

    #[error("schema for '{tool}' declares field '{field}' more than once")]
    DuplicateField { tool: String, field: String },

    #[error("schema for '{tool}' declares media field '{field}' in output")]
    MediaInOutput { tool: String, field: String },
}

/// Rendering was asked to combine a template with input validated against
/// a different contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("input was validated for '{validated_for}', not '{tool}'")]
    ContractMismatch { tool: String, validated_for: String },
}
