use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use medkit_core::error::{InputError, RenderError, ValidationFailure};
use medkit_core::generation::FailureKind;
use medkit_core::models::usage::TokenUsage;

/// Pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Stage {
    ValidatingInput,
    Rendering,
    Invoking,
    ValidatingOutput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ErrorKind {
    UnknownTool,
    InputError,
    RenderError,
    BackendUnavailable,
    BackendRejected,
    MalformedResponse,
    ValidationFailure,
}

impl From<FailureKind> for ErrorKind {
    fn from(kind: FailureKind) -> Self {
        match kind {
            FailureKind::BackendUnavailable => ErrorKind::BackendUnavailable,
            FailureKind::BackendRejected => ErrorKind::BackendRejected,
            FailureKind::MalformedResponse => ErrorKind::MalformedResponse,
        }
    }
}

/// The terminal `Failed` state: which stage stopped the invocation, why,
/// and for input and output failures the offending field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error, TS)]
#[ts(export)]
#[error("{stage:?} failed ({error_kind:?}): {message}")]
pub struct InvocationFailure {
    pub invocation_id: Uuid,
    pub stage: Stage,
    pub error_kind: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub field: Option<String>,
}

impl InvocationFailure {
    pub(crate) fn unknown_tool(invocation_id: Uuid, tool: &str) -> Self {
        Self {
            invocation_id,
            stage: Stage::ValidatingInput,
            error_kind: ErrorKind::UnknownTool,
            message: format!("unknown tool: {tool}"),
            field: None,
        }
    }

    pub(crate) fn input(invocation_id: Uuid, err: InputError) -> Self {
        Self {
            invocation_id,
            stage: Stage::ValidatingInput,
            error_kind: ErrorKind::InputError,
            message: err.to_string(),
            field: Some(err.field),
        }
    }

    pub(crate) fn render(invocation_id: Uuid, err: RenderError) -> Self {
        Self {
            invocation_id,
            stage: Stage::Rendering,
            error_kind: ErrorKind::RenderError,
            message: err.to_string(),
            field: None,
        }
    }

    pub(crate) fn backend(invocation_id: Uuid, kind: FailureKind, message: String) -> Self {
        Self {
            invocation_id,
            stage: Stage::Invoking,
            error_kind: kind.into(),
            message,
            field: None,
        }
    }

    pub(crate) fn output(invocation_id: Uuid, err: ValidationFailure) -> Self {
        Self {
            invocation_id,
            stage: Stage::ValidatingOutput,
            error_kind: ErrorKind::ValidationFailure,
            message: err.to_string(),
            field: Some(err.field),
        }
    }
}

/// The terminal `Done` state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InvocationSuccess {
    pub invocation_id: Uuid,
    pub tool: String,
    pub output: Value,
    pub model_id: String,
    pub usage: TokenUsage,
}
