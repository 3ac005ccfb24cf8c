//! The boundary to the generative model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::models::usage::TokenUsage;
use crate::prompt::RenderedPrompt;
use crate::schema::Schema;

/// Why a backend call produced no candidate answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FailureKind {
    /// The backend could not be reached.
    BackendUnavailable,
    /// The backend answered with an explicit error (bad request, refusal).
    BackendRejected,
    /// The backend answered, but not with a structured value.
    MalformedResponse,
}

/// A candidate answer. Untrusted until it passes output validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub candidate: Value,
    pub model_id: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Success(Generation),
    Failure { kind: FailureKind, message: String },
}

impl GenerationOutcome {
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        GenerationOutcome::Failure {
            kind,
            message: message.into(),
        }
    }
}

/// A generative model that turns a prompt into a structured value.
///
/// One call per invocation: implementations must not retry, cache, or add
/// timeouts of their own, and must release whatever connection they acquire
/// before returning, on every path.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, prompt: &RenderedPrompt, output: &Schema) -> GenerationOutcome;
}
