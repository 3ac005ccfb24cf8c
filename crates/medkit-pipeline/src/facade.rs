use std::sync::Arc;

use serde_json::Value;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use medkit_core::generation::{GenerationOutcome, GenerativeBackend};
use medkit_core::registry::ContractRegistry;

use crate::outcome::{InvocationFailure, InvocationSuccess};

/// Single entry point for every tool.
///
/// Holds only read-only state, so one facade serves any number of
/// concurrent invocations. Nothing is retried: the first failing stage
/// ends the invocation.
#[derive(Clone)]
pub struct ToolFacade {
    registry: Arc<ContractRegistry>,
    backend: Arc<dyn GenerativeBackend>,
}

impl ToolFacade {
    pub fn new(registry: Arc<ContractRegistry>, backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { registry, backend }
    }

    pub fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    /// Run one invocation of `tool_name` on untrusted `raw_input`.
    ///
    /// The backend call is the only await point. Dropping the returned
    /// future cancels it.
    pub async fn invoke(
        &self,
        tool_name: &str,
        raw_input: &Value,
    ) -> Result<InvocationSuccess, InvocationFailure> {
        let invocation_id = Uuid::new_v4();
        let span = info_span!("invoke", tool = tool_name, invocation_id = %invocation_id);

        let result = self
            .run(invocation_id, tool_name, raw_input)
            .instrument(span.clone())
            .await;

        span.in_scope(|| match &result {
            Ok(success) => info!(
                model = %success.model_id,
                input_tokens = success.usage.tokens.input,
                output_tokens = success.usage.tokens.output,
                "invocation complete"
            ),
            Err(failure) => warn!(
                stage = ?failure.stage,
                error_kind = ?failure.error_kind,
                field = failure.field.as_deref(),
                message = %failure.message,
                "invocation failed"
            ),
        });
        result
    }

    async fn run(
        &self,
        invocation_id: Uuid,
        tool_name: &str,
        raw_input: &Value,
    ) -> Result<InvocationSuccess, InvocationFailure> {
        info!("invocation started");

        let contract = self
            .registry
            .get(tool_name)
            .ok_or_else(|| InvocationFailure::unknown_tool(invocation_id, tool_name))?;

        let input = contract
            .validate_input(raw_input)
            .map_err(|e| InvocationFailure::input(invocation_id, e))?;

        let prompt = contract
            .render(&input)
            .map_err(|e| InvocationFailure::render(invocation_id, e))?;

        let generation = match self.backend.generate(&prompt, contract.describe_output()).await {
            GenerationOutcome::Success(generation) => generation,
            GenerationOutcome::Failure { kind, message } => {
                return Err(InvocationFailure::backend(invocation_id, kind, message));
            }
        };

        let output = contract
            .validate_output(&generation.candidate)
            .map_err(|e| InvocationFailure::output(invocation_id, e))?;

        Ok(InvocationSuccess {
            invocation_id,
            tool: contract.name().to_string(),
            output,
            model_id: generation.model_id,
            usage: generation.usage,
        })
    }
}
