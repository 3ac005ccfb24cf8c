use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use tracing::{debug, info, warn};

use medkit_core::generation::{Generation, GenerationOutcome, GenerativeBackend};
use medkit_core::prompt::RenderedPrompt;
use medkit_core::schema::Schema;

use crate::config::BedrockConfig;
use crate::error::BedrockError;
use crate::{request, response, tokens};

/// `GenerativeBackend` over the Bedrock Converse API.
///
/// Each call is one Converse request. The SDK client pools connections
/// and returns them when the request future completes or is dropped.
#[derive(Debug, Clone)]
pub struct BedrockBackend {
    client: Client,
    config: BedrockConfig,
}

impl BedrockBackend {
    pub fn new(sdk_config: &aws_config::SdkConfig, config: BedrockConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
            config,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    async fn converse(
        &self,
        prompt: &RenderedPrompt,
        output: &Schema,
    ) -> Result<Generation, BedrockError> {
        let model_id = self.config.model_id.as_str();
        let (text_chars, media_bytes) = prompt.size_hint();
        debug!(
            model = model_id,
            segments = prompt.segments().len(),
            text_chars,
            media_bytes,
            "calling Bedrock Converse"
        );

        let response = self
            .client
            .converse()
            .model_id(model_id)
            .system(request::system_prompt())
            .messages(request::user_message(prompt)?)
            .tool_config(request::output_tool(output)?)
            .inference_config(request::inference_config(&self.config))
            .send()
            .await?;

        let usage = tokens::usage_for(model_id, response.usage());
        let candidate = response::extract_candidate(response.output(), response.stop_reason())?;

        info!(
            model = model_id,
            input_tokens = usage.tokens.input,
            output_tokens = usage.tokens.output,
            cost_usd = usage.cost_usd,
            "generation complete"
        );

        Ok(Generation {
            candidate,
            model_id: model_id.to_string(),
            usage,
        })
    }
}

#[async_trait]
impl GenerativeBackend for BedrockBackend {
    async fn generate(&self, prompt: &RenderedPrompt, output: &Schema) -> GenerationOutcome {
        match self.converse(prompt, output).await {
            Ok(generation) => GenerationOutcome::Success(generation),
            Err(e) => {
                warn!(model = %self.config.model_id, error = %e, "generation failed");
                GenerationOutcome::failure(e.kind(), e.to_string())
            }
        }
    }
}
