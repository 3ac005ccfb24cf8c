//! Translate a rendered prompt and an output contract into a Converse
//! request.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, ImageBlock, ImageFormat, ImageSource, InferenceConfiguration,
    Message, SpecificToolChoice, SystemContentBlock, Tool, ToolChoice, ToolConfiguration,
    ToolInputSchema, ToolSpecification,
};
use aws_smithy_types::Blob;

use medkit_core::media::MediaPayload;
use medkit_core::prompt::{PromptSegment, RenderedPrompt};
use medkit_core::schema::Schema;

use crate::config::BedrockConfig;
use crate::document::json_to_document;
use crate::error::BedrockError;

/// Name of the single tool the model is forced to call. Its input schema
/// is the tool's output contract.
pub const OUTPUT_TOOL_NAME: &str = "structured_output";

const SYSTEM_PROMPT: &str = "\
Answer the user's request by calling the structured_output tool exactly once. \
Every required field must be present and every enumerated field must use one \
of the listed values. Do not answer in plain text.";

pub fn system_prompt() -> SystemContentBlock {
    SystemContentBlock::Text(SYSTEM_PROMPT.to_string())
}

/// The user message: one content block per prompt segment, in order.
pub fn user_message(prompt: &RenderedPrompt) -> Result<Message, BedrockError> {
    let content = prompt
        .segments()
        .iter()
        .map(|segment| match segment {
            PromptSegment::Text(text) => Ok(ContentBlock::Text(text.clone())),
            PromptSegment::Media(media) => image_block(media).map(ContentBlock::Image),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Message::builder()
        .role(ConversationRole::User)
        .set_content(Some(content))
        .build()
        .map_err(|e| BedrockError::Request(e.to_string()))
}

fn image_block(media: &MediaPayload) -> Result<ImageBlock, BedrockError> {
    let format = image_format(&media.mime_type).ok_or_else(|| {
        BedrockError::Rejected(format!("unsupported media type: {}", media.mime_type))
    })?;
    ImageBlock::builder()
        .format(format)
        .source(ImageSource::Bytes(Blob::new(media.bytes.clone())))
        .build()
        .map_err(|e| BedrockError::Request(e.to_string()))
}

/// Converse accepts PNG, JPEG, GIF and WebP images.
pub fn image_format(mime_type: &str) -> Option<ImageFormat> {
    match mime_type {
        "image/png" => Some(ImageFormat::Png),
        "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
        "image/gif" => Some(ImageFormat::Gif),
        "image/webp" => Some(ImageFormat::Webp),
        _ => None,
    }
}

/// A tool whose input schema is the output contract, with tool choice
/// pinned to it so the answer always arrives as a tool-use block.
pub fn output_tool(output: &Schema) -> Result<ToolConfiguration, BedrockError> {
    let spec = ToolSpecification::builder()
        .name(OUTPUT_TOOL_NAME)
        .description("Return the complete answer as this tool's input.")
        .input_schema(ToolInputSchema::Json(json_to_document(&output.to_json_schema())))
        .build()
        .map_err(|e| BedrockError::Request(e.to_string()))?;

    let choice = SpecificToolChoice::builder()
        .name(OUTPUT_TOOL_NAME)
        .build()
        .map_err(|e| BedrockError::Request(e.to_string()))?;

    ToolConfiguration::builder()
        .tools(Tool::ToolSpec(spec))
        .tool_choice(ToolChoice::Tool(choice))
        .build()
        .map_err(|e| BedrockError::Request(e.to_string()))
}

pub fn inference_config(config: &BedrockConfig) -> InferenceConfiguration {
    InferenceConfiguration::builder()
        .max_tokens(config.max_tokens)
        .set_temperature(config.temperature)
        .build()
}
