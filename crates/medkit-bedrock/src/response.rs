//! Pull the candidate answer out of a Converse response.

use aws_sdk_bedrockruntime::types::{ContentBlock, ConverseOutput, StopReason};
use serde_json::Value;

use crate::document::document_to_json;
use crate::error::BedrockError;
use crate::request::OUTPUT_TOOL_NAME;

/// The forced tool-use input, or failing that a JSON object in the text.
///
/// The value is not checked against the output contract here.
pub fn extract_candidate(
    output: Option<&ConverseOutput>,
    stop_reason: &StopReason,
) -> Result<Value, BedrockError> {
    let message = output
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    for block in message.content() {
        if let ContentBlock::ToolUse(tool_use) = block {
            if tool_use.name() == OUTPUT_TOOL_NAME {
                return Ok(document_to_json(tool_use.input()));
            }
        }
    }

    if *stop_reason == StopReason::MaxTokens {
        return Err(BedrockError::ResponseParse(
            "output truncated at max tokens".to_string(),
        ));
    }

    let text = message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    parse_text_candidate(&text)
}

/// Parse a JSON answer given as text, tolerating a Markdown code fence.
pub fn parse_text_candidate(text: &str) -> Result<Value, BedrockError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(BedrockError::ResponseParse("empty response".to_string()));
    }
    let body = strip_code_fence(trimmed);
    serde_json::from_str(body)
        .map_err(|e| BedrockError::ResponseParse(format!("response is not JSON: {e}")))
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
