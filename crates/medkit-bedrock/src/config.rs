/// Model selection and inference parameters for every Converse call.
#[derive(Debug, Clone, PartialEq)]
pub struct BedrockConfig {
    pub model_id: String,
    pub max_tokens: i32,
    pub temperature: Option<f32>,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            model_id: "us.anthropic.claude-sonnet-4-20250514-v1:0".to_string(),
            max_tokens: 4096,
            temperature: None,
        }
    }
}

/// Load AWS configuration from the default credential chain for `region`.
pub async fn build_sdk_config(region: &str) -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await
}
