use std::env;

use eyre::{WrapErr, eyre};

use medkit_bedrock::BedrockConfig;

/// Startup configuration read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub model_id: String,
    pub region: String,
    pub max_tokens: i32,
    pub temperature: Option<f32>,
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys take their defaults; set but
    /// unparseable numbers are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let defaults = BedrockConfig::default();

        let model_id = lookup("MEDKIT_MODEL_ID").unwrap_or(defaults.model_id);
        let region = lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string());

        let max_tokens = match lookup("MEDKIT_MAX_TOKENS") {
            Some(raw) => {
                let value: i32 = raw
                    .trim()
                    .parse()
                    .wrap_err_with(|| format!("MEDKIT_MAX_TOKENS is not an integer: {raw:?}"))?;
                if value <= 0 {
                    return Err(eyre!("MEDKIT_MAX_TOKENS must be positive, got {value}"));
                }
                value
            }
            None => defaults.max_tokens,
        };

        let temperature = match lookup("MEDKIT_TEMPERATURE") {
            Some(raw) => {
                let value: f32 = raw
                    .trim()
                    .parse()
                    .wrap_err_with(|| format!("MEDKIT_TEMPERATURE is not a number: {raw:?}"))?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(eyre!("MEDKIT_TEMPERATURE must be within [0, 1], got {value}"));
                }
                Some(value)
            }
            None => None,
        };

        Ok(Self {
            model_id,
            region,
            max_tokens,
            temperature,
        })
    }

    pub fn bedrock(&self) -> BedrockConfig {
        BedrockConfig {
            model_id: self.model_id.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}
