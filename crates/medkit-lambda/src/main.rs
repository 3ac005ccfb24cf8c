use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use medkit_bedrock::{BedrockBackend, build_sdk_config};
use medkit_lambda::AppState;
use medkit_lambda::config::AppConfig;
use medkit_pipeline::ToolFacade;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::from_env()?;
    let registry = medkit_tools::build_registry()?;

    let sdk_config = build_sdk_config(&config.region).await;
    let backend = BedrockBackend::new(&sdk_config, config.bedrock());

    tracing::info!(
        model = %config.model_id,
        region = %config.region,
        tools = registry.len(),
        "medkit-lambda starting"
    );

    let state = AppState {
        facade: ToolFacade::new(Arc::new(registry), Arc::new(backend)),
    };

    lambda_http::run(medkit_lambda::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
