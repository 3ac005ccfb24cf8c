use thiserror::Error;

use medkit_core::error::ConfigurationError;

#[derive(Debug, Error)]
pub enum ToolsError {
    #[error("tool declaration rejected: {0}")]
    Configuration(#[from] ConfigurationError),
}
