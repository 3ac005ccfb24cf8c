//! medkit-bedrock
//!
//! The production generative backend: Bedrock Converse with structured
//! output forced through a single tool, images sent as content blocks.

pub mod backend;
pub mod config;
pub mod document;
pub mod error;
pub mod request;
pub mod response;
pub mod tokens;

pub use backend::BedrockBackend;
pub use config::{BedrockConfig, build_sdk_config};
