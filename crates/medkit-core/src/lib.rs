//! medkit-core
//!
//! Tool contracts, input/output validation, prompt templates, and the
//! generative backend port. No AWS dependency. Every stage here is pure
//! except the backend call, which is only described by a trait.

pub mod contract;
pub mod error;
pub mod generation;
pub mod media;
pub mod models;
pub mod prompt;
pub mod registry;
pub mod schema;
pub mod template;
pub mod validate;
