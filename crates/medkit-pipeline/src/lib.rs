//! medkit-pipeline
//!
//! The tool facade: one entry point that validates input, renders the
//! prompt, calls the generative backend once, and validates the answer.

pub mod facade;
pub mod outcome;

pub use facade::ToolFacade;
pub use outcome::{ErrorKind, InvocationFailure, InvocationSuccess, Stage};
