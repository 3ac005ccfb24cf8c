//! Structural validation at both trust boundaries: caller input before
//! rendering, model output before returning.

pub mod input;
pub mod output;

pub use input::{validate_input, InputValue, ValidatedInput};
pub use output::validate_output;

/// Path of the whole value, used when the root itself has the wrong shape.
pub const ROOT: &str = "$";

pub(crate) fn child_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

pub(crate) fn index_path(prefix: &str, index: usize) -> String {
    format!("{prefix}[{index}]")
}
