use serde_json::Value;

use crate::error::{ConfigurationError, InputError, RenderError, ValidationFailure};
use crate::prompt::RenderedPrompt;
use crate::schema::Schema;
use crate::template::Template;
use crate::validate::{self, ValidatedInput};

/// One tool's input contract, output contract, and prompt template.
///
/// Construction is the only place a contract can fail: duplicate fields,
/// media in the output, and template references that do not resolve
/// against the input schema are all rejected here. A constructed contract
/// is immutable.
#[derive(Debug, Clone)]
pub struct ToolContract {
    name: String,
    input: Schema,
    output: Schema,
    template: Template,
}

impl ToolContract {
    pub fn new(
        name: &str,
        input: Schema,
        output: Schema,
        template: &str,
    ) -> Result<Self, ConfigurationError> {
        input.check_unique(name)?;
        output.check_unique(name)?;
        output.check_no_media(name)?;
        let template = Template::compile(name, template, &input)?;

        Ok(Self {
            name: name.to_string(),
            input,
            output,
            template,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_schema(&self) -> &Schema {
        &self.input
    }

    /// Check untrusted caller input against the input schema.
    pub fn validate_input(&self, raw: &Value) -> Result<ValidatedInput, InputError> {
        validate::validate_input(&self.name, &self.input, raw)
    }

    pub fn render(&self, input: &ValidatedInput) -> Result<RenderedPrompt, RenderError> {
        self.template.render(input)
    }

    /// The output contract, handed to the backend so it can instruct the
    /// model what shape to return.
    pub fn describe_output(&self) -> &Schema {
        &self.output
    }

    /// Check an untrusted model answer against the output schema.
    pub fn validate_output(&self, candidate: &Value) -> Result<Value, ValidationFailure> {
        validate::validate_output(&self.output, candidate)
    }
}
