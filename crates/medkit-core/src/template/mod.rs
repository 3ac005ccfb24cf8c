//! Prompt templates with a closed set of substitutions.
//!
//! ```text
//! {{field}} / {{{field}}}     scalar interpolation, inserted verbatim
//! {{#if field}}...{{/if}}     included only when the field is present and truthy
//! {{#each field}}...{{/each}} instantiated once per array element, in order
//! {{this}} / {{this.name}}    the current each-element / one of its fields
//! {{media url=field}}         a media segment at this position
//! ```
//!
//! A block tag that sits alone on its line is standalone: the whole line,
//! newline included, is dropped from the output. An absent conditional
//! therefore leaves no blank line behind.
//!
//! Templates are compiled against the input schema when a contract is
//! registered. Every field reference is resolved then, so rendering a
//! compiled template against validated input cannot fail on a reference.

mod parse;
mod render;

use crate::error::{ConfigurationError, RenderError};
use crate::prompt::RenderedPrompt;
use crate::schema::{FieldKind, Schema};
use crate::validate::ValidatedInput;

use parse::{Node, Ref};

/// A parsed template bound to one tool's input schema.
#[derive(Debug, Clone)]
pub struct Template {
    tool: String,
    nodes: Vec<Node>,
}

impl Template {
    /// Parse `source` and resolve every reference against `schema`.
    pub fn compile(tool: &str, source: &str, schema: &Schema) -> Result<Self, ConfigurationError> {
        let nodes = parse::parse(source).map_err(|(offset, message)| ConfigurationError::Syntax {
            tool: tool.to_string(),
            offset,
            message,
        })?;

        let mut checker = Checker {
            tool,
            schema,
            scopes: Vec::new(),
        };
        checker.check(&nodes)?;

        Ok(Self {
            tool: tool.to_string(),
            nodes,
        })
    }

    /// Render validated input into the prompt sent to the backend.
    ///
    /// Pure: the same input always yields the same prompt.
    pub fn render(&self, input: &ValidatedInput) -> Result<RenderedPrompt, RenderError> {
        if input.tool() != self.tool {
            return Err(RenderError::ContractMismatch {
                tool: self.tool.clone(),
                validated_for: input.tool().to_string(),
            });
        }
        Ok(render::render(&self.nodes, input))
    }
}

struct Checker<'a> {
    tool: &'a str,
    schema: &'a Schema,
    /// Element kinds of the enclosing each-blocks, innermost last.
    scopes: Vec<&'a FieldKind>,
}

impl<'a> Checker<'a> {
    fn check(&mut self, nodes: &[Node]) -> Result<(), ConfigurationError> {
        for node in nodes {
            match node {
                Node::Text(_) => {}
                Node::Scalar { reference, at } => {
                    let kind = self.resolve(reference, *at)?;
                    if !kind.is_scalar() {
                        return Err(self.mismatch(reference, "text", kind));
                    }
                }
                Node::If { reference, at, body } => {
                    self.resolve(reference, *at)?;
                    self.check(body)?;
                }
                Node::Each { reference, at, body } => {
                    let kind = self.resolve(reference, *at)?;
                    let FieldKind::Array { items } = kind else {
                        return Err(self.mismatch(reference, "a list", kind));
                    };
                    self.scopes.push(&**items);
                    self.check(body)?;
                    self.scopes.pop();
                }
                Node::Media { reference, at } => {
                    let kind = self.resolve(reference, *at)?;
                    if !matches!(kind, FieldKind::Media { .. }) {
                        return Err(self.mismatch(reference, "media", kind));
                    }
                }
            }
        }
        Ok(())
    }

    fn resolve(&self, reference: &Ref, at: usize) -> Result<&'a FieldKind, ConfigurationError> {
        match reference {
            Ref::Field(name) => self
                .schema
                .field(name)
                .map(|f| &f.kind)
                .ok_or_else(|| self.undeclared(reference)),
            Ref::This => self.scopes.last().copied().ok_or_else(|| self.outside_each(at)),
            Ref::ThisField(name) => {
                let element = self.scopes.last().copied().ok_or_else(|| self.outside_each(at))?;
                let FieldKind::Object { fields } = element else {
                    return Err(self.mismatch(&Ref::This, "an object", element));
                };
                fields
                    .iter()
                    .find(|f| &f.name == name)
                    .map(|f| &f.kind)
                    .ok_or_else(|| self.undeclared(reference))
            }
        }
    }

    fn undeclared(&self, reference: &Ref) -> ConfigurationError {
        ConfigurationError::UndeclaredField {
            tool: self.tool.to_string(),
            field: reference.to_string(),
        }
    }

    fn outside_each(&self, at: usize) -> ConfigurationError {
        ConfigurationError::Syntax {
            tool: self.tool.to_string(),
            offset: at,
            message: "`this` used outside of an each block".to_string(),
        }
    }

    fn mismatch(&self, reference: &Ref, usage: &'static str, kind: &FieldKind) -> ConfigurationError {
        ConfigurationError::KindMismatch {
            tool: self.tool.to_string(),
            field: reference.to_string(),
            usage,
            kind: kind.label(),
        }
    }
}
