//! Typed field descriptors for tool inputs and outputs.
//!
//! A [`Schema`] is the root object of a contract: an ordered list of
//! [`Field`]s. Nesting happens through [`FieldKind::Array`] and
//! [`FieldKind::Object`], which own their children, so a schema is always a
//! tree. Field order is significant: validation reports the first failing
//! field in declaration order.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::ConfigurationError;
use crate::media::IMAGE_MIME_TYPES;

/// The kind of value a field holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    /// A string restricted to a closed set of literals.
    Enum { values: Vec<String> },
    Array { items: Box<FieldKind> },
    Object { fields: Vec<Field> },
    /// A binary payload sent as a data URI, restricted to the listed MIME
    /// types. Input only.
    Media { accept: Vec<String> },
}

impl FieldKind {
    /// Short name used in error constraints (`type:string`) and messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Enum { .. } => "enum",
            FieldKind::Array { .. } => "array",
            FieldKind::Object { .. } => "object",
            FieldKind::Media { .. } => "media",
        }
    }

    /// Whether a value of this kind can be interpolated as text.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            FieldKind::String | FieldKind::Number | FieldKind::Boolean | FieldKind::Enum { .. }
        )
    }

    fn contains_media(&self) -> bool {
        match self {
            FieldKind::Media { .. } => true,
            FieldKind::Array { items } => items.contains_media(),
            FieldKind::Object { fields } => fields.iter().any(|f| f.kind.contains_media()),
            _ => false,
        }
    }
}

/// A bound on a field's value. Lengths count characters for strings and
/// items for arrays; numeric bounds apply to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Constraint {
    MinLength(usize),
    MaxLength(usize),
    /// Inclusive lower bound.
    Min(f64),
    /// Inclusive upper bound.
    Max(f64),
    /// Exclusive lower bound ("must be > 0").
    GreaterThan(f64),
}

impl Constraint {
    /// Whether a string or array of `len` elements satisfies this bound.
    /// Numeric bounds never apply to lengths.
    pub fn admits_len(&self, len: usize) -> bool {
        match *self {
            Constraint::MinLength(min) => len >= min,
            Constraint::MaxLength(max) => len <= max,
            _ => true,
        }
    }

    /// Whether a number satisfies this bound. Length bounds never apply to
    /// numbers.
    pub fn admits_number(&self, n: f64) -> bool {
        match *self {
            Constraint::Min(min) => n >= min,
            Constraint::Max(max) => n <= max,
            Constraint::GreaterThan(bound) => n > bound,
            _ => true,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::MinLength(n) => write!(f, "minLength:{n}"),
            Constraint::MaxLength(n) => write!(f, "maxLength:{n}"),
            Constraint::Min(n) => write!(f, "min:{n}"),
            Constraint::Max(n) => write!(f, "max:{n}"),
            Constraint::GreaterThan(n) => write!(f, "gt:{n}"),
        }
    }
}

/// A named, typed slot in a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

impl Field {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            optional: false,
            description: None,
            constraints: Vec::new(),
        }
    }

    pub fn string(name: &str) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub fn number(name: &str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn boolean(name: &str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// A media field accepting the image types every backend can read.
    pub fn media(name: &str) -> Self {
        Self::media_of(name, IMAGE_MIME_TYPES)
    }

    pub fn media_of(name: &str, accept: &[&str]) -> Self {
        Self::new(
            name,
            FieldKind::Media {
                accept: accept.iter().map(|t| t.to_string()).collect(),
            },
        )
    }

    pub fn enumeration(name: &str, values: &[&str]) -> Self {
        Self::new(
            name,
            FieldKind::Enum {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
        )
    }

    pub fn array(name: &str, items: FieldKind) -> Self {
        Self::new(
            name,
            FieldKind::Array {
                items: Box::new(items),
            },
        )
    }

    /// An array whose elements are objects with the given fields.
    pub fn object_array(name: &str, fields: Vec<Field>) -> Self {
        Self::array(name, FieldKind::Object { fields })
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn constrain(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn min_length(self, n: usize) -> Self {
        self.constrain(Constraint::MinLength(n))
    }

    pub fn max_length(self, n: usize) -> Self {
        self.constrain(Constraint::MaxLength(n))
    }

    pub fn min(self, n: f64) -> Self {
        self.constrain(Constraint::Min(n))
    }

    pub fn max(self, n: f64) -> Self {
        self.constrain(Constraint::Max(n))
    }

    pub fn greater_than(self, n: f64) -> Self {
        self.constrain(Constraint::GreaterThan(n))
    }
}

/// The root object of an input or output contract.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Reject duplicate field names at any depth.
    pub(crate) fn check_unique(&self, tool: &str) -> Result<(), ConfigurationError> {
        check_unique_fields(tool, &self.fields)
    }

    /// Reject media fields anywhere in the tree. Models return JSON, not
    /// binary payloads.
    pub(crate) fn check_no_media(&self, tool: &str) -> Result<(), ConfigurationError> {
        match self.fields.iter().find(|f| f.kind.contains_media()) {
            Some(field) => Err(ConfigurationError::MediaInOutput {
                tool: tool.to_string(),
                field: field.name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Render this schema as a JSON Schema document.
    pub fn to_json_schema(&self) -> Value {
        object_schema(&self.fields, None)
    }
}

fn check_unique_fields(tool: &str, fields: &[Field]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(ConfigurationError::DuplicateField {
                tool: tool.to_string(),
                field: field.name.clone(),
            });
        }
        let mut kind = &field.kind;
        while let FieldKind::Array { items } = kind {
            kind = items;
        }
        if let FieldKind::Object { fields } = kind {
            check_unique_fields(tool, fields)?;
        }
    }
    Ok(())
}

fn object_schema(fields: &[Field], description: Option<&str>) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for field in fields {
        properties.insert(field.name.clone(), field_schema(field));
        if !field.optional {
            required.push(Value::String(field.name.clone()));
        }
    }

    let mut schema = json!({
        "type": "object",
        "properties": properties,
        "required": required,
    });
    if let Some(description) = description {
        schema["description"] = Value::String(description.to_string());
    }
    schema
}

fn field_schema(field: &Field) -> Value {
    let mut schema = kind_schema(&field.kind);
    if let Some(description) = &field.description {
        schema["description"] = Value::String(description.clone());
    }

    let is_array = matches!(field.kind, FieldKind::Array { .. });
    for constraint in &field.constraints {
        let (key, value) = match *constraint {
            Constraint::MinLength(n) if is_array => ("minItems", json!(n)),
            Constraint::MaxLength(n) if is_array => ("maxItems", json!(n)),
            Constraint::MinLength(n) => ("minLength", json!(n)),
            Constraint::MaxLength(n) => ("maxLength", json!(n)),
            Constraint::Min(n) => ("minimum", json!(n)),
            Constraint::Max(n) => ("maximum", json!(n)),
            Constraint::GreaterThan(n) => ("exclusiveMinimum", json!(n)),
        };
        schema[key] = value;
    }
    schema
}

fn kind_schema(kind: &FieldKind) -> Value {
    match kind {
        FieldKind::String => json!({ "type": "string" }),
        FieldKind::Number => json!({ "type": "number" }),
        FieldKind::Boolean => json!({ "type": "boolean" }),
        FieldKind::Enum { values } => json!({ "type": "string", "enum": values }),
        FieldKind::Array { items } => json!({ "type": "array", "items": kind_schema(items) }),
        FieldKind::Object { fields } => object_schema(fields, None),
        FieldKind::Media { accept } => json!({
            "type": "string",
            "contentEncoding": "base64",
            "description": format!(
                "data:<mimetype>;base64,<encoded_data> where mimetype is one of {}",
                accept.join(", ")
            ),
        }),
    }
}
