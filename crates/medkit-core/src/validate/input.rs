use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::InputError;
use crate::media::MediaPayload;
use crate::schema::{Constraint, Field, FieldKind, Schema};

use super::{child_path, index_path, ROOT};

/// A caller-supplied value that has been checked against its field kind.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    /// Strings and enum literals.
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<InputValue>),
    Object(BTreeMap<String, InputValue>),
    Media(MediaPayload),
}

impl InputValue {
    /// Text form used by scalar interpolation. `None` for lists, objects,
    /// and media.
    pub fn as_text(&self) -> Option<String> {
        match self {
            InputValue::Text(s) => Some(s.clone()),
            InputValue::Number(n) => Some(n.to_string()),
            InputValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Whether a conditional block governed by this value is included.
    pub fn is_truthy(&self) -> bool {
        match self {
            InputValue::Text(s) => !s.is_empty(),
            InputValue::Bool(b) => *b,
            InputValue::Number(n) => *n != 0.0,
            InputValue::List(items) => !items.is_empty(),
            InputValue::Object(_) | InputValue::Media(_) => true,
        }
    }
}

/// Input that passed validation for one specific tool. Absent optional
/// fields are simply missing from `fields`; undeclared keys are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    tool: String,
    fields: BTreeMap<String, InputValue>,
}

impl ValidatedInput {
    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &BTreeMap<String, InputValue> {
        &self.fields
    }
}

/// Check `raw` against `schema`.
///
/// Fields are checked in declaration order and the first violation is
/// returned. Missing required fields fail with `required`, wrong kinds with
/// `type:<kind>`, enum misses with `enum`, unparsable media with `dataUri`,
/// media of a type the field does not accept with `mimeType`, and bound
/// violations with the constraint itself (e.g. `minLength:2`).
/// A `null` optional field counts as absent.
pub fn validate_input(tool: &str, schema: &Schema, raw: &Value) -> Result<ValidatedInput, InputError> {
    let Value::Object(map) = raw else {
        return Err(InputError::new(ROOT, "type:object"));
    };

    Ok(ValidatedInput {
        tool: tool.to_string(),
        fields: validate_fields(schema.fields(), map, "")?,
    })
}

fn validate_fields(
    fields: &[Field],
    map: &Map<String, Value>,
    prefix: &str,
) -> Result<BTreeMap<String, InputValue>, InputError> {
    let mut out = BTreeMap::new();
    for field in fields {
        let path = child_path(prefix, &field.name);
        match map.get(&field.name) {
            None | Some(Value::Null) if field.optional => continue,
            None | Some(Value::Null) => return Err(InputError::new(path, "required")),
            Some(value) => {
                let checked = validate_value(&field.kind, &field.constraints, value, &path)?;
                out.insert(field.name.clone(), checked);
            }
        }
    }
    Ok(out)
}

fn validate_value(
    kind: &FieldKind,
    constraints: &[Constraint],
    value: &Value,
    path: &str,
) -> Result<InputValue, InputError> {
    let mismatch = || InputError::new(path, format!("type:{}", kind.label()));

    let checked = match kind {
        FieldKind::String => {
            let s = value.as_str().ok_or_else(mismatch)?;
            check_len(constraints, s.chars().count(), path)?;
            InputValue::Text(s.to_string())
        }
        FieldKind::Number => {
            let n = value.as_f64().ok_or_else(mismatch)?;
            check_number(constraints, n, path)?;
            InputValue::Number(n)
        }
        FieldKind::Boolean => InputValue::Bool(value.as_bool().ok_or_else(mismatch)?),
        FieldKind::Enum { values } => {
            let s = value.as_str().ok_or_else(mismatch)?;
            if !values.iter().any(|v| v == s) {
                return Err(InputError::new(path, "enum"));
            }
            InputValue::Text(s.to_string())
        }
        FieldKind::Array { items } => {
            let elements = value.as_array().ok_or_else(mismatch)?;
            check_len(constraints, elements.len(), path)?;
            let list = elements
                .iter()
                .enumerate()
                .map(|(i, element)| validate_value(items, &[], element, &index_path(path, i)))
                .collect::<Result<Vec<_>, _>>()?;
            InputValue::List(list)
        }
        FieldKind::Object { fields } => {
            let map = value.as_object().ok_or_else(mismatch)?;
            InputValue::Object(validate_fields(fields, map, path)?)
        }
        FieldKind::Media { accept } => {
            let uri = value.as_str().ok_or_else(mismatch)?;
            let media =
                MediaPayload::from_data_uri(uri).ok_or_else(|| InputError::new(path, "dataUri"))?;
            if !accept.iter().any(|t| *t == media.mime_type) {
                return Err(InputError::new(path, "mimeType"));
            }
            InputValue::Media(media)
        }
    };
    Ok(checked)
}

fn check_len(constraints: &[Constraint], len: usize, path: &str) -> Result<(), InputError> {
    match constraints.iter().find(|c| !c.admits_len(len)) {
        Some(violated) => Err(InputError::new(path, violated.to_string())),
        None => Ok(()),
    }
}

fn check_number(constraints: &[Constraint], n: f64, path: &str) -> Result<(), InputError> {
    match constraints.iter().find(|c| !c.admits_number(n)) {
        Some(violated) => Err(InputError::new(path, violated.to_string())),
        None => Ok(()),
    }
}
