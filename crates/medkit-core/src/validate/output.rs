use serde_json::{Map, Number, Value};

use crate::error::ValidationFailure;
use crate::schema::{Constraint, Field, FieldKind, Schema};

use super::{child_path, index_path, ROOT};

/// Reconcile a model's candidate answer with the output contract.
///
/// Every declared field is checked in declaration order and the first
/// failure is reported by path (`severity`, `interactions[0].severity`).
/// The only coercion is a numeric string that parses cleanly into a number
/// field (`"0.8"` -> `0.8`). Undeclared keys are stripped; a `null` optional
/// field is treated as absent and omitted. Values that are already correct
/// are passed through unchanged.
pub fn validate_output(schema: &Schema, candidate: &Value) -> Result<Value, ValidationFailure> {
    let Value::Object(map) = candidate else {
        return Err(ValidationFailure::new(ROOT, "expected object"));
    };
    Ok(Value::Object(reconcile_fields(schema.fields(), map, "")?))
}

fn reconcile_fields(
    fields: &[Field],
    map: &Map<String, Value>,
    prefix: &str,
) -> Result<Map<String, Value>, ValidationFailure> {
    let mut out = Map::new();
    for field in fields {
        let path = child_path(prefix, &field.name);
        match map.get(&field.name) {
            None | Some(Value::Null) if field.optional => continue,
            None | Some(Value::Null) => return Err(ValidationFailure::new(path, "missing")),
            Some(value) => {
                let reconciled = reconcile_value(&field.kind, &field.constraints, value, &path)?;
                out.insert(field.name.clone(), reconciled);
            }
        }
    }
    Ok(out)
}

fn reconcile_value(
    kind: &FieldKind,
    constraints: &[Constraint],
    value: &Value,
    path: &str,
) -> Result<Value, ValidationFailure> {
    let mismatch = || ValidationFailure::new(path, format!("expected {}", kind.label()));

    match kind {
        FieldKind::String => {
            let s = value.as_str().ok_or_else(mismatch)?;
            check_len(constraints, s.chars().count(), path)?;
            Ok(value.clone())
        }
        FieldKind::Number => {
            let (n, coerced) = match value {
                Value::Number(num) => (num.as_f64().ok_or_else(mismatch)?, value.clone()),
                Value::String(s) => coerce_number(s).ok_or_else(mismatch)?,
                _ => return Err(mismatch()),
            };
            if constraints.iter().any(|c| !c.admits_number(n)) {
                return Err(ValidationFailure::new(path, "out of range"));
            }
            Ok(coerced)
        }
        FieldKind::Boolean => {
            value.as_bool().ok_or_else(mismatch)?;
            Ok(value.clone())
        }
        FieldKind::Enum { values } => {
            let s = value.as_str().ok_or_else(mismatch)?;
            if !values.iter().any(|v| v == s) {
                return Err(ValidationFailure::new(path, "not in enum"));
            }
            Ok(value.clone())
        }
        FieldKind::Array { items } => {
            let elements = value.as_array().ok_or_else(mismatch)?;
            check_len(constraints, elements.len(), path)?;
            let reconciled = elements
                .iter()
                .enumerate()
                .map(|(i, element)| reconcile_value(items, &[], element, &index_path(path, i)))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::Array(reconciled))
        }
        FieldKind::Object { fields } => {
            let map = value.as_object().ok_or_else(mismatch)?;
            Ok(Value::Object(reconcile_fields(fields, map, path)?))
        }
        // Output schemas are checked for media at registration.
        FieldKind::Media { .. } => Err(ValidationFailure::new(path, "media is not a valid output kind")),
    }
}

/// Parse a numeric string exactly as written: no trimming, no units, finite
/// values only. Integers stay integers.
fn coerce_number(s: &str) -> Option<(f64, Value)> {
    if let Ok(i) = s.parse::<i64>() {
        return Some((i as f64, Value::Number(Number::from(i))));
    }
    let f = s.parse::<f64>().ok().filter(|f| f.is_finite())?;
    Some((f, Value::Number(Number::from_f64(f)?)))
}

fn check_len(constraints: &[Constraint], len: usize, path: &str) -> Result<(), ValidationFailure> {
    match constraints.iter().find(|c| !c.admits_len(len)) {
        Some(violated) => Err(ValidationFailure::new(path, format!("violates {violated}"))),
        None => Ok(()),
    }
}
