//! Payload validation against a `ResourceSpec`
//!
//! Validation semantics:
//! - Rules are checked in declaration order; the first violation is returned
//! - A field is missing when the key is absent or its value is `null`
//! - String fields must hold a non-empty string
//! - Number fields must hold a JSON number; numeric strings are rejected
//! - Fields not named by any rule are ignored
//!
//! Presence is explicit, never truthiness: a numeric `0` is a present number.

use serde_json::{Map, Value};

use super::errors::ValidationError;
use super::types::{FieldKind, FieldRule, ResourceKind, ResourceSpec};

/// Validates a payload object against a resource spec.
///
/// Pure: the payload is not modified.
pub fn validate(spec: &ResourceSpec, payload: &Map<String, Value>) -> Result<(), ValidationError> {
    for rule in spec.fields {
        if !satisfies(rule, payload.get(rule.name)) {
            return Err(ValidationError::from_rule(rule));
        }
    }
    Ok(())
}

/// Validates an arbitrary JSON value. Anything other than an object exposes
/// no fields, so it fails on the first rule.
pub fn validate_value(spec: &ResourceSpec, payload: &Value) -> Result<(), ValidationError> {
    match payload {
        Value::Object(map) => validate(spec, map),
        _ => validate(spec, &Map::new()),
    }
}

pub fn validate_user(payload: &Value) -> Result<(), ValidationError> {
    validate_value(ResourceKind::User.spec(), payload)
}

pub fn validate_book(payload: &Value) -> Result<(), ValidationError> {
    validate_value(ResourceKind::Book.spec(), payload)
}

pub fn validate_review(payload: &Value) -> Result<(), ValidationError> {
    validate_value(ResourceKind::Review.spec(), payload)
}

fn satisfies(rule: &FieldRule, value: Option<&Value>) -> bool {
    match (rule.kind, value) {
        (_, None) | (_, Some(Value::Null)) => false,
        (FieldKind::String, Some(Value::String(s))) => !s.is_empty(),
        (FieldKind::Number, Some(Value::Number(_))) => true,
        _ => false,
    }
}
