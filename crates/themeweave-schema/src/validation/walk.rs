//! The recursive schema walk shared by every validation mode.

use serde_json::{Map, Value};
use themeweave_common::{Expected, ValidationError};

use super::ValidationMode;
use crate::schema::{join_path, Group, SchemaNode};
use crate::token::Token;
use crate::values::{coerce_value, validate_value};

pub(super) const REQUIRED_MISSING: &str = "required value missing";
pub(super) const EXPECTED_OBJECT: &str = "expected object for nested group";

/// Walk one group. `input` is `None` when the group is absent from the data;
/// it is then walked as if empty so defaults and missing leaves are handled
/// at their own paths.
pub(super) fn walk_group(
    group: &Group,
    input: Option<&Map<String, Value>>,
    path: &str,
    mode: ValidationMode,
    errors: &mut Vec<ValidationError>,
) -> Map<String, Value> {
    let mut output = Map::new();

    for (key, node) in group {
        let child_path = join_path(path, key);
        let field = input
            .and_then(|fields| fields.get(key))
            .filter(|value| !value.is_null());

        match node {
            SchemaNode::Token(token) => {
                if let Some(value) = walk_token(token, field, &child_path, mode, errors) {
                    output.insert(key.clone(), value);
                }
            }
            SchemaNode::Group(children) => match field {
                Some(Value::Object(fields)) => {
                    let nested = walk_group(children, Some(fields), &child_path, mode, errors);
                    output.insert(key.clone(), Value::Object(nested));
                }
                Some(other) => errors.push(ValidationError {
                    path: child_path,
                    message: EXPECTED_OBJECT.into(),
                    expected: Expected::Object,
                    received: Some(other.clone()),
                }),
                None => {
                    let nested = walk_group(children, None, &child_path, mode, errors);
                    if !(mode == ValidationMode::Partial && nested.is_empty()) {
                        output.insert(key.clone(), Value::Object(nested));
                    }
                }
            },
        }
    }

    output
}

fn walk_token(
    token: &Token,
    field: Option<&Value>,
    path: &str,
    mode: ValidationMode,
    errors: &mut Vec<ValidationError>,
) -> Option<Value> {
    let expected = Expected::Kind(token.kind());

    let Some(value) = field else {
        if let Some(default) = token.default_value() {
            return Some(default.clone());
        }
        if mode != ValidationMode::Partial {
            errors.push(ValidationError {
                path: path.to_string(),
                message: REQUIRED_MISSING.into(),
                expected,
                received: None,
            });
        }
        return None;
    };

    let checked = match mode {
        ValidationMode::Coerce => coerce_value(token.kind(), value),
        ValidationMode::Strict | ValidationMode::Partial => validate_value(token.kind(), value),
    };

    match checked {
        Ok(valid) => Some(valid),
        Err(message) => {
            errors.push(ValidationError {
                path: path.to_string(),
                message,
                expected,
                received: Some(value.clone()),
            });
            None
        }
    }
}
