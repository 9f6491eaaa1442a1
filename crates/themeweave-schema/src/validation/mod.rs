//! Theme validation against a schema.
//!
//! [`validate`], [`validate_partial`] and [`coerce`] all run the same walk
//! over the schema in a different [`ValidationMode`]. The walk visits every
//! token and collects every error instead of stopping at the first one.

mod walk;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use themeweave_common::{Expected, ValidationError, ValidationErrors};

use crate::schema::Schema;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Every token without a default must be present and valid.
    #[default]
    Strict,
    /// Missing tokens are skipped; present ones must be valid.
    Partial,
    /// Like strict, but values may be converted to the expected kind.
    Coerce,
}

pub type ValidationResult = Result<Theme, ValidationErrors>;

pub fn validate(schema: &Schema, input: &Value) -> ValidationResult {
    validate_with_mode(schema, input, ValidationMode::Strict)
}

pub fn validate_partial(schema: &Schema, input: &Value) -> ValidationResult {
    validate_with_mode(schema, input, ValidationMode::Partial)
}

pub fn coerce(schema: &Schema, input: &Value) -> ValidationResult {
    validate_with_mode(schema, input, ValidationMode::Coerce)
}

/// Validate `input` against `schema` in the given mode.
///
/// On success the returned theme contains only schema fields, with
/// declared defaults filled in for anything missing.
pub fn validate_with_mode(schema: &Schema, input: &Value, mode: ValidationMode) -> ValidationResult {
    let Value::Object(fields) = input else {
        return Err(ValidationErrors(vec![ValidationError {
            path: String::new(),
            message: walk::EXPECTED_OBJECT.into(),
            expected: Expected::Object,
            received: Some(input.clone()),
        }]));
    };

    let mut errors = Vec::new();
    let output = walk::walk_group(schema.root(), Some(fields), "", mode, &mut errors);

    if errors.is_empty() {
        Ok(Theme::from_validated(Value::Object(output)))
    } else {
        tracing::debug!(?mode, errors = errors.len(), "theme validation failed");
        Err(ValidationErrors(errors))
    }
}
