//! Validated theme values.

use serde::Serialize;
use serde_json::Value;

use crate::schema::PATH_SEPARATOR;

/// A tree of concrete values that passed validation against a schema.
///
/// Only the validation engine creates themes, so holding a `Theme` means the
/// data matched its schema when it was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Theme(Value);

impl Theme {
    pub(crate) fn from_validated(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Look up a value by dot path; an empty path returns the whole tree.
    pub fn get(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.0);
        }
        path.split(PATH_SEPARATOR)
            .try_fold(&self.0, |node, segment| node.as_object()?.get(segment))
    }
}
