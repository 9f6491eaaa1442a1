use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::kind::TokenKind;

/// Error type returned by caller-supplied theme fetchers.
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("invalid schema node at '{path}': expected a token or a nested group")]
    InvalidNode { path: String },

    #[error("circular reference detected in schema at '{path}'")]
    Cycle { path: String },

    #[error("unknown fragment '{name}' included at '{path}'")]
    UnknownFragment { name: String, path: String },

    #[error("invalid default for token '{path}': {message}")]
    InvalidDefault { path: String, message: String },

    #[error("unexpected field '{field}' on token '{path}'")]
    InvalidTokenField { path: String, field: String },

    #[error("invalid group key '{key}' at '{path}': keys must be non-empty and contain no '.'")]
    InvalidKey { path: String, key: String },
}

/// What a validator expected to find at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Kind(TokenKind),
    Object,
}

impl Expected {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expected::Kind(kind) => kind.as_str(),
            Expected::Object => "object",
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Expected {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single problem found while validating a theme against its schema.
///
/// `received` is `None` when the value was missing entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
    pub expected: Expected,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Value>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every error found by one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{}", join_errors(.0))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// First error recorded for `path`, if any.
    pub fn at(&self, path: &str) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.path == path)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("failed to fetch theme '{theme_id}': {source}")]
    Fetch {
        theme_id: String,
        #[source]
        source: FetchError,
    },

    #[error("theme validation failed for '{theme_id}': {errors}")]
    Validation {
        theme_id: String,
        errors: ValidationErrors,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeweaveError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("theme '{theme}' is invalid: {errors}")]
    Validation {
        theme: String,
        errors: ValidationErrors,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("{0}")]
    Other(String),
}
