//! Token declarations.
//!
//! A [`Token`] is a leaf of a schema: a value kind plus an optional default
//! and description. Tokens are values; `with_default` and `with_description`
//! return a new token and leave the receiver untouched.

use serde::Serialize;
use serde_json::Value;
use themeweave_common::TokenKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            default: None,
            description: None,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns a copy of this token carrying `value` as its default.
    ///
    /// The default is checked against the token kind when the owning
    /// schema is built.
    pub fn with_default(&self, value: impl Into<Value>) -> Token {
        Token {
            default: Some(value.into()),
            ..self.clone()
        }
    }

    /// Returns a copy of this token carrying `description`.
    pub fn with_description(&self, description: impl Into<String>) -> Token {
        Token {
            description: Some(description.into()),
            ..self.clone()
        }
    }

    pub(crate) fn replace_default(self, value: Value) -> Token {
        Token {
            default: Some(value),
            ..self
        }
    }
}

pub fn color() -> Token {
    Token::new(TokenKind::Color)
}

pub fn dimension() -> Token {
    Token::new(TokenKind::Dimension)
}

pub fn number() -> Token {
    Token::new(TokenKind::Number)
}

pub fn string() -> Token {
    Token::new(TokenKind::String)
}

pub fn boolean() -> Token {
    Token::new(TokenKind::Boolean)
}

pub fn font_family() -> Token {
    Token::new(TokenKind::FontFamily)
}

pub fn font_weight() -> Token {
    Token::new(TokenKind::FontWeight)
}

pub fn shadow() -> Token {
    Token::new(TokenKind::Shadow)
}

pub fn url() -> Token {
    Token::new(TokenKind::Url)
}
