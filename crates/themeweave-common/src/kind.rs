use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of value kinds a design token can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Color,
    Dimension,
    Number,
    String,
    Boolean,
    FontFamily,
    FontWeight,
    Shadow,
    Url,
}

impl TokenKind {
    pub const ALL: [TokenKind; 9] = [
        TokenKind::Color,
        TokenKind::Dimension,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Boolean,
        TokenKind::FontFamily,
        TokenKind::FontWeight,
        TokenKind::Shadow,
        TokenKind::Url,
    ];

    /// Name used in definition documents and error reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Color => "color",
            TokenKind::Dimension => "dimension",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Boolean => "boolean",
            TokenKind::FontFamily => "fontFamily",
            TokenKind::FontWeight => "fontWeight",
            TokenKind::Shadow => "shadow",
            TokenKind::Url => "url",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown token kind: {s}"))
    }
}
