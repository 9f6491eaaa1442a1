use serde::{Deserialize, Serialize};

pub const DEFAULT_SELECTOR: &str = ":root";
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

/// Controls how token paths become variable names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssOptions {
    /// Prepended to every name, followed by the separator.
    pub prefix: Option<String>,
    /// Joins path segments. Defaults to `-`.
    pub separator: String,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            separator: "-".into(),
        }
    }
}

impl CssOptions {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Options for rendering several named themes into one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllThemesOptions {
    pub css: CssOptions,
    /// Theme whose block is also applied to `:root`.
    pub default_theme: Option<String>,
    /// Attribute used in per-theme selectors, e.g. `[data-theme="dark"]`.
    pub attribute: String,
}

impl Default for AllThemesOptions {
    fn default() -> Self {
        Self {
            css: CssOptions::default(),
            default_theme: None,
            attribute: DEFAULT_ATTRIBUTE.into(),
        }
    }
}

impl AllThemesOptions {
    pub fn with_default_theme(mut self, name: impl Into<String>) -> Self {
        self.default_theme = Some(name.into());
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    pub fn with_css(mut self, css: CssOptions) -> Self {
        self.css = css;
        self
    }
}
