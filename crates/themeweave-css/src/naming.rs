//! Token path to CSS custom-property name.
//!
//! The generator and the `var()` helpers share [`var_name`], so a reference
//! always names the variable the generator emitted for the same path.

use themeweave_schema::{Schema, PATH_SEPARATOR};

use crate::escape::escape_css_value;
use crate::options::CssOptions;

/// Convert one camelCase path segment to kebab-case.
///
/// A hyphen goes before an uppercase letter that follows a lowercase letter
/// or digit, and before the last capital of an acronym that starts a new
/// word (`XMLHttp` becomes `xml-http`). Only ASCII letters mark a boundary;
/// other letters are lowercased in place.
pub fn kebab_case(segment: &str) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let mut out = String::with_capacity(segment.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('-');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Full custom-property name for a dot path, including the leading `--`.
pub fn var_name(path: &str, options: &CssOptions) -> String {
    let sep = options.separator.as_str();
    let body = path
        .split(PATH_SEPARATOR)
        .map(kebab_case)
        .collect::<Vec<_>>()
        .join(sep);

    match options.prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => format!("--{prefix}{sep}{body}"),
        _ => format!("--{body}"),
    }
}

/// `var(--name)` reference for a dot path.
pub fn css_var(path: &str, options: &CssOptions) -> String {
    format!("var({})", var_name(path, options))
}

/// `var(--name, fallback)` reference. The fallback is escaped like any
/// emitted value.
pub fn css_var_with_fallback(path: &str, fallback: &str, options: &CssOptions) -> String {
    format!(
        "var({}, {})",
        var_name(path, options),
        escape_css_value(fallback)
    )
}

/// Variable references bound to one schema.
///
/// Unlike the free functions, lookups fail for paths that are not tokens in
/// the schema instead of producing a reference to a variable that is never
/// emitted.
#[derive(Debug, Clone)]
pub struct CssVars {
    schema: Schema,
    options: CssOptions,
}

impl CssVars {
    pub fn new(schema: Schema, options: CssOptions) -> Self {
        Self { schema, options }
    }

    pub fn options(&self) -> &CssOptions {
        &self.options
    }

    /// Custom-property name for `path`, or `None` when it is not a token.
    pub fn name(&self, path: &str) -> Option<String> {
        self.schema.token_at(path)?;
        Some(var_name(path, &self.options))
    }

    pub fn var(&self, path: &str) -> Option<String> {
        self.name(path).map(|name| format!("var({name})"))
    }

    pub fn var_with_fallback(&self, path: &str, fallback: &str) -> Option<String> {
        self.schema.token_at(path)?;
        Some(css_var_with_fallback(path, fallback, &self.options))
    }

    /// Every variable name the schema can produce, in declaration order.
    pub fn names(&self) -> Vec<String> {
        self.schema
            .token_paths()
            .iter()
            .map(|path| var_name(path, &self.options))
            .collect()
    }
}
