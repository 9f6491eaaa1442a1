//! Per-kind value validators and coercers.
//!
//! [`validate_value`] accepts a runtime value only if it already has the
//! shape its token kind requires. [`coerce_value`] tries the same check
//! first and then falls back to a small, fixed set of conversions.
//! Both return the normalized value or a human-readable message.

mod color;
mod dimension;
mod font;
mod shadow;
mod safe_url;


use serde_json::{Number, Value};
use themeweave_common::TokenKind;

pub use color::is_color;
pub use dimension::is_dimension;
pub use font::{is_font_weight_keyword, FONT_WEIGHT_KEYWORDS};
pub use shadow::is_shadow;
pub use safe_url::is_safe_url;

/// Validate `value` against `kind` without any conversion.
///
/// The only normalization performed is for font weights, where an in-range
/// numeric string becomes a number.
pub fn validate_value(kind: TokenKind, value: &Value) -> Result<Value, String> {
    match kind {
        TokenKind::Color => match value.as_str() {
            Some(s) if is_color(s) => Ok(value.clone()),
            _ => Err(format!("invalid color: {}", describe(value))),
        },
        TokenKind::Dimension => match value.as_str() {
            Some(s) if is_dimension(s) => Ok(value.clone()),
            _ => Err(format!("invalid dimension: {}", describe(value))),
        },
        TokenKind::Number => match value {
            Value::Number(_) => Ok(value.clone()),
            _ => Err(format!("expected number, received {}", type_name(value))),
        },
        TokenKind::String => match value {
            Value::String(_) => Ok(value.clone()),
            _ => Err(format!("expected string, received {}", type_name(value))),
        },
        TokenKind::Boolean => match value {
            Value::Bool(_) => Ok(value.clone()),
            _ => Err(format!("expected boolean, received {}", type_name(value))),
        },
        TokenKind::FontFamily => match value.as_str() {
            Some(s) if !s.trim().is_empty() => Ok(value.clone()),
            _ => Err(format!("invalid font family: {}", describe(value))),
        },
        TokenKind::FontWeight => font::validate_font_weight(value)
            .ok_or_else(|| format!("invalid font weight: {}", describe(value))),
        TokenKind::Shadow => match value.as_str() {
            Some(s) if is_shadow(s) => Ok(value.clone()),
            _ => Err(format!("invalid shadow: {}", describe(value))),
        },
        TokenKind::Url => match value.as_str() {
            Some(s) => safe_url::check_url(s).map(|()| value.clone()),
            None => Err(format!("invalid url: {}", describe(value))),
        },
    }
}

/// Validate `value`, falling back to best-effort conversion on failure.
///
/// Conversions: numeric string to number, `"true"`/`1` and `"false"`/`0` to
/// booleans, any non-null value to its string form, and a bare number to a
/// pixel dimension. Every other kind gets no fallback.
pub fn coerce_value(kind: TokenKind, value: &Value) -> Result<Value, String> {
    let message = match validate_value(kind, value) {
        Ok(valid) => return Ok(valid),
        Err(message) => message,
    };

    let coerced = match kind {
        TokenKind::Number => value.as_str().and_then(parse_number).and_then(number_value),
        TokenKind::Boolean => match value {
            Value::String(s) if s == "true" => Some(Value::Bool(true)),
            Value::String(s) if s == "false" => Some(Value::Bool(false)),
            Value::Number(n) if n.as_f64() == Some(1.0) => Some(Value::Bool(true)),
            Value::Number(n) if n.as_f64() == Some(0.0) => Some(Value::Bool(false)),
            _ => None,
        },
        TokenKind::String => match value {
            Value::Null => None,
            other => Some(Value::String(value_to_text(other))),
        },
        TokenKind::Dimension => value
            .as_f64()
            .map(|n| Value::String(format!("{}px", format_number(n)))),
        TokenKind::Color
        | TokenKind::FontFamily
        | TokenKind::FontWeight
        | TokenKind::Shadow
        | TokenKind::Url => None,
    };

    coerced.ok_or(message)
}

/// Parse a string the way a loose numeric conversion would: surrounding
/// whitespace is ignored, an empty string is zero, and non-finite results
/// are rejected.
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    // Rust accepts "inf"/"nan" spellings; those are not numbers here.
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Build a JSON number, preferring an integer representation when exact.
pub fn number_value(n: f64) -> Option<Value> {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Some(Value::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number)
}

/// Render a number the way a JavaScript `String(n)` would: no trailing `.0`
/// for integral values, and exponent form at or above 1e21 and below 1e-6.
pub fn format_number(n: f64) -> String {
    let abs = n.abs();
    if abs >= 1e21 || (abs != 0.0 && abs < 1e-6) {
        let exp = format!("{n:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    if n.fract() == 0.0 && abs < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Plain-text form of a value, as used for CSS output and string coercion.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => format_number(f),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".into(),
        other => other.to_string(),
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Number(_) | Value::Bool(_) => value.to_string(),
        other => type_name(other).to_string(),
    }
}
