//! Font weight recognition.

use serde_json::Value;

pub const FONT_WEIGHT_KEYWORDS: &[&str] =
    &["normal", "bold", "bolder", "lighter", "inherit", "initial", "unset"];

pub fn is_font_weight_keyword(s: &str) -> bool {
    FONT_WEIGHT_KEYWORDS.contains(&s)
}

/// Accepts an integer 1-1000, a keyword, or a numeric string in range.
/// Numeric strings come back as numbers.
pub(super) fn validate_font_weight(value: &Value) -> Option<Value> {
    match value {
        Value::Number(n) => {
            let weight = n.as_f64()?;
            in_range(weight).then(|| value.clone())
        }
        Value::String(s) if is_font_weight_keyword(s) => Some(value.clone()),
        Value::String(s) => {
            let digits = s.trim();
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let weight: u32 = digits.parse().ok()?;
            in_range(f64::from(weight)).then(|| Value::from(weight))
        }
        _ => None,
    }
}

fn in_range(weight: f64) -> bool {
    weight.fract() == 0.0 && (1.0..=1000.0).contains(&weight)
}
