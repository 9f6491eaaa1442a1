//! CSS length/percentage recognition.

use regex::Regex;
use std::sync::LazyLock;

/// Units accepted after the numeric part of a dimension.
pub const UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "ch", "ex", "cm", "mm", "in", "pt", "pc",
    "svh", "svw", "dvh", "dvw", "lvh", "lvw",
];

static DIMENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let units = UNITS.join("|");
    Regex::new(&format!(r"^[+-]?([0-9]*\.)?[0-9]+({units})$")).unwrap()
});

/// Whether `s` is a signed decimal followed by a known unit, or the bare `"0"`.
pub fn is_dimension(s: &str) -> bool {
    s == "0" || DIMENSION_RE.is_match(s)
}
