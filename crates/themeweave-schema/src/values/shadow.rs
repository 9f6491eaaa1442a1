//! Box/text shadow recognition.
//!
//! Each comma-separated layer must start with an optional `inset` followed by
//! at least two lengths. Blur, spread and color after that are not checked.

use super::dimension::is_dimension;

const SHADOW_KEYWORDS: &[&str] = &["none", "inherit", "initial", "unset"];

pub fn is_shadow(s: &str) -> bool {
    let s = s.trim();
    if SHADOW_KEYWORDS.contains(&s) {
        return true;
    }
    let layers = split_top_level(s);
    !layers.is_empty() && layers.iter().all(|layer| is_shadow_layer(layer))
}

fn is_shadow_layer(layer: &str) -> bool {
    let mut parts = layer.split_whitespace().peekable();
    if parts
        .peek()
        .is_some_and(|first| first.eq_ignore_ascii_case("inset"))
    {
        parts.next();
    }
    let offsets: Vec<&str> = parts.take(2).collect();
    offsets.len() == 2 && offsets.iter().all(|p| is_dimension(p))
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut layers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                layers.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    layers.push(s[start..].trim());
    layers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_respects_parentheses() {
        let layers = split_top_level("0 1px rgba(0, 0, 0, 0.5), inset 0 2px red");
        assert_eq!(layers, vec!["0 1px rgba(0, 0, 0, 0.5)", "inset 0 2px red"]);
    }

    #[test]
    fn empty_layer_is_rejected() {
        assert!(!is_shadow("0 1px red,"));
        assert!(!is_shadow(""));
    }
}
