//! Output escaping for CSS declaration values.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that could end a declaration, open or close a block, or
/// break out of a quoted string.
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\"';{}\r\n]"#).unwrap());

/// Backslash-escape every character that could change the structure of the
/// surrounding CSS. Applied to every value the generator emits.
pub fn escape_css_value(value: &str) -> String {
    UNSAFE_CHARS
        .replace_all(value, |caps: &regex::Captures<'_>| format!("\\{}", &caps[0]))
        .into_owned()
}
