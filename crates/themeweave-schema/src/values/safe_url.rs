//! URL safety checks.
//!
//! Relative paths and fragments pass unchecked. Absolute URLs must be
//! `http:`, `https:` or `data:`, and `data:` URLs must not carry a MIME type
//! a browser would execute.

use url::Url;

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "data"];
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "file:"];
const BLOCKED_DATA_TYPES: &[&str] = &["text/html", "application/javascript", "application/x-javascript"];

pub fn is_safe_url(s: &str) -> bool {
    check_url(s).is_ok()
}

pub(super) fn check_url(s: &str) -> Result<(), String> {
    let trimmed = s.trim();
    if is_relative(trimmed) {
        return Ok(());
    }

    let lowered = trimmed.to_ascii_lowercase();
    if let Some(scheme) = BLOCKED_SCHEMES.iter().find(|p| lowered.starts_with(**p)) {
        return Err(format!("url scheme '{scheme}' is not allowed"));
    }

    let parsed = Url::parse(trimmed).map_err(|e| format!("invalid url \"{trimmed}\": {e}"))?;
    let scheme = parsed.scheme();
    if !ALLOWED_SCHEMES.contains(&scheme) {
        return Err(format!("url scheme '{scheme}:' is not allowed"));
    }

    if scheme == "data" {
        let mime = data_mime_type(parsed.path());
        if BLOCKED_DATA_TYPES.contains(&mime.as_str()) {
            return Err(format!("data url with type '{mime}' is not allowed"));
        }
    }

    Ok(())
}

fn is_relative(s: &str) -> bool {
    s.starts_with('/') || s.starts_with("./") || s.starts_with("../") || s.starts_with('#')
}

/// MIME type of a `data:` URL path (`text/html;base64,...` -> `text/html`).
fn data_mime_type(path: &str) -> String {
    path.split([';', ','])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
