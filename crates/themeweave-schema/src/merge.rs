//! Deep merging of theme data.

use serde_json::Value;

/// Merge `overlay` on top of `base`.
///
/// Objects merge key by key, recursively. Any other overlay value replaces
/// the base value, except `null`, which leaves the base value in place.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, value) in overlay_map {
                let next = match merged.get(key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            Value::Object(merged)
        }
        (_, Value::Null) => base.clone(),
        (_, other) => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overlay_wins_for_leaves() {
        let merged = deep_merge(
            &json!({ "colors": { "primary": "#000", "secondary": "#111" } }),
            &json!({ "colors": { "primary": "#fff" } }),
        );
        assert_eq!(
            merged,
            json!({ "colors": { "primary": "#fff", "secondary": "#111" } })
        );
    }

    #[test]
    fn null_keeps_base_value() {
        let merged = deep_merge(&json!({ "a": 1 }), &json!({ "a": null, "b": 2 }));
        assert_eq!(merged, json!({ "a": 1, "b": 2 }));
    }

    #[test]
    fn non_object_overlay_replaces_group() {
        let merged = deep_merge(&json!({ "a": { "b": 1 } }), &json!({ "a": "flat" }));
        assert_eq!(merged, json!({ "a": "flat" }));
    }

    #[test]
    fn non_object_root_overlay_replaces_base() {
        assert_eq!(deep_merge(&json!({ "a": 1 }), &json!(5)), json!(5));
    }
}
