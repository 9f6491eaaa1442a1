//! CSS generation from validated themes.
//!
//! Walks the schema and the theme together; the theme is trusted to match
//! the schema and is not validated again here. Values are always escaped.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use themeweave_schema::values::value_to_text;
use themeweave_schema::{Group, Schema, SchemaNode, Theme};
use tracing::debug;

use crate::escape::escape_css_value;
use crate::naming::var_name;
use crate::options::{AllThemesOptions, CssOptions, DEFAULT_SELECTOR};

/// Custom-property name (with `--`) to escaped value, in schema order.
pub type CssVariables = IndexMap<String, String>;

// =============================================================================
// VARIABLES
// =============================================================================

/// Collect one variable per token leaf that has a value in `theme`.
pub fn to_css_variables(schema: &Schema, theme: &Theme, options: &CssOptions) -> CssVariables {
    let mut vars = CssVariables::new();
    if let Some(values) = theme.as_value().as_object() {
        collect(schema.root(), values, "", options, &mut vars);
    }
    vars
}

fn collect(
    group: &Group,
    values: &Map<String, Value>,
    parent: &str,
    options: &CssOptions,
    vars: &mut CssVariables,
) {
    for (key, node) in group {
        let Some(value) = values.get(key).filter(|v| !v.is_null()) else {
            continue;
        };
        let path = if parent.is_empty() {
            key.clone()
        } else {
            format!("{parent}.{key}")
        };

        match node {
            SchemaNode::Token(_) => {
                let text = escape_css_value(&value_to_text(value));
                vars.insert(var_name(&path, options), text);
            }
            SchemaNode::Group(children) => {
                if let Some(nested) = value.as_object() {
                    collect(children, nested, &path, options, vars);
                }
            }
        }
    }
}

// =============================================================================
// RULE BLOCKS
// =============================================================================

/// Render `theme` as a single rule block. `selector` defaults to `:root`.
pub fn to_css_string(
    schema: &Schema,
    theme: &Theme,
    selector: Option<&str>,
    options: &CssOptions,
) -> String {
    let vars = to_css_variables(schema, theme, options);
    rule_block(selector.unwrap_or(DEFAULT_SELECTOR), &vars)
}

/// Render several named themes as one stylesheet.
///
/// Each theme gets an attribute-selector block; the default theme's block
/// also targets `:root`. Themes that produce no variables are left out.
pub fn to_css_string_all(
    schema: &Schema,
    themes: &IndexMap<String, Theme>,
    options: &AllThemesOptions,
) -> String {
    let mut blocks = Vec::with_capacity(themes.len());

    for (name, theme) in themes {
        let vars = to_css_variables(schema, theme, &options.css);
        if vars.is_empty() {
            debug!(theme = %name, "theme produced no variables, skipping");
            continue;
        }

        let attribute = format!("[{}=\"{}\"]", options.attribute, escape_css_value(name));
        let selector = if options.default_theme.as_deref() == Some(name.as_str()) {
            format!("{DEFAULT_SELECTOR}, {attribute}")
        } else {
            attribute
        };
        blocks.push(rule_block(&selector, &vars));
    }

    blocks.join("\n\n")
}

fn rule_block(selector: &str, vars: &CssVariables) -> String {
    let mut css = format!("{selector} {{\n");
    for (name, value) in vars {
        css.push_str(&format!("  {name}: {value};\n"));
    }
    css.push('}');
    css
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use themeweave_schema::{
        boolean, color, dimension, font_weight, number, string, validate, validate_partial,
        Definition, SchemaBuilder,
    };

    fn schema() -> Schema {
        SchemaBuilder::new()
            .entry(
                "colors",
                Definition::group([
                    ("primary", color().into()),
                    ("textMuted", color().into()),
                ]),
            )
            .entry(
                "spacing",
                Definition::group([("md", dimension().with_default("16px").into())]),
            )
            .build()
            .unwrap()
    }

    fn light() -> Theme {
        validate(
            &schema(),
            &json!({ "colors": { "primary": "#3b82f6", "textMuted": "#6b7280" } }),
        )
        .unwrap()
    }

    fn dark() -> Theme {
        validate(
            &schema(),
            &json!({
                "colors": { "primary": "#60a5fa", "textMuted": "#9ca3af" },
                "spacing": { "md": "1rem" }
            }),
        )
        .unwrap()
    }

    #[test]
    fn variables_follow_schema_order() {
        let vars = to_css_variables(&schema(), &light(), &CssOptions::default());
        let names: Vec<&str> = vars.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["--colors-primary", "--colors-text-muted", "--spacing-md"]);
        assert_eq!(vars["--spacing-md"], "16px");
    }

    #[test]
    fn non_string_values_render_as_text() {
        let schema = SchemaBuilder::new()
            .entry("weight", font_weight())
            .entry("scale", number())
            .entry("rounded", boolean())
            .build()
            .unwrap();
        let theme = validate(&schema, &json!({ "weight": 600, "scale": 1.25, "rounded": false }))
            .unwrap();
        let vars = to_css_variables(&schema, &theme, &CssOptions::default());
        assert_eq!(vars["--weight"], "600");
        assert_eq!(vars["--scale"], "1.25");
        assert_eq!(vars["--rounded"], "false");
    }

    #[test]
    fn absent_values_are_skipped() {
        let theme = validate_partial(&schema(), &json!({ "colors": { "primary": "red" } })).unwrap();
        let vars = to_css_variables(&schema(), &theme, &CssOptions::default());
        assert!(vars.contains_key("--colors-primary"));
        assert!(!vars.contains_key("--colors-text-muted"));
    }

    #[test]
    fn injected_string_cannot_escape_its_declaration() {
        let schema = SchemaBuilder::new().entry("x", string()).build().unwrap();
        let theme = validate(
            &schema,
            &json!({ "x": "red; } body { background: url(evil); } .x {" }),
        )
        .unwrap();

        let vars = to_css_variables(&schema, &theme, &CssOptions::default());
        assert_eq!(vars["--x"], r"red\; \} body \{ background: url(evil)\; \} .x \{");

        let css = to_css_string(&schema, &theme, None, &CssOptions::default());
        // Only the block's own braces and the declaration terminator are live.
        let unescaped = |c: char| {
            css.char_indices()
                .filter(|&(i, ch)| ch == c && (i == 0 || css.as_bytes()[i - 1] != b'\\'))
                .count()
        };
        assert_eq!(unescaped('{'), 1);
        assert_eq!(unescaped('}'), 1);
        assert_eq!(unescaped(';'), 1);
    }

    #[test]
    fn single_block_format() {
        let css = to_css_string(&schema(), &light(), None, &CssOptions::default());
        assert_eq!(
            css,
            ":root {\n  --colors-primary: #3b82f6;\n  --colors-text-muted: #6b7280;\n  --spacing-md: 16px;\n}"
        );

        let prefixed = to_css_string(
            &schema(),
            &light(),
            Some(".brand"),
            &CssOptions::default().with_prefix("tw"),
        );
        assert!(prefixed.starts_with(".brand {\n  --tw-colors-primary: #3b82f6;"));
    }

    #[test]
    fn empty_theme_renders_empty_block() {
        let schema = SchemaBuilder::new().entry("x", string()).build().unwrap();
        let theme = validate_partial(&schema, &json!({})).unwrap();
        assert_eq!(to_css_string(&schema, &theme, None, &CssOptions::default()), ":root {\n}");
    }

    #[test]
    fn all_themes_with_default() {
        let themes = IndexMap::from([("light".to_string(), light()), ("dark".to_string(), dark())]);
        let css = to_css_string_all(
            &schema(),
            &themes,
            &AllThemesOptions::default().with_default_theme("light"),
        );

        let blocks: Vec<&str> = css.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with(":root, [data-theme=\"light\"] {\n"));
        assert!(blocks[1].starts_with("[data-theme=\"dark\"] {\n"));
        assert!(!blocks[1].contains(":root"));
        assert!(blocks[1].contains("  --spacing-md: 1rem;\n"));
    }

    #[test]
    fn all_themes_skip_empty_and_use_attribute() {
        let schema = SchemaBuilder::new().entry("accent", color()).build().unwrap();
        let empty = validate_partial(&schema, &json!({})).unwrap();
        let accent = validate(&schema, &json!({ "accent": "teal" })).unwrap();

        let themes = IndexMap::from([("blank".to_string(), empty), ("brand".to_string(), accent)]);
        let css = to_css_string_all(
            &schema,
            &themes,
            &AllThemesOptions::default().with_attribute("data-tenant"),
        );
        assert_eq!(css, "[data-tenant=\"brand\"] {\n  --accent: teal;\n}");
    }
}
