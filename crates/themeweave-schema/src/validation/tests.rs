//! Tests for the validation walk in all three modes.

use super::*;
use crate::schema::{Definition, SchemaBuilder};
use crate::token::{boolean, color, dimension, font_family, font_weight, number, string, url};
use serde_json::json;
use themeweave_common::TokenKind;

fn brand_schema() -> Schema {
    SchemaBuilder::new()
        .entry(
            "colors",
            Definition::group([
                ("primary", color().with_default("#000").into()),
                ("secondary", color().into()),
            ]),
        )
        .build()
        .unwrap()
}

fn full_schema() -> Schema {
    SchemaBuilder::new()
        .entry(
            "colors",
            Definition::group([
                ("background", color().into()),
                ("text", color().with_default("#111827").into()),
            ]),
        )
        .entry(
            "typography",
            Definition::group([
                ("family", font_family().into()),
                ("weight", font_weight().with_default(400).into()),
                ("scale", number().into()),
            ]),
        )
        .entry("spacing", Definition::group([("gap", dimension().into())]))
        .entry("logo", url())
        .entry("rounded", boolean().with_default(true))
        .entry("tagline", string())
        .build()
        .unwrap()
}

fn full_input() -> Value {
    json!({
        "colors": { "background": "#ffffff", "text": "rgb(17, 24, 39)" },
        "typography": { "family": "Inter, sans-serif", "weight": 500, "scale": 1.25 },
        "spacing": { "gap": "0.5rem" },
        "logo": "https://cdn.example.com/logo.svg",
        "rounded": false,
        "tagline": "Hello"
    })
}

#[test]
fn valid_input_round_trips_unchanged() {
    let theme = validate(&full_schema(), &full_input()).unwrap();
    assert_eq!(theme.as_value(), &full_input());
}

#[test]
fn defaults_fill_missing_fields() {
    let input = json!({
        "colors": { "background": "white" },
        "typography": { "family": "Georgia", "scale": 1 },
        "spacing": { "gap": "0" },
        "logo": "/logo.svg",
        "tagline": ""
    });
    let theme = validate(&full_schema(), &input).unwrap();
    assert_eq!(theme.get("colors.text"), Some(&json!("#111827")));
    assert_eq!(theme.get("typography.weight"), Some(&json!(400)));
    assert_eq!(theme.get("rounded"), Some(&json!(true)));
}

#[test]
fn strict_collects_every_error() {
    let input = json!({
        "colors": { "background": "not-a-color" },
        "typography": { "family": "  ", "weight": 5000, "scale": "1.2" },
        "spacing": "16px",
        "logo": "javascript:alert(1)"
    });
    let errors = validate(&full_schema(), &input).unwrap_err();

    let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "colors.background",
            "typography.family",
            "typography.weight",
            "typography.scale",
            "spacing",
            "logo",
            "tagline",
        ]
    );

    let spacing = errors.at("spacing").unwrap();
    assert_eq!(spacing.expected, Expected::Object);
    assert_eq!(spacing.message, "expected object for nested group");
    assert_eq!(spacing.received, Some(json!("16px")));

    let tagline = errors.at("tagline").unwrap();
    assert_eq!(tagline.message, "required value missing");
    assert_eq!(tagline.expected, Expected::Kind(TokenKind::String));
    assert!(tagline.received.is_none());
}

#[test]
fn absent_group_reports_leaves_individually() {
    let errors = validate(&brand_schema(), &json!({})).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.0[0].path, "colors.secondary");
}

#[test]
fn null_is_treated_as_missing() {
    let theme = validate(
        &brand_schema(),
        &json!({ "colors": { "primary": null, "secondary": "red" } }),
    )
    .unwrap();
    assert_eq!(theme.get("colors.primary"), Some(&json!("#000")));
}

#[test]
fn unknown_fields_are_dropped() {
    let theme = validate(
        &brand_schema(),
        &json!({ "colors": { "secondary": "red", "extra": 1 }, "other": true }),
    )
    .unwrap();
    assert_eq!(
        theme.as_value(),
        &json!({ "colors": { "primary": "#000", "secondary": "red" } })
    );
}

#[test]
fn non_object_root_is_an_error() {
    let errors = validate(&brand_schema(), &json!("theme")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.0[0].path, "");
    assert_eq!(errors.0[0].expected, Expected::Object);
}

#[test]
fn partial_skips_missing_but_checks_present() {
    let schema = full_schema();
    let theme = validate_partial(&schema, &json!({ "spacing": { "gap": "8px" } })).unwrap();
    assert_eq!(theme.get("spacing.gap"), Some(&json!("8px")));
    assert_eq!(theme.get("colors.text"), Some(&json!("#111827")));
    assert!(theme.get("colors.background").is_none());
    assert!(theme.get("tagline").is_none());

    let errors = validate_partial(&schema, &json!({ "spacing": { "gap": 8 } })).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.0[0].path, "spacing.gap");
}

#[test]
fn partial_omits_absent_groups_without_defaults() {
    let theme = validate_partial(&full_schema(), &json!({})).unwrap();
    assert!(theme.get("spacing").is_none());
    assert!(theme.get("colors").is_some());
}

#[test]
fn coerce_converts_loose_values() {
    let input = json!({
        "colors": { "background": "#fff" },
        "typography": { "family": "Inter", "weight": "600", "scale": "1.5" },
        "spacing": { "gap": 12 },
        "logo": "/logo.png",
        "rounded": "false",
        "tagline": 42
    });
    let theme = coerce(&full_schema(), &input).unwrap();
    assert_eq!(theme.get("typography.weight"), Some(&json!(600)));
    assert_eq!(theme.get("typography.scale"), Some(&json!(1.5)));
    assert_eq!(theme.get("spacing.gap"), Some(&json!("12px")));
    assert_eq!(theme.get("rounded"), Some(&json!(false)));
    assert_eq!(theme.get("tagline"), Some(&json!("42")));
}

#[test]
fn coerce_reports_missing_required_tokens() {
    let errors = coerce(&brand_schema(), &json!({ "colors": { "primary": "#3b82f6" } }))
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    let missing = &errors.0[0];
    assert_eq!(missing.path, "colors.secondary");
    assert_eq!(missing.message, "required value missing");
    assert!(errors.at("colors.primary").is_none());
}

#[test]
fn coerce_still_rejects_unconvertible_values() {
    let errors = coerce(
        &brand_schema(),
        &json!({ "colors": { "primary": 255, "secondary": "red" } }),
    )
    .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.0[0].path, "colors.primary");
    assert_eq!(errors.0[0].received, Some(json!(255)));
}

#[test]
fn mode_parses_from_lowercase_names() {
    let mode: ValidationMode = serde_json::from_str("\"partial\"").unwrap();
    assert_eq!(mode, ValidationMode::Partial);
    assert_eq!(ValidationMode::default(), ValidationMode::Strict);
}
