//! Design-token schemas and theme validation.
//!
//! Declare a schema of typed tokens, then validate untrusted theme data
//! against it. Validation reports every problem at once and fills in
//! declared defaults.
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use themeweave_schema::{coerce, color, Definition, SchemaBuilder};
//!
//! let schema = SchemaBuilder::new()
//!     .entry(
//!         "colors",
//!         Definition::group([
//!             ("primary", color().with_default("#000").into()),
//!             ("secondary", color().into()),
//!         ]),
//!     )
//!     .build()
//!     .expect("valid schema");
//!
//! let theme = coerce(&schema, &json!({ "colors": { "secondary": "tomato" } })).unwrap();
//! assert_eq!(theme.get("colors.primary"), Some(&json!("#000")));
//! ```

pub mod merge;
pub mod schema;
pub mod theme;
pub mod token;
pub mod validation;
pub mod values;

pub use merge::deep_merge;
pub use schema::{Definition, Group, Schema, SchemaBuilder, SchemaNode, PATH_SEPARATOR};
pub use theme::Theme;
pub use token::{
    boolean, color, dimension, font_family, font_weight, number, shadow, string, url, Token,
};
pub use validation::{
    coerce, validate, validate_partial, validate_with_mode, ValidationMode, ValidationResult,
};

pub use themeweave_common::{Expected, SchemaError, TokenKind, ValidationError, ValidationErrors};
