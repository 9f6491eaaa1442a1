//! CSS custom-property output for validated themes.
//!
//! Variable names are derived from token paths (each segment kebab-cased,
//! joined with a separator) and every emitted value is escaped, so a theme
//! value can never break out of its declaration.

mod escape;
mod generate;
mod naming;
mod options;

pub use escape::escape_css_value;
pub use generate::{to_css_string, to_css_string_all, to_css_variables, CssVariables};
pub use naming::{css_var, css_var_with_fallback, kebab_case, var_name, CssVars};
pub use options::{AllThemesOptions, CssOptions, DEFAULT_ATTRIBUTE, DEFAULT_SELECTOR};
