pub mod errors;
pub mod kind;

pub use errors::{
    Expected, FetchError, ResolveError, SchemaError, ThemeweaveError, ValidationError,
    ValidationErrors,
};
pub use kind::TokenKind;

pub type Result<T> = std::result::Result<T, ThemeweaveError>;
