//! Cached, validated theme resolution.
//!
//! A [`Resolver`] turns an opaque theme id into a validated [`Theme`] by
//! calling a caller-supplied [`ThemeFetcher`], merging the result over the
//! schema's defaults and coercing it. Results are kept in an LRU cache with
//! a TTL; expired entries can keep serving while a background task refreshes
//! them (stale-while-revalidate).

pub mod fetcher;
pub mod options;
pub mod resolver;

pub use fetcher::{MapFetcher, ThemeFetcher};
pub use options::CacheOptions;
pub use resolver::Resolver;

pub use themeweave_common::{FetchError, ResolveError};
pub use themeweave_schema::Theme;
