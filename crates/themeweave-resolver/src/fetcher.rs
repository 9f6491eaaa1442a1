//! The boundary with whatever supplies raw theme data.
//!
//! The resolver never performs I/O itself. It calls a [`ThemeFetcher`],
//! which may read from HTTP, a database, files or memory, and only cares
//! that the returned value is shaped like (part of) a theme.

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use serde_json::Value;
use themeweave_common::FetchError;

#[async_trait]
pub trait ThemeFetcher: Send + Sync {
    /// Fetch the raw, unvalidated data for `theme_id`.
    ///
    /// May be called more than once for the same id, including concurrently.
    async fn fetch(&self, theme_id: &str) -> Result<Value, FetchError>;
}

#[async_trait]
impl<F, Fut> ThemeFetcher for F
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, FetchError>> + Send + 'static,
{
    async fn fetch(&self, theme_id: &str) -> Result<Value, FetchError> {
        (self)(theme_id.to_string()).await
    }
}

/// Serves themes from an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MapFetcher {
    themes: HashMap<String, Value>,
}

impl MapFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme_id: impl Into<String>, data: Value) -> Self {
        self.themes.insert(theme_id.into(), data);
        self
    }
}

impl FromIterator<(String, Value)> for MapFetcher {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            themes: iter.into_iter().collect(),
        }
    }
}

#[async_trait]
impl ThemeFetcher for MapFetcher {
    async fn fetch(&self, theme_id: &str) -> Result<Value, FetchError> {
        self.themes
            .get(theme_id)
            .cloned()
            .ok_or_else(|| format!("theme '{theme_id}' not found").into())
    }
}
