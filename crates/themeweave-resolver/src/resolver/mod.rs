//! The fetch-validate-cache pipeline.

mod cache;


use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::future::join_all;
use serde_json::Value;
use themeweave_common::ResolveError;
use themeweave_schema::{coerce, deep_merge, Schema, Theme};
use tracing::{debug, info, warn};

use crate::fetcher::ThemeFetcher;
use crate::options::CacheOptions;
use cache::{Lookup, ThemeCache};

/// Resolves theme ids to validated themes through an LRU cache.
///
/// Cloning is cheap; clones share the same cache and fetcher.
#[derive(Clone)]
pub struct Resolver {
    inner: Arc<Inner>,
}

struct Inner {
    schema: Schema,
    defaults: Value,
    fetcher: Arc<dyn ThemeFetcher>,
    options: CacheOptions,
    cache: Mutex<ThemeCache>,
}

impl Resolver {
    pub fn new(schema: Schema, fetcher: impl ThemeFetcher + 'static) -> Self {
        Self::with_options(schema, fetcher, CacheOptions::default())
    }

    pub fn with_options(
        schema: Schema,
        fetcher: impl ThemeFetcher + 'static,
        options: CacheOptions,
    ) -> Self {
        Self::from_shared(schema, Arc::new(fetcher), options)
    }

    /// Build a resolver around a fetcher that is shared elsewhere.
    pub fn from_shared(
        schema: Schema,
        fetcher: Arc<dyn ThemeFetcher>,
        options: CacheOptions,
    ) -> Self {
        let defaults = schema.defaults();
        Self {
            inner: Arc::new(Inner {
                schema,
                defaults,
                fetcher,
                cache: Mutex::new(ThemeCache::new(options.max_size)),
                options,
            }),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.inner.schema
    }

    pub fn options(&self) -> &CacheOptions {
        &self.inner.options
    }

    /// Resolve `theme_id` to a validated theme.
    ///
    /// Fresh entries are returned without fetching. Expired entries are
    /// returned as-is while one background refresh runs, unless
    /// stale-while-revalidate is off, in which case they are refetched
    /// before returning. Fetch and validation failures on this path are
    /// returned and leave the cache untouched.
    pub async fn resolve(&self, theme_id: &str) -> Result<Arc<Theme>, ResolveError> {
        let lookup = self.inner.cache().lookup(
            theme_id,
            self.inner.options.ttl,
            self.inner.options.stale_while_revalidate,
        );

        match lookup {
            Lookup::Fresh(data) => {
                debug!(theme_id, "theme cache hit");
                Ok(data)
            }
            Lookup::Stale { data, revalidate } => {
                debug!(theme_id, revalidate, "serving stale theme");
                if revalidate {
                    self.spawn_revalidation(theme_id.to_string());
                }
                Ok(data)
            }
            Lookup::Miss => {
                debug!(theme_id, "theme cache miss");
                let data = Arc::new(self.inner.load(theme_id).await?);
                self.inner.cache().insert(theme_id, Arc::clone(&data));
                Ok(data)
            }
        }
    }

    /// Resolve `theme_id` and look up a dot path in it.
    ///
    /// Returns `Ok(None)` when the theme resolves but the path does not exist.
    pub async fn get(&self, theme_id: &str, path: &str) -> Result<Option<Value>, ResolveError> {
        let theme = self.resolve(theme_id).await?;
        Ok(theme.get(path).cloned())
    }

    /// Resolve several ids concurrently, returning each id with its result.
    pub async fn prefetch<I, S>(&self, theme_ids: I) -> Vec<(String, Result<Arc<Theme>, ResolveError>)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = theme_ids.into_iter().map(Into::into).collect();
        let results = join_all(ids.iter().map(|id| self.resolve(id))).await;
        ids.into_iter().zip(results).collect()
    }

    /// Drop one cached theme. Returns whether it was cached.
    pub fn invalidate(&self, theme_id: &str) -> bool {
        let removed = self.inner.cache().remove(theme_id);
        if removed {
            debug!(theme_id, "theme invalidated");
        }
        removed
    }

    pub fn clear_cache(&self) {
        self.inner.cache().clear();
        debug!("theme cache cleared");
    }

    /// Whether `theme_id` is cached, fresh or stale. Does not affect recency.
    pub fn is_cached(&self, theme_id: &str) -> bool {
        self.inner.cache().contains(theme_id)
    }

    pub fn len(&self) -> usize {
        self.inner.cache().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached ids, most recently used first.
    pub fn cached_ids(&self) -> Vec<String> {
        self.inner.cache().ids()
    }

    fn spawn_revalidation(&self, theme_id: String) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            match inner.load(&theme_id).await {
                Ok(theme) => {
                    inner.cache().insert(&theme_id, Arc::new(theme));
                    debug!(theme_id = %theme_id, "theme revalidated");
                }
                Err(e) => {
                    inner.cache().finish_revalidation(&theme_id);
                    warn!(theme_id = %theme_id, error = %e, "background revalidation failed, keeping stale theme");
                }
            }
        });
    }
}

impl Inner {
    fn cache(&self) -> MutexGuard<'_, ThemeCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn load(&self, theme_id: &str) -> Result<Theme, ResolveError> {
        info!(theme_id, "fetching theme");
        let fetched = self
            .fetcher
            .fetch(theme_id)
            .await
            .map_err(|source| ResolveError::Fetch {
                theme_id: theme_id.to_string(),
                source,
            })?;

        let merged = deep_merge(&self.defaults, &fetched);
        coerce(&self.schema, &merged).map_err(|errors| ResolveError::Validation {
            theme_id: theme_id.to_string(),
            errors,
        })
    }
}
