//! LRU storage for resolved themes and the per-entry freshness state.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use lru::LruCache;
use themeweave_schema::Theme;
use tokio::time::Instant;
use tracing::debug;

struct CacheEntry {
    data: Arc<Theme>,
    timestamp: Instant,
    is_revalidating: bool,
}

/// Outcome of looking up a theme id.
pub(super) enum Lookup {
    Fresh(Arc<Theme>),
    /// Expired but servable. `revalidate` is true for exactly the caller
    /// that should start the background refresh.
    Stale {
        data: Arc<Theme>,
        revalidate: bool,
    },
    /// Absent, or expired with stale serving disabled.
    Miss,
}

pub(super) struct ThemeCache {
    entries: LruCache<String, CacheEntry>,
}

impl ThemeCache {
    pub(super) fn new(max_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Find `theme_id`, promoting it to most recently used.
    pub(super) fn lookup(&mut self, theme_id: &str, ttl: Duration, serve_stale: bool) -> Lookup {
        let Some(entry) = self.entries.get_mut(theme_id) else {
            return Lookup::Miss;
        };

        if entry.timestamp.elapsed() <= ttl {
            return Lookup::Fresh(Arc::clone(&entry.data));
        }
        if !serve_stale {
            return Lookup::Miss;
        }

        let revalidate = !entry.is_revalidating;
        entry.is_revalidating = true;
        Lookup::Stale {
            data: Arc::clone(&entry.data),
            revalidate,
        }
    }

    /// Store a freshly validated theme, evicting the least recently used
    /// entry if the cache is full.
    pub(super) fn insert(&mut self, theme_id: &str, data: Arc<Theme>) {
        let entry = CacheEntry {
            data,
            timestamp: Instant::now(),
            is_revalidating: false,
        };
        if let Some((evicted, _)) = self.entries.push(theme_id.to_string(), entry) {
            if evicted != theme_id {
                debug!(theme_id = %evicted, "evicted least recently used theme");
            }
        }
    }

    /// Clear the revalidation flag after a failed refresh, leaving the stale
    /// data and its recency untouched.
    pub(super) fn finish_revalidation(&mut self, theme_id: &str) {
        if let Some(entry) = self.entries.peek_mut(theme_id) {
            entry.is_revalidating = false;
        }
    }

    pub(super) fn remove(&mut self, theme_id: &str) -> bool {
        self.entries.pop(theme_id).is_some()
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(super) fn contains(&self, theme_id: &str) -> bool {
        self.entries.contains(theme_id)
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Cached ids from most to least recently used.
    pub(super) fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|(id, _)| id.clone()).collect()
    }
}
