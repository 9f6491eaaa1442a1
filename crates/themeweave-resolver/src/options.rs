//! Cache tuning.

use std::time::Duration;

pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
pub const DEFAULT_MAX_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheOptions {
    /// How long an entry is served without refetching.
    pub ttl: Duration,
    /// Maximum number of cached themes. Zero is treated as one.
    pub max_size: usize,
    /// Serve expired entries while refreshing them in the background.
    pub stale_while_revalidate: bool,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_size: DEFAULT_MAX_SIZE,
            stale_while_revalidate: true,
        }
    }
}

impl CacheOptions {
    pub fn with_ttl(self, ttl: Duration) -> Self {
        Self { ttl, ..self }
    }

    pub fn with_max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn with_stale_while_revalidate(self, enabled: bool) -> Self {
        Self {
            stale_while_revalidate: enabled,
            ..self
        }
    }
}
