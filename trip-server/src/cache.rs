//! Caching layer for rail search responses.
//!
//! The provider's schedule data changes slowly relative to request
//! traffic, so identical (from, to, window) searches within the TTL are
//! served from memory. Only successful searches are cached; failures
//! always retry the provider. The workflow engine stays cache-unaware -
//! this wrapper is composed in at startup.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::StationCode;
use crate::rail::{RailError, RailSearch, SearchOutcome};

/// Cache key: (origin, destination, window hours).
type SearchKey = (StationCode, StationCode, u32);

/// Configuration for the search cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(120),
            max_capacity: 500,
        }
    }
}

/// Rail search client with response caching.
pub struct CachedRailClient {
    inner: Arc<dyn RailSearch>,
    cache: MokaCache<SearchKey, Arc<SearchOutcome>>,
}

impl CachedRailClient {
    /// Wrap a rail search client with a cache.
    pub fn new(inner: Arc<dyn RailSearch>, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Number of cached search results (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

#[async_trait::async_trait]
impl RailSearch for CachedRailClient {
    async fn search(
        &self,
        from: &StationCode,
        to: &StationCode,
        window_hours: u32,
    ) -> Result<SearchOutcome, RailError> {
        let key = (from.clone(), to.clone(), window_hours);

        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(%from, %to, "search cache hit");
            return Ok((*cached).clone());
        }

        let outcome = self.inner.search(from, to, window_hours).await?;
        self.cache.insert(key, Arc::new(outcome.clone())).await;

        Ok(outcome)
    }
}
