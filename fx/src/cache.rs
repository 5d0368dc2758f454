//! FX rate caching with TTL support.

use chrono::Duration;
use dashmap::DashMap;
use mizu_common::{constants, expires_in, is_expired, Currency, Timestamp};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::error::FxResult;
use crate::provider::RateProvider;
use crate::table::RateTable;

/// Cached rate entry.
#[derive(Debug, Clone)]
struct CacheEntry {
    rate: Decimal,
    expires_at: Timestamp,
}

impl CacheEntry {
    fn new(rate: Decimal, ttl: Duration) -> Self {
        Self {
            rate,
            expires_at: expires_in(ttl),
        }
    }

    fn is_valid(&self) -> bool {
        !is_expired(self.expires_at)
    }
}

/// Configuration for the snapshot cache.
#[derive(Debug, Clone)]
pub struct RateCacheConfig {
    /// How long a fetched rate stays usable.
    pub default_ttl: Duration,
}

impl Default for RateCacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: constants::rate_snapshot_ttl(),
        }
    }
}

/// Thread-safe cache of the latest fetched rates.
///
/// The quote engine never talks to a provider; callers take a
/// [`snapshot`](RateSnapshotCache::snapshot) and build an engine from it.
pub struct RateSnapshotCache {
    cache: DashMap<Currency, CacheEntry>,
    config: RateCacheConfig,
}

impl RateSnapshotCache {
    /// Create a new cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(RateCacheConfig::default())
    }

    /// Create a new cache with custom configuration.
    pub fn with_config(config: RateCacheConfig) -> Self {
        Self {
            cache: DashMap::new(),
            config,
        }
    }

    /// Get a single rate if it is still fresh.
    pub fn get(&self, currency: &Currency) -> Option<Decimal> {
        if let Some(entry) = self.cache.get(currency) {
            if entry.is_valid() {
                debug!(currency = %currency, "Cache hit");
                return Some(entry.rate);
            }
            debug!(currency = %currency, "Cache entry expired");
            drop(entry);
            self.cache.remove(currency);
        }

        debug!(currency = %currency, "Cache miss");
        None
    }

    /// Store every rate of a table with the default TTL.
    pub fn store(&self, table: &RateTable) {
        self.store_with_ttl(table, self.config.default_ttl);
    }

    /// Store every rate of a table with a custom TTL.
    pub fn store_with_ttl(&self, table: &RateTable, ttl: Duration) {
        for (currency, rate) in table.iter() {
            self.cache.insert(currency.clone(), CacheEntry::new(*rate, ttl));
        }
    }

    /// The full cached table, only if it is non-empty and every entry is fresh.
    pub fn snapshot(&self) -> Option<RateTable> {
        if self.cache.is_empty() {
            return None;
        }

        let mut table = RateTable::new();
        for entry in self.cache.iter() {
            if !entry.is_valid() {
                debug!(currency = %entry.key(), "Snapshot stale");
                return None;
            }
            table.insert(entry.key().clone(), entry.rate);
        }
        Some(table)
    }

    /// Fetch from the provider, validate, and replace the cached rates.
    #[instrument(skip(self, provider), fields(provider = provider.name()))]
    pub async fn refresh(&self, provider: &dyn RateProvider) -> FxResult<RateTable> {
        let table = provider.fetch_rates().await?;
        table.validate()?;

        self.cache.clear();
        self.store(&table);

        info!(currencies = table.len(), "Refreshed rate snapshot");
        Ok(table)
    }

    /// Return the cached snapshot, refreshing from the provider when stale.
    pub async fn rates_or_refresh(&self, provider: &dyn RateProvider) -> FxResult<RateTable> {
        match self.snapshot() {
            Some(table) => Ok(table),
            None => self.refresh(provider).await,
        }
    }

    /// Clear all cached rates.
    pub fn clear(&self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Evict expired entries.
    pub fn evict_expired(&self) {
        self.cache.retain(|_, entry| entry.is_valid());
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        let total = self.cache.len();
        let valid = self.cache.iter().filter(|e| e.is_valid()).count();

        CacheStats {
            total_entries: total,
            valid_entries: valid,
            expired_entries: total - valid,
        }
    }
}

impl Default for RateSnapshotCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
}
