//! Rate provider traits and implementations.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use crate::error::{FxError, FxResult};
use crate::table::RateTable;

/// Trait for FX rate sources.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Fetch the current USD-based rate table.
    async fn fetch_rates(&self) -> FxResult<RateTable>;
}

/// Provider that always returns the same table.
pub struct StaticRateProvider {
    name: String,
    rates: RateTable,
}

impl StaticRateProvider {
    /// Create a new static provider.
    pub fn new(name: impl Into<String>, rates: RateTable) -> Self {
        Self {
            name: name.into(),
            rates,
        }
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_rates(&self) -> FxResult<RateTable> {
        Ok(self.rates.clone())
    }
}

/// Provider that reads the rate feed format from a file.
pub struct FeedFileProvider {
    path: PathBuf,
}

impl FeedFileProvider {
    /// Create a provider for the given feed file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RateProvider for FeedFileProvider {
    fn name(&self) -> &str {
        "FEED_FILE"
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_rates(&self) -> FxResult<RateTable> {
        let body = tokio::fs::read_to_string(&self.path).await?;
        let table = RateTable::from_feed(&body).map_err(|e| {
            warn!(error = %e, "Rate feed could not be parsed");
            e
        })?;

        if table.is_empty() {
            return Err(FxError::NoRatesAvailable(self.name().to_string()));
        }

        debug!(currencies = table.len(), "Loaded rate feed");
        Ok(table)
    }
}

/// Mock provider whose table can be swapped between fetches.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockRateProvider {
    name: String,
    rates: dashmap::DashMap<mizu_common::Currency, rust_decimal::Decimal>,
    fail: std::sync::atomic::AtomicBool,
    fetches: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockRateProvider {
    /// Create a new mock provider.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rates: dashmap::DashMap::new(),
            fail: std::sync::atomic::AtomicBool::new(false),
            fetches: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Set a rate for a currency.
    pub fn set_rate(&self, currency: mizu_common::Currency, rate: rust_decimal::Decimal) {
        self.rates.insert(currency, rate);
    }

    /// Make subsequent fetches fail.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, std::sync::atomic::Ordering::SeqCst);
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl RateProvider for MockRateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_rates(&self) -> FxResult<RateTable> {
        self.fetches.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if self.fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(FxError::ProviderError(format!("{} unavailable", self.name)));
        }
        Ok(self
            .rates
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mizu_common::Currency;
    use rust_decimal_macros::dec;

    fn temp_feed(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mizu-fx-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_static_provider() {
        let rates: RateTable = [(Currency::gbp(), dec!(0.78))].into_iter().collect();
        let provider = StaticRateProvider::new("static", rates.clone());

        assert_eq!(provider.name(), "static");
        assert_eq!(tokio_test::block_on(provider.fetch_rates()).unwrap(), rates);
    }

    #[tokio::test]
    async fn test_feed_file_provider() {
        let path = temp_feed("ok", r#"[{"USD": 1}, {"GBP": 0.74}]"#);
        let provider = FeedFileProvider::new(&path);

        let table = provider.fetch_rates().await.unwrap();
        assert_eq!(table.get(&Currency::gbp()), Some(dec!(0.74)));

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_feed_file_provider_empty_feed() {
        let path = temp_feed("empty", "[]");
        let provider = FeedFileProvider::new(&path);

        assert!(matches!(
            provider.fetch_rates().await,
            Err(FxError::NoRatesAvailable(_))
        ));

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn test_feed_file_provider_missing_file() {
        let provider = FeedFileProvider::new("/nonexistent/mizu/rates.json");
        assert!(matches!(provider.fetch_rates().await, Err(FxError::Io(_))));
    }

    #[tokio::test]
    async fn test_mock_provider_failure() {
        let provider = MockRateProvider::new("mock");
        provider.set_rate(Currency::gbp(), dec!(0.78));
        assert_eq!(provider.fetch_rates().await.unwrap().len(), 1);

        provider.set_failing(true);
        assert!(matches!(
            provider.fetch_rates().await,
            Err(FxError::ProviderError(_))
        ));
        assert_eq!(provider.fetch_count(), 2);
    }
}
