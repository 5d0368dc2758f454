//! MizuCash FX
//!
//! Rate tables, fee schedules and the rate feed plumbing that feeds the
//! quote engine.
//!
//! # Features
//!
//! - Currency-keyed rate tables and fee schedules with validation
//! - Parsing of the array-of-objects rate feed format
//! - Async rate providers
//! - Snapshot caching with configurable TTL
//!
//! # Example
//!
//! ```rust,ignore
//! use mizu_fx::{FeedFileProvider, RateSnapshotCache};
//!
//! let provider = FeedFileProvider::new("rates.json");
//! let cache = RateSnapshotCache::new();
//!
//! let rates = cache.rates_or_refresh(&provider).await?;
//! ```

pub mod table;
pub mod provider;
pub mod cache;
pub mod error;

pub use table::{FeeSchedule, RateTable, MAX_FEE_BPS};
pub use provider::{FeedFileProvider, RateProvider, StaticRateProvider};
pub use cache::{RateCacheConfig, RateSnapshotCache};
pub use error::{FxError, FxResult};
