//! MizuCash Quote Engine
//!
//! Turns a user-typed USD amount and a payout currency into a fee, a
//! post-fee amount and a recipient payout, all in integer minor units and
//! always rounded up.
//!
//! The engine is pure and synchronous: callers re-run it on every input
//! change and render whatever comes back.
//!
//! # Example
//!
//! ```rust,ignore
//! use mizu_common::Currency;
//! use mizu_quote::{QuoteConfig, QuoteEngine};
//!
//! let engine = QuoteEngine::new(QuoteConfig::default())?;
//! let result = engine.quote("100.00", &Currency::gbp());
//!
//! assert_eq!(result.quote().unwrap().payout_minor_units, 7020);
//! ```

pub mod amount;
pub mod fee;
pub mod conversion;
pub mod engine;
pub mod config;
pub mod summary;
pub mod error;

pub use amount::{format_minor_units, parse_amount_to_minor_units};
pub use fee::{compute_fee_minor_units, fee_percent_label};
pub use conversion::convert_minor_units;
pub use engine::{build_quote, Quote, QuoteEngine, QuoteResult};
pub use config::QuoteConfig;
pub use summary::{QuoteSummary, SummaryLine};
pub use error::{AmountError, ConfigError};
