//! Portal configuration.

use std::time::Duration;

use mizu_common::{constants, DurationExt};
use mizu_quote::QuoteConfig;
use rust_decimal::Decimal;

use crate::demo;

/// Main portal configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Quote bounds and pricing tables.
    pub quote: QuoteConfig,
    /// Balance the send form checks against.
    pub available_usd: Decimal,
    /// Round-trip of the simulated transfer backend.
    pub transfer_delay: Duration,
    /// Emit logs as JSON.
    pub log_json: bool,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            quote: QuoteConfig::default(),
            available_usd: demo::balance_usd(),
            transfer_delay: constants::simulated_transfer_delay().as_std(),
            log_json: false,
            log_level: "info".to_string(),
        }
    }
}

impl PortalConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self {
            quote: QuoteConfig::from_env(),
            ..Self::default()
        };

        if let Ok(ms) = std::env::var("PORTAL_TRANSFER_DELAY_MS") {
            if let Ok(ms) = ms.parse() {
                config.transfer_delay = Duration::from_millis(ms);
            }
        }

        if let Ok(json) = std::env::var("PORTAL_LOG_JSON") {
            config.log_json = matches!(json.as_str(), "1" | "true" | "yes");
        }

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.quote.validate().map_err(|e| e.to_string())?;

        if self.available_usd < Decimal::ZERO {
            return Err("Available balance cannot be negative".to_string());
        }

        Ok(())
    }
}
