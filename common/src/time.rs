//! Time utilities and constants.

use chrono::{DateTime, Duration, Utc};

/// Timing defaults.
pub mod constants {
    use super::Duration;

    /// How long a fetched FX rate stays usable (60 seconds).
    pub fn rate_snapshot_ttl() -> Duration {
        Duration::seconds(60)
    }

    /// Simulated transfer round-trip (1200 milliseconds).
    pub fn simulated_transfer_delay() -> Duration {
        Duration::milliseconds(1200)
    }
}

/// A UTC timestamp.
pub type Timestamp = DateTime<Utc>;

/// Get the current timestamp.
pub fn now() -> Timestamp {
    Utc::now()
}

/// Check if a timestamp has been reached.
pub fn is_expired(expiry: Timestamp) -> bool {
    now() >= expiry
}

/// Calculate expiry time from now.
pub fn expires_in(duration: Duration) -> Timestamp {
    now() + duration
}

/// Duration extensions for convenient conversion.
pub trait DurationExt {
    fn as_std(&self) -> std::time::Duration;
}

impl DurationExt for Duration {
    fn as_std(&self) -> std::time::Duration {
        self.to_std().unwrap_or(std::time::Duration::ZERO)
    }
}
