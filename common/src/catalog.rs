//! Recipient currencies offered by the send-money form.

use serde::Serialize;

use crate::monetary::Currency;

/// Display metadata for a payout currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    /// ISO 4217 code.
    pub code: &'static str,
    /// Full currency name.
    pub name: &'static str,
    /// Flag of the currency's primary country.
    pub flag: &'static str,
}

impl CurrencyInfo {
    /// The currency code as a [`Currency`].
    pub fn currency(&self) -> Currency {
        Currency::new(self.code)
    }
}

const SUPPORTED: [CurrencyInfo; 2] = [
    CurrencyInfo {
        code: "ZAR",
        name: "South African Rand",
        flag: "\u{1F1FF}\u{1F1E6}",
    },
    CurrencyInfo {
        code: "GBP",
        name: "British Pound",
        flag: "\u{1F1EC}\u{1F1E7}",
    },
];

/// Currency shown when the current selection is not in the catalog.
pub const DEFAULT_PAYOUT_CURRENCY: &str = "GBP";

/// All payout currencies, in selector order.
pub fn supported_currencies() -> &'static [CurrencyInfo] {
    &SUPPORTED
}

/// Look up catalog metadata for a currency.
pub fn lookup(currency: &Currency) -> Option<&'static CurrencyInfo> {
    SUPPORTED.iter().find(|info| info.code == currency.code())
}

/// The catalog entry for the selection, falling back to the default payout currency.
pub fn selected_or_default(currency: &Currency) -> &'static CurrencyInfo {
    lookup(currency).unwrap_or(&SUPPORTED[1])
}
