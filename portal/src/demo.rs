//! Demo account data shown on the portal until real feeds are wired up.

use rust_decimal::Decimal;

use crate::activity::{Activity, ActivityKind};
use crate::recipients::QuickRecipient;

/// Demo available balance, 1842.75 USD.
pub fn balance_usd() -> Decimal {
    Decimal::new(184_275, 2)
}

pub fn quick_recipients() -> Vec<QuickRecipient> {
    vec![
        QuickRecipient::new("1", "Tariro M.", "tariro@example.com"),
        QuickRecipient::new("2", "Kuda P.", "+263 77 123 4567"),
        QuickRecipient::new("3", "Nyasha C.", "nyasha@example.com"),
    ]
}

pub fn recent_activity() -> Vec<Activity> {
    let entry = |id, kind, title: &str, meta: &str, amount: &str| Activity {
        id,
        kind,
        title: title.to_string(),
        meta: meta.to_string(),
        amount: amount.to_string(),
    };

    vec![
        entry(1, ActivityKind::Send, "Sent to Tariro", "USD • Aug 12", "- $45.00"),
        entry(2, ActivityKind::Deposit, "Top-up from Bank", "USD • Aug 10", "+ $100.00"),
        entry(3, ActivityKind::Send, "Sent to Kuda", "USD • Aug 05", "- $12.50"),
    ]
}
