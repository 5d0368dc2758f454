//! Display lines for a quote.

use std::fmt;

use mizu_common::catalog;
use rust_decimal::RoundingStrategy;
use serde::Serialize;

use crate::amount::format_minor_units;
use crate::engine::Quote;
use crate::fee::fee_percent_label;

/// Footnote shown beneath every quote.
pub const ROUNDING_NOTE: &str = "All amounts rounded up to the smallest unit.";

/// One label/value row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub value: String,
}

impl SummaryLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The rows rendered under the send-money form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSummary {
    pub lines: Vec<SummaryLine>,
    pub note: &'static str,
}

impl QuoteSummary {
    /// Build the summary for a quote.
    pub fn from_quote(quote: &Quote) -> Self {
        let currency = &quote.currency;
        let mut rate = quote.rate.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero);
        rate.rescale(4);

        let recipient_gets = match catalog::lookup(currency) {
            Some(info) => format!(
                "{} {} {}",
                info.flag,
                format_minor_units(quote.payout_minor_units),
                currency
            ),
            None => format!("{} {}", format_minor_units(quote.payout_minor_units), currency),
        };

        Self {
            lines: vec![
                SummaryLine::new(
                    "You send",
                    format!("${} USD", format_minor_units(quote.amount_minor_units)),
                ),
                SummaryLine::new(
                    format!("Fee ({}) • payout in {}", fee_percent_label(quote.fee_bps), currency),
                    format!("-${} USD", format_minor_units(quote.fee_minor_units)),
                ),
                SummaryLine::new(
                    "After fees",
                    format!("${} USD", format_minor_units(quote.after_fee_minor_units)),
                ),
                SummaryLine::new("FX rate", format!("1 USD ≈ {} {}", rate, currency)),
                SummaryLine::new("Recipient gets", recipient_gets),
            ],
            note: ROUNDING_NOTE,
        }
    }

    /// Look up a row by label prefix.
    pub fn value(&self, label_prefix: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label.starts_with(label_prefix))
            .map(|line| line.value.as_str())
    }
}

impl fmt::Display for QuoteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.lines.iter().map(|l| l.label.chars().count()).max().unwrap_or(0);
        for line in &self.lines {
            let pad = width - line.label.chars().count();
            writeln!(f, "{}{}  {}", line.label, " ".repeat(pad), line.value)?;
        }
        write!(f, "{}", self.note)
    }
}
