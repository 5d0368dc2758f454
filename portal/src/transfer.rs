//! Send requests, their validation, and the transfer service seam.

use std::time::Duration;

use async_trait::async_trait;
use mizu_common::{constants, now, Currency, DurationExt, MinorUnits, Timestamp, TransferId};
use mizu_quote::{parse_amount_to_minor_units, Quote};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};

/// What the user submitted from the send-money form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    /// Email address or phone number.
    pub recipient: String,
    /// Raw USD amount as typed.
    pub amount: String,
    /// Payout currency.
    pub currency: Currency,
    #[serde(default)]
    pub note: Option<String>,
}

impl SendRequest {
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>, currency: Currency) -> Self {
        Self {
            recipient: recipient.into(),
            amount: amount.into(),
            currency,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        self.note = if note.trim().is_empty() { None } else { Some(note) };
        self
    }
}

/// Why a send request was refused before quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendRejection {
    #[error("Recipient is required.")]
    MissingRecipient,

    #[error("Please enter a valid amount.")]
    InvalidAmount,

    #[error("Amount exceeds available USD balance.")]
    InsufficientBalance,
}

/// Check a request against the sender's available USD balance.
///
/// Rules are applied in order and the first failure is returned.
pub fn validate(request: &SendRequest, available_usd: Decimal) -> Result<(), SendRejection> {
    if request.recipient.trim().is_empty() {
        return Err(SendRejection::MissingRecipient);
    }

    let amount = parse_amount_to_minor_units(&request.amount);
    if amount == 0 {
        return Err(SendRejection::InvalidAmount);
    }

    if amount > balance_minor_units(available_usd) {
        return Err(SendRejection::InsufficientBalance);
    }

    Ok(())
}

fn balance_minor_units(balance: Decimal) -> MinorUnits {
    if balance <= Decimal::ZERO {
        return 0;
    }
    (balance * Decimal::ONE_HUNDRED)
        .floor()
        .to_u64()
        .unwrap_or(MinorUnits::MAX)
}

/// Errors from the send flow.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Request failed form validation.
    #[error(transparent)]
    Rejected(#[from] SendRejection),

    /// Amount could not be quoted.
    #[error("{0}")]
    QuoteUnavailable(String),

    /// The transfer backend refused or failed.
    #[error("The transaction failed. Please try again. ({0})")]
    Backend(String),
}

/// Acknowledgement of a submitted transfer.
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub id: TransferId,
    pub recipient: String,
    pub quote: Quote,
    pub note: Option<String>,
    pub submitted_at: Timestamp,
    pub message: String,
}

/// Backend that accepts quoted transfers.
#[async_trait]
pub trait TransferService: Send + Sync {
    /// Submit a validated, quoted request.
    async fn submit(&self, request: &SendRequest, quote: &Quote) -> Result<TransferReceipt, TransferError>;
}

/// Stand-in backend: waits, then acknowledges. No money moves.
pub struct SimulatedTransferService {
    delay: Duration,
}

impl SimulatedTransferService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTransferService {
    fn default() -> Self {
        Self::new(constants::simulated_transfer_delay().as_std())
    }
}

#[async_trait]
impl TransferService for SimulatedTransferService {
    #[instrument(skip(self, request, quote), fields(currency = %quote.currency))]
    async fn submit(&self, request: &SendRequest, quote: &Quote) -> Result<TransferReceipt, TransferError> {
        tokio::time::sleep(self.delay).await;

        let receipt = TransferReceipt {
            id: TransferId::new(),
            recipient: request.recipient.clone(),
            quote: quote.clone(),
            note: request.note.clone(),
            submitted_at: now(),
            message: format!("Successfully sent money to {}.", request.recipient),
        };

        info!(
            transfer_id = %receipt.id,
            amount = quote.amount_minor_units,
            payout = quote.payout_minor_units,
            "Simulated transfer accepted"
        );

        Ok(receipt)
    }
}
