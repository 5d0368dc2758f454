//! The send-money flow behind the portal page.

use std::sync::Arc;

use mizu_common::Currency;
use mizu_fx::{RateProvider, RateSnapshotCache};
use mizu_quote::{QuoteEngine, QuoteResult};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::config::PortalConfig;
use crate::error::Result;
use crate::transfer::{self, SendRejection, SendRequest, TransferError, TransferReceipt, TransferService};

/// What the form should render for the current input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub quote: QuoteResult,
    /// Message for the "Attention needed" banner.
    pub top_error: Option<String>,
    /// Whether the submit button is enabled.
    pub can_submit: bool,
}

/// Quotes input, validates and submits transfers.
pub struct Portal {
    engine: Arc<RwLock<QuoteEngine>>,
    available_usd: Decimal,
    transfers: Arc<dyn TransferService>,
}

impl Portal {
    /// Create a portal, validating the quote configuration.
    pub fn new(config: PortalConfig, transfers: Arc<dyn TransferService>) -> Result<Self> {
        let engine = QuoteEngine::new(config.quote)?;
        Ok(Self {
            engine: Arc::new(RwLock::new(engine)),
            available_usd: config.available_usd,
            transfers,
        })
    }

    /// Balance available to send.
    pub fn available_usd(&self) -> Decimal {
        self.available_usd
    }

    /// Quote the current amount and currency.
    pub async fn quote(&self, raw_amount: &str, currency: &Currency) -> QuoteResult {
        self.engine.read().await.quote(raw_amount, currency)
    }

    /// Re-evaluate the form after an input change.
    ///
    /// `last_error` is the message left by the previous submission, shown
    /// only when the amount itself is fine.
    pub async fn form_state(&self, request: &SendRequest, last_error: Option<&str>) -> FormState {
        let quote = self.quote(&request.amount, &request.currency).await;
        let validation_error = quote.error();
        let can_submit = validation_error.is_none() && !request.recipient.is_empty();
        let top_error = validation_error.or_else(|| last_error.map(str::to_string));

        FormState {
            quote,
            top_error,
            can_submit,
        }
    }

    /// Validate, quote and submit a transfer.
    #[instrument(skip(self, request), fields(currency = %request.currency))]
    pub async fn send(&self, request: &SendRequest) -> std::result::Result<TransferReceipt, TransferError> {
        transfer::validate(request, self.available_usd)?;

        let result = self.quote(&request.amount, &request.currency).await;
        let quote = match result.quote() {
            Some(quote) => quote.clone(),
            None => {
                let message = result
                    .error()
                    .unwrap_or_else(|| SendRejection::InvalidAmount.to_string());
                warn!(reason = %message, "Send refused");
                return Err(TransferError::QuoteUnavailable(message));
            }
        };

        if result.is_unsupported_currency() {
            warn!(currency = %request.currency, "Sending with fallback pricing");
        }

        self.transfers.submit(request, &quote).await
    }

    /// Pull rates through the cache and rebuild the engine with them.
    pub async fn refresh_rates(
        &self,
        cache: &RateSnapshotCache,
        provider: &dyn RateProvider,
    ) -> Result<usize> {
        let rates = cache.rates_or_refresh(provider).await?;
        let count = rates.len();

        let mut engine = self.engine.write().await;
        let updated = engine.with_rates(rates)?;
        *engine = updated;

        info!(currencies = count, "Quote engine updated with fresh rates");
        Ok(count)
    }
}
