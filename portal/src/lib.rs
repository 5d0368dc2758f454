//! MizuCash Portal
//!
//! The signed-in portal page: balance, recent activity, quick recipients
//! and the send-money flow built on the quote engine.

pub mod activity;
pub mod config;
pub mod demo;
pub mod error;
pub mod portal;
pub mod recipients;
pub mod transfer;

pub use activity::{paginate, Activity, ActivityKind, ActivityPage};
pub use config::PortalConfig;
pub use error::PortalError;
pub use portal::{FormState, Portal};
pub use recipients::QuickRecipient;
pub use transfer::{
    SendRejection, SendRequest, SimulatedTransferService, TransferError, TransferReceipt,
    TransferService,
};
