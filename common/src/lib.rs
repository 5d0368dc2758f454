//! MizuCash Common Types
//!
//! This crate contains shared types used across the MizuCash workspace,
//! including currency codes, minor-unit constants, the recipient currency
//! catalog and identifier types.

pub mod catalog;
pub mod identifiers;
pub mod monetary;
pub mod error;
pub mod time;

pub use catalog::*;
pub use identifiers::*;
pub use monetary::*;
pub use error::*;
pub use time::*;
