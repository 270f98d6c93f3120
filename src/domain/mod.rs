//! Domain types for the trade ledger.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - Side (buy/sell) with strict parsing
//! - Price table, portfolio holdings and the transaction record

pub mod decimal;
pub mod portfolio;
pub mod prices;
pub mod primitives;
pub mod transaction;

pub use decimal::Decimal;
pub use portfolio::Portfolio;
pub use prices::PriceTable;
pub use primitives::Side;
pub use transaction::TransactionRecord;
