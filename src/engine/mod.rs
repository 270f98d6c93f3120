//! Trade execution against a price table, plus read-back evaluation of
//! finished ledgers.

pub mod executor;
pub mod performance;

pub use executor::{affordable_shares, buy, create_portfolio, sell};
pub use performance::{evaluate, CashPoint, Evaluation, LedgerSummary};
