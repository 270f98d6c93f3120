pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;

pub use config::Config;
pub use domain::{Decimal, Portfolio, PriceTable, Side, TransactionRecord};
pub use engine::{buy, create_portfolio, evaluate, sell, Evaluation, LedgerSummary};
pub use error::LedgerError;
pub use ledger::{read_ledger, record, record_kind, LedgerWriter};
