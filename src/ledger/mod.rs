//! Append-only text ledger: one `kind,date,stock,shares,price,cash_delta`
//! line per transaction, no header.

pub mod reader;
pub mod writer;

pub use reader::{parse_ledger, read_ledger};
pub use writer::{record, record_kind, LedgerWriter};
