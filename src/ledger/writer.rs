use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{Decimal, Side, TransactionRecord};
use crate::error::LedgerError;

/// Append-only writer for a ledger file.
///
/// Holds only the path. Every append opens the file in create+append mode,
/// writes one line and drops the handle before returning, so earlier lines
/// are never touched and no handle outlives the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerWriter {
    path: PathBuf,
}

impl LedgerWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Append one newline-terminated record.
    ///
    /// I/O failures are returned as-is; the append is not retried.
    pub fn append(&self, record: &TransactionRecord) -> Result<(), LedgerError> {
        let line = format!("{}\n", record);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LedgerError::io(&self.path, e))?;
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| LedgerError::io(&self.path, e))?;

        debug!(ledger = ?self.path, line = %record, "ledger line appended");
        Ok(())
    }
}

/// Append one transaction line to the ledger at `ledger_path`.
///
/// Creates the file if it does not exist. Returns the record as written,
/// with `price` and `cash_delta` rounded to two decimals.
pub fn record(
    side: Side,
    date: usize,
    stock: usize,
    shares: u64,
    price: Decimal,
    cash_delta: Decimal,
    ledger_path: &Path,
) -> Result<TransactionRecord, LedgerError> {
    let rec = TransactionRecord::new(side, date, stock, shares, price, cash_delta);
    LedgerWriter::new(ledger_path).append(&rec)?;
    Ok(rec)
}

/// Like [`record`], but takes the transaction kind as text.
///
/// Any kind other than `buy` or `sell` is rejected with
/// [`LedgerError::InvalidKind`] and nothing is written.
pub fn record_kind(
    kind: &str,
    date: usize,
    stock: usize,
    shares: u64,
    price: Decimal,
    cash_delta: Decimal,
    ledger_path: &Path,
) -> Result<TransactionRecord, LedgerError> {
    let side: Side = kind.parse()?;
    record(side, date, stock, shares, price, cash_delta, ledger_path)
}
