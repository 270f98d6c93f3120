use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::{Decimal, Side, TransactionRecord};
use crate::error::LedgerError;

#[derive(Debug, serde::Deserialize)]
struct Row {
    kind: String,
    date: usize,
    stock: usize,
    shares: u64,
    price: String,
    cash_delta: String,
}

/// Read every transaction from the ledger file at `path`, in file order.
pub fn read_ledger(path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>, LedgerError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LedgerError::io(path, e))?;
    parse_ledger(file)
}

/// Parse headerless ledger lines from any reader.
pub fn parse_ledger<R: Read>(source: R) -> Result<Vec<TransactionRecord>, LedgerError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::None)
        .from_reader(source);

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let line = idx + 1;
        let parse_err = |message: String| LedgerError::Parse { line, message };

        let raw = result.map_err(|e| parse_err(e.to_string()))?;
        let row: Row = raw
            .deserialize(None)
            .map_err(|e| parse_err(e.to_string()))?;

        let side: Side = row.kind.parse()?;
        let price = Decimal::from_str_canonical(&row.price)
            .map_err(|e| parse_err(format!("invalid price {:?}: {}", row.price, e)))?;
        let cash_delta = Decimal::from_str_canonical(&row.cash_delta)
            .map_err(|e| parse_err(format!("invalid cash delta {:?}: {}", row.cash_delta, e)))?;

        records.push(TransactionRecord::new(
            side,
            row.date,
            row.stock,
            row.shares,
            price,
            cash_delta,
        ));
    }

    Ok(records)
}
