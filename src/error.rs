use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Decimal;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid transaction kind: {0:?} (expected buy or sell)")]
    InvalidKind(String),
    #[error("I/O error on ledger {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Date index {date} out of range ({days} trading days)")]
    DateOutOfRange { date: usize, days: usize },
    #[error("Stock index {stock} out of range ({stocks} stocks)")]
    StockOutOfRange { stock: usize, stocks: usize },
    #[error("Non-positive price {price} for stock {stock} on day {date}")]
    NonPositivePrice {
        date: usize,
        stock: usize,
        price: Decimal,
    },
    #[error("Invalid price at day {date}, stock {stock}: {message}")]
    InvalidPrice {
        date: usize,
        stock: usize,
        message: String,
    },
    #[error("Negative {field}: {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
    #[error("Allocation count {allocations} does not match stock count {stocks}")]
    AllocationMismatch { allocations: usize, stocks: usize },
    #[error("Share count overflow for stock {0}")]
    ShareOverflow(usize),
    #[error("Cash amount overflow for stock {0}")]
    AmountOverflow(usize),
    #[error("Malformed ledger line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl LedgerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LedgerError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::InvalidKind("hold".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid transaction kind: \"hold\" (expected buy or sell)"
        );

        let err = LedgerError::StockOutOfRange { stock: 4, stocks: 3 };
        assert_eq!(err.to_string(), "Stock index 4 out of range (3 stocks)");

        let err = LedgerError::Parse {
            line: 7,
            message: "missing field".to_string(),
        };
        assert_eq!(err.to_string(), "Malformed ledger line 7: missing field");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let err = LedgerError::io(
            "/nope/ledger.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/nope/ledger.txt"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("gone".to_string()));
    }
}
