//! Transaction record: one line of the ledger.

use crate::domain::{Decimal, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single executed buy or sell, as persisted in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Buy or sell.
    pub side: Side,
    /// Trading day index into the price table.
    pub date: usize,
    /// Stock index into the price table.
    pub stock: usize,
    /// Whole shares transacted.
    pub shares: u64,
    /// Unit price, rounded to cents.
    pub price: Decimal,
    /// Signed cash effect including fees, rounded to cents.
    pub cash_delta: Decimal,
}

impl TransactionRecord {
    /// Create a record, rounding `price` and `cash_delta` to two decimals.
    ///
    /// The stored values are exactly what the ledger line carries, so a
    /// record read back from the ledger compares equal to the one written.
    pub fn new(
        side: Side,
        date: usize,
        stock: usize,
        shares: u64,
        price: Decimal,
        cash_delta: Decimal,
    ) -> Self {
        Self {
            side,
            date,
            stock,
            shares,
            price: price.round_money(),
            cash_delta: cash_delta.round_money(),
        }
    }
}

/// Ledger line format: `kind,date,stock,shares,price,cash_delta`.
impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.side,
            self.date,
            self.stock,
            self.shares,
            self.price.to_money_string(),
            self.cash_delta.to_money_string()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_line_format() {
        let buy = TransactionRecord::new(Side::Buy, 5, 2, 9, d("100"), d("-950"));
        assert_eq!(buy.to_string(), "buy,5,2,9,100.00,-950.00");

        let sell = TransactionRecord::new(Side::Sell, 8, 1, 15, d("30"), d("430"));
        assert_eq!(sell.to_string(), "sell,8,1,15,30.00,430.00");
    }

    #[test]
    fn test_zero_share_line() {
        let rec = TransactionRecord::new(Side::Sell, 3, 0, 0, d("12.5"), d("-20"));
        assert_eq!(rec.to_string(), "sell,3,0,0,12.50,-20.00");
    }

    #[test]
    fn test_new_rounds_money_fields() {
        let rec = TransactionRecord::new(Side::Buy, 0, 0, 3, d("33.333"), d("-119.999"));
        assert_eq!(rec.price, d("33.33"));
        assert_eq!(rec.cash_delta, d("-120.00"));
    }
}
