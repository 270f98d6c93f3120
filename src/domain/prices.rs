//! Historical price grid indexed by `[date, stock]`.

use crate::domain::Decimal;
use crate::error::LedgerError;

/// Read-only price table: one row per trading day, one column per stock.
///
/// Rows are not required to have equal length; lookups are bounds-checked
/// and report which index fell outside the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceTable {
    rows: Vec<Vec<Decimal>>,
}

impl PriceTable {
    pub fn new(rows: Vec<Vec<Decimal>>) -> Self {
        Self { rows }
    }

    /// Build a table from a floating-point grid, rejecting NaN, infinities and
    /// values outside the decimal range.
    pub fn from_f64_rows(rows: &[Vec<f64>]) -> Result<Self, LedgerError> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(date, row)| {
                row.iter()
                    .enumerate()
                    .map(|(stock, &px)| {
                        Decimal::from_f64(px).ok_or_else(|| LedgerError::InvalidPrice {
                            date,
                            stock,
                            message: format!("{} is not a representable price", px),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    /// Number of trading days.
    pub fn days(&self) -> usize {
        self.rows.len()
    }

    /// Number of stocks, taken from day 0.
    pub fn stocks(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Index of the final trading day, if any.
    pub fn last_day(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    pub fn price(&self, date: usize, stock: usize) -> Result<Decimal, LedgerError> {
        let row = self.rows.get(date).ok_or(LedgerError::DateOutOfRange {
            date,
            days: self.rows.len(),
        })?;
        row.get(stock)
            .copied()
            .ok_or(LedgerError::StockOutOfRange {
                stock,
                stocks: row.len(),
            })
    }

    /// Price for a purchase, which must be strictly positive.
    pub(crate) fn buy_price(&self, date: usize, stock: usize) -> Result<Decimal, LedgerError> {
        let price = self.price(date, stock)?;
        if !price.is_positive() {
            return Err(LedgerError::NonPositivePrice { date, stock, price });
        }
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PriceTable {
        PriceTable::from_f64_rows(&[vec![100.0, 50.0], vec![101.5, 49.25]]).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let t = table();
        assert_eq!(t.days(), 2);
        assert_eq!(t.stocks(), 2);
        assert_eq!(t.last_day(), Some(1));
        assert_eq!(PriceTable::default().last_day(), None);
        assert_eq!(PriceTable::default().stocks(), 0);
    }

    #[test]
    fn test_price_lookup() {
        let t = table();
        assert_eq!(t.price(1, 1).unwrap().to_canonical_string(), "49.25");
    }

    #[test]
    fn test_out_of_range_lookups() {
        let t = table();
        assert!(matches!(
            t.price(2, 0),
            Err(LedgerError::DateOutOfRange { date: 2, days: 2 })
        ));
        assert!(matches!(
            t.price(0, 5),
            Err(LedgerError::StockOutOfRange { stock: 5, stocks: 2 })
        ));
    }

    #[test]
    fn test_non_finite_cells_rejected() {
        let err = PriceTable::from_f64_rows(&[vec![1.0, f64::NAN]]).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::InvalidPrice { date: 0, stock: 1, .. }
        ));

        match PriceTable::from_f64_rows(&[vec![1.0], vec![1e30]]) {
            Err(LedgerError::InvalidPrice {
                date: 1,
                stock: 0,
                message,
            }) => assert!(message.contains("not a representable price")),
            other => panic!("expected InvalidPrice, got {:?}", other),
        }
    }

    #[test]
    fn test_buy_price_must_be_positive() {
        let t = PriceTable::from_f64_rows(&[vec![0.0, 10.0]]).unwrap();
        assert!(matches!(
            t.buy_price(0, 0),
            Err(LedgerError::NonPositivePrice { date: 0, stock: 0, .. })
        ));
        assert!(t.buy_price(0, 1).is_ok());
    }
}
