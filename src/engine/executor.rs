use std::path::Path;

use tracing::{info, warn};

use crate::domain::{Decimal, Portfolio, PriceTable, Side, TransactionRecord};
use crate::error::LedgerError;
use crate::ledger::LedgerWriter;

/// Whole shares affordable from `budget` after `fees` at `price`.
///
/// Floors toward zero; a budget that does not cover the fees buys nothing.
/// `price` must be positive. Returns None if the quotient overflows or the
/// count does not fit in u64.
pub fn affordable_shares(budget: Decimal, fees: Decimal, price: Decimal) -> Option<u64> {
    let spendable = budget.checked_sub(fees)?;
    if !spendable.is_positive() {
        return Some(0);
    }
    spendable.checked_div(price)?.floor().to_u64()
}

/// Cash spent on a buy: `-(shares * price + fees)`.
fn buy_cash_delta(
    stock: usize,
    shares: u64,
    price: Decimal,
    fees: Decimal,
) -> Result<Decimal, LedgerError> {
    Decimal::from(shares)
        .checked_mul(price)
        .and_then(|cost| cost.checked_add(fees))
        .map(|total| -total)
        .ok_or(LedgerError::AmountOverflow(stock))
}

/// Cash received on a sell: `shares * price - fees`.
fn sell_cash_delta(
    stock: usize,
    shares: u64,
    price: Decimal,
    fees: Decimal,
) -> Result<Decimal, LedgerError> {
    Decimal::from(shares)
        .checked_mul(price)
        .and_then(|proceeds| proceeds.checked_sub(fees))
        .ok_or(LedgerError::AmountOverflow(stock))
}

fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<(), LedgerError> {
    if value.is_negative() {
        return Err(LedgerError::NegativeAmount { field, value });
    }
    Ok(())
}

/// Buy as many whole shares of `stock` on `date` as `available_capital`
/// covers after the fixed `fees`, adding them to `portfolio[stock]`.
///
/// The line is appended to the ledger before the portfolio is touched; if
/// the append fails the portfolio is left unchanged. A budget that cannot
/// afford one share still records a zero-share buy costing `fees`.
pub fn buy(
    date: usize,
    stock: usize,
    available_capital: Decimal,
    price_table: &PriceTable,
    fees: Decimal,
    portfolio: &mut Portfolio,
    ledger_path: &Path,
) -> Result<TransactionRecord, LedgerError> {
    ensure_non_negative("available capital", available_capital)?;
    ensure_non_negative("fees", fees)?;

    let price = price_table.buy_price(date, stock)?;
    let shares = affordable_shares(available_capital, fees, price)
        .ok_or(LedgerError::ShareOverflow(stock))?;
    let holding = portfolio.checked_add(stock, shares)?;

    if shares == 0 {
        warn!(date, stock, %price, %available_capital, %fees, "budget does not cover one share");
    }

    let cash_delta = buy_cash_delta(stock, shares, price, fees)?;
    let rec = TransactionRecord::new(Side::Buy, date, stock, shares, price, cash_delta);
    LedgerWriter::new(ledger_path).append(&rec)?;
    portfolio.set(stock, holding);

    Ok(rec)
}

/// Sell the entire holding of `stock` on `date`, leaving `portfolio[stock]`
/// at zero.
///
/// Selling an empty position is allowed and records a zero-share sale whose
/// cash delta is `-fees`. Proceeds are not clamped when fees exceed them.
pub fn sell(
    date: usize,
    stock: usize,
    price_table: &PriceTable,
    fees: Decimal,
    portfolio: &mut Portfolio,
    ledger_path: &Path,
) -> Result<TransactionRecord, LedgerError> {
    ensure_non_negative("fees", fees)?;

    let price = price_table.price(date, stock)?;
    let shares = portfolio.shares(stock)?;

    let cash_delta = sell_cash_delta(stock, shares, price, fees)?;
    let rec = TransactionRecord::new(Side::Sell, date, stock, shares, price, cash_delta);
    LedgerWriter::new(ledger_path).append(&rec)?;
    portfolio.set(stock, 0);

    Ok(rec)
}

/// Build the starting portfolio by buying each stock on day 0 with its own
/// allocation, writing one `buy` line per stock in index order.
///
/// All inputs are validated before the first line is written.
pub fn create_portfolio(
    allocations: &[Decimal],
    price_table: &PriceTable,
    fees: Decimal,
    ledger_path: &Path,
) -> Result<Portfolio, LedgerError> {
    ensure_non_negative("fees", fees)?;
    if allocations.len() != price_table.stocks() {
        return Err(LedgerError::AllocationMismatch {
            allocations: allocations.len(),
            stocks: price_table.stocks(),
        });
    }

    let mut planned = Vec::with_capacity(allocations.len());
    for (stock, &allocation) in allocations.iter().enumerate() {
        ensure_non_negative("allocation", allocation)?;
        let price = price_table.buy_price(0, stock)?;
        let shares = affordable_shares(allocation, fees, price)
            .ok_or(LedgerError::ShareOverflow(stock))?;
        let cash_delta = buy_cash_delta(stock, shares, price, fees)?;
        planned.push(TransactionRecord::new(
            Side::Buy,
            0,
            stock,
            shares,
            price,
            cash_delta,
        ));
    }

    let writer = LedgerWriter::new(ledger_path);
    let mut portfolio = Portfolio::default();
    for rec in &planned {
        writer.append(rec)?;
        portfolio.push(rec.shares);
    }

    info!(
        ledger = ?ledger_path,
        stocks = portfolio.len(),
        shares = portfolio.total_shares(),
        "portfolio created"
    );
    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    #[test]
    fn test_affordable_shares_floors() {
        assert_eq!(affordable_shares(d("1000"), d("50"), d("100")), Some(9));
        assert_eq!(affordable_shares(d("1000"), d("40"), d("50")), Some(19));
        assert_eq!(affordable_shares(d("1099.99"), d("0"), d("110")), Some(9));
    }

    #[test]
    fn test_affordable_shares_budget_below_fees() {
        assert_eq!(affordable_shares(d("20"), d("20"), d("1")), Some(0));
        assert_eq!(affordable_shares(d("10"), d("20"), d("1")), Some(0));
        assert_eq!(affordable_shares(d("119"), d("20"), d("100")), Some(0));
    }

    #[test]
    fn test_affordable_shares_overflow_is_none() {
        // Quotient exceeds the decimal range.
        assert_eq!(affordable_shares(d("70000000000000000000000000000"), d("0"), d("0.0000000001")), None);
        // Quotient fits the decimal range but not u64.
        assert_eq!(affordable_shares(d("10000000000000000000000000"), d("0"), d("1")), None);
    }

    #[test]
    fn test_cash_delta_overflow() {
        assert!(matches!(
            sell_cash_delta(3, u64::MAX, d("10000000000000"), d("0")),
            Err(LedgerError::AmountOverflow(3))
        ));
        assert!(matches!(
            buy_cash_delta(1, u64::MAX, d("10000000000000"), d("20")),
            Err(LedgerError::AmountOverflow(1))
        ));
        assert_eq!(buy_cash_delta(0, 9, d("100"), d("50")).unwrap(), d("-950"));
        assert_eq!(sell_cash_delta(0, 15, d("30"), d("20")).unwrap(), d("430"));
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("fees", d("0")).is_ok());
        assert!(matches!(
            ensure_non_negative("fees", d("-1")),
            Err(LedgerError::NegativeAmount { field: "fees", .. })
        ));
    }
}
