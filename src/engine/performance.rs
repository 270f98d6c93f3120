use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::{Decimal as RustDecimal, RoundingStrategy};
use serde::Serialize;

use crate::domain::{Decimal, Side, TransactionRecord};
use crate::error::LedgerError;
use crate::ledger::read_ledger;

/// Running cash total after all transactions of one trading day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashPoint {
    pub date: usize,
    pub cumulative: Decimal,
}

/// Aggregate view of one ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LedgerSummary {
    pub total_transactions: usize,
    pub buys: usize,
    pub sells: usize,
    /// Sum of every cash delta.
    pub net_cash: Decimal,
    /// Net cash per stock index, for stocks that appear in the ledger.
    pub net_cash_by_stock: BTreeMap<usize, Decimal>,
    /// Cumulative cash after each traded day, ascending by date.
    pub cash_curve: Vec<CashPoint>,
}

impl LedgerSummary {
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        let mut summary = LedgerSummary {
            total_transactions: records.len(),
            ..Default::default()
        };

        let mut by_date: BTreeMap<usize, Decimal> = BTreeMap::new();
        for rec in records {
            match rec.side {
                Side::Buy => summary.buys += 1,
                Side::Sell => summary.sells += 1,
            }
            summary.net_cash += rec.cash_delta;
            *summary.net_cash_by_stock.entry(rec.stock).or_default() += rec.cash_delta;
            *by_date.entry(rec.date).or_default() += rec.cash_delta;
        }

        let mut running = Decimal::zero();
        summary.cash_curve = by_date
            .into_iter()
            .map(|(date, delta)| {
                running += delta;
                CashPoint {
                    date,
                    cumulative: running,
                }
            })
            .collect();

        summary
    }

    pub fn from_ledger(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let records = read_ledger(path)?;
        Ok(Self::from_records(&records))
    }

    /// Net cash for `stock`, zero if it was never traded.
    pub fn net_cash_for(&self, stock: usize) -> Decimal {
        self.net_cash_by_stock
            .get(&stock)
            .copied()
            .unwrap_or_default()
    }

    /// Number of stocks implied by the highest traded index.
    pub fn implied_stocks(&self) -> usize {
        self.net_cash_by_stock
            .keys()
            .next_back()
            .map_or(0, |max| max + 1)
    }
}

/// Head-to-head comparison of several ledgers over the same stocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Evaluation {
    /// Stocks won per ledger index; ledgers that won nothing are absent.
    pub wins: BTreeMap<usize, usize>,
    /// Share of stocks won per ledger index, rounded to two decimals.
    pub win_rates: BTreeMap<usize, Decimal>,
    /// Winning ledger index for each stock.
    pub winners: Vec<usize>,
}

/// For each of `stocks` stocks, find the ledger with the highest net cash.
///
/// Ties go to the earliest ledger. A stock absent from a ledger counts as
/// zero net cash for it.
pub fn evaluate(summaries: &[LedgerSummary], stocks: usize) -> Evaluation {
    let mut eval = Evaluation::default();
    if summaries.is_empty() || stocks == 0 {
        return eval;
    }

    for stock in 0..stocks {
        let mut best = 0;
        for (idx, summary) in summaries.iter().enumerate().skip(1) {
            if summary.net_cash_for(stock) > summaries[best].net_cash_for(stock) {
                best = idx;
            }
        }
        eval.winners.push(best);
        *eval.wins.entry(best).or_default() += 1;
    }

    let total = RustDecimal::from(stocks as u64);
    eval.win_rates = eval
        .wins
        .iter()
        .map(|(&idx, &count)| {
            let rate = (RustDecimal::from(count as u64) / total)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            (idx, Decimal::new(rate))
        })
        .collect();

    eval
}
