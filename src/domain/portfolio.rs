//! Per-stock share holdings.

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Number of whole shares held per stock, indexed like the price table columns.
///
/// Holdings only change through the trade executor, which takes the
/// portfolio by `&mut` and pairs every change with a ledger line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portfolio {
    holdings: Vec<u64>,
}

impl Portfolio {
    /// An empty position in each of `stocks` stocks.
    pub fn zeros(stocks: usize) -> Self {
        Self {
            holdings: vec![0; stocks],
        }
    }

    pub fn from_holdings(holdings: Vec<u64>) -> Self {
        Self { holdings }
    }

    pub fn holdings(&self) -> &[u64] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn total_shares(&self) -> u64 {
        self.holdings.iter().sum()
    }

    pub fn shares(&self, stock: usize) -> Result<u64, LedgerError> {
        self.holdings
            .get(stock)
            .copied()
            .ok_or(LedgerError::StockOutOfRange {
                stock,
                stocks: self.holdings.len(),
            })
    }

    /// New holding after buying `shares` more, without applying it.
    pub(crate) fn checked_add(&self, stock: usize, shares: u64) -> Result<u64, LedgerError> {
        self.shares(stock)?
            .checked_add(shares)
            .ok_or(LedgerError::ShareOverflow(stock))
    }

    pub(crate) fn set(&mut self, stock: usize, shares: u64) {
        self.holdings[stock] = shares;
    }

    pub(crate) fn push(&mut self, shares: u64) {
        self.holdings.push(shares);
    }
}
