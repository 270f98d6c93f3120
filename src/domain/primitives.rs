//! Domain primitives: Side.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LedgerError;

/// Transaction kind: Buy or Sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Shares acquired, cash spent.
    Buy,
    /// Full holding liquidated, cash received.
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = LedgerError;

    /// Only the exact ledger spellings are accepted; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(LedgerError::InvalidKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parse() {
        assert_eq!("buy".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("sell".parse::<Side>().unwrap(), Side::Sell);
    }

    #[test]
    fn test_side_parse_rejects_unknown_kind() {
        for kind in ["hold", "BUY", " sell", ""] {
            match kind.parse::<Side>() {
                Err(LedgerError::InvalidKind(k)) => assert_eq!(k, kind),
                other => panic!("expected InvalidKind for {:?}, got {:?}", kind, other),
            }
        }
    }

    #[test]
    fn test_side_serialization() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), "\"buy\"");
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"sell\"");
    }
}
