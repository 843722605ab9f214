//! Trade input records
//!
//! A trade is one row of the ordered input log. Construction takes
//! pre-validated components, so a held `Trade` is well-formed by type.

use crate::errors::TradeError;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trade side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy trade (opens/extends long, closes short)
    BUY,
    /// Sell trade (opens/extends short, closes long)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }

    /// Sign of the position this side opens: +1 for BUY, -1 for SELL
    pub fn sign(&self) -> i8 {
        match self {
            Side::BUY => 1,
            Side::SELL => -1,
        }
    }
}

impl FromStr for Side {
    type Err = TradeError;

    /// Parse a side token. Accepts `B`/`S` and the long forms `BUY`/`SELL`,
    /// case-insensitive. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "B" | "BUY" => Ok(Side::BUY),
            "S" | "SELL" => Ok(Side::SELL),
            _ => Err(TradeError::InvalidSide(s.to_string())),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::BUY => write!(f, "BUY"),
            Side::SELL => write!(f, "SELL"),
        }
    }
}

/// One trade from the input log
///
/// Timestamps are opaque ordering integers copied through to results;
/// they are assumed non-decreasing but not required unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub timestamp: i64,
    pub symbol: String,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl Trade {
    /// Create a new trade from validated components
    ///
    /// The symbol must be non-empty; price and quantity carry their own
    /// validation.
    pub fn new(
        timestamp: i64,
        symbol: impl Into<String>,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<Self, TradeError> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(TradeError::EmptySymbol);
        }
        Ok(Self {
            timestamp,
            symbol,
            side,
            price,
            quantity,
        })
    }

    /// Quantity signed by side: positive for BUY, negative for SELL
    pub fn signed_quantity(&self) -> i64 {
        match self.side {
            Side::BUY => self.quantity.get() as i64,
            Side::SELL => -(self.quantity.get() as i64),
        }
    }
}
