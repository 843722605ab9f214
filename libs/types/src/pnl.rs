//! Realized-PnL result records
//!
//! One record is emitted per trade that closes (fully or partially) an
//! open position. Timestamp and symbol are copied from the closing trade.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Realized PnL from one closing trade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnlRecord {
    pub timestamp: i64,
    pub symbol: String,
    /// Sum of PnL contributions from every lot segment the trade consumed
    pub pnl: Decimal,
}

impl PnlRecord {
    /// Create a new result record
    pub fn new(timestamp: i64, symbol: impl Into<String>, pnl: Decimal) -> Self {
        Self {
            timestamp,
            symbol: symbol.into(),
            pnl,
        }
    }
}
