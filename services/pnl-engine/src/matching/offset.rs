//! Offset detection and segment PnL
//!
//! A trade offsets an open position exactly when its side opposes the
//! position's sign: a BUY meets a short book, a SELL meets a long book.

use rust_decimal::Decimal;
use types::numeric::Price;
use types::trade::Side;

/// Check whether a trade side offsets a position with the given head sign
///
/// Same-direction trades extend the position instead of closing it.
pub fn is_offsetting(side: Side, front_sign: i8) -> bool {
    match side {
        Side::BUY => front_sign < 0,
        Side::SELL => front_sign > 0,
    }
}

/// Realized PnL for one cleared segment
///
/// - SELL closing a long lot: `cleared × (trade_price − lot_price)`
/// - BUY closing a short lot: `cleared × (lot_price − trade_price)`
pub fn segment_pnl(side: Side, trade_price: Price, lot_price: Price, cleared: u64) -> Decimal {
    let diff = match side {
        Side::SELL => trade_price.as_decimal() - lot_price.as_decimal(),
        Side::BUY => lot_price.as_decimal() - trade_price.as_decimal(),
    };
    Decimal::from(cleared) * diff
}
