//! Matching engine core
//!
//! Processes one trade at a time against the position book, producing at
//! most one realized-PnL record per trade. The engine is a deterministic
//! synchronous fold over the input sequence: no suspension points, no
//! shared state, one owned book per instance.

use rust_decimal::Decimal;
use types::lot::Lot;
use types::pnl::PnlRecord;
use types::scheme::AccountingScheme;
use types::trade::{Side, Trade};

use crate::book::PositionBook;
use crate::matching::offset;

/// Lot-matching accounting engine
///
/// The scheme is fixed for the lifetime of the instance; one instance
/// corresponds to one full run over a trade sequence.
#[derive(Debug)]
pub struct MatchingEngine {
    scheme: AccountingScheme,
    book: PositionBook,
}

impl MatchingEngine {
    /// Create a new engine with an empty position book
    pub fn new(scheme: AccountingScheme) -> Self {
        Self {
            scheme,
            book: PositionBook::new(),
        }
    }

    /// The active accounting scheme
    pub fn scheme(&self) -> AccountingScheme {
        self.scheme
    }

    /// Process a single trade
    ///
    /// A trade that opens or extends a position returns None. A trade that
    /// offsets the open position clears lots from the head of the queue
    /// and returns one record with the accumulated PnL; if the trade is
    /// larger than all opposing open interest, the residual opens a new
    /// lot of the opposite sign in the same step.
    pub fn process_trade(&mut self, trade: &Trade) -> Option<PnlRecord> {
        let end = self.scheme.insert_end();
        let queue = self.book.lots_mut(&trade.symbol);

        let offsetting = queue
            .front_sign()
            .map(|sign| offset::is_offsetting(trade.side, sign))
            .unwrap_or(false);

        if !offsetting {
            // Flat book or same-direction position: the whole trade
            // becomes one new lot.
            queue.push(Lot::new(trade.price, trade.signed_quantity()), end);
            return None;
        }

        let mut remaining = trade.quantity.get();
        let mut pnl = Decimal::ZERO;

        while remaining > 0 && !queue.is_empty() {
            // Copy out the head lot, then mutate the queue as a separate
            // step; no reference is held across the mutation.
            let lot = queue.front().expect("non-empty queue has a front lot");
            let available = lot.magnitude();
            let cleared = remaining.min(available);

            pnl += offset::segment_pnl(trade.side, trade.price, lot.price, cleared);
            queue.consume_front(cleared);
            remaining -= cleared;
        }

        if remaining > 0 {
            // Sign flip: the trade consumed all opposing interest and the
            // residual opens a position on the other side.
            let residual = match trade.side {
                Side::BUY => remaining as i64,
                Side::SELL => -(remaining as i64),
            };
            queue.push(Lot::new(trade.price, residual), end);
        }

        tracing::debug!(
            symbol = %trade.symbol,
            timestamp = trade.timestamp,
            pnl = %pnl,
            "trade cleared against open position"
        );

        Some(PnlRecord::new(trade.timestamp, trade.symbol.clone(), pnl))
    }

    /// Process an ordered trade sequence, in order
    ///
    /// Result records come out in the order the closing trades were
    /// processed.
    pub fn process_trades(&mut self, trades: &[Trade]) -> Vec<PnlRecord> {
        trades
            .iter()
            .filter_map(|trade| self.process_trade(trade))
            .collect()
    }

    /// Snapshot of the open lots for a symbol, head first
    pub fn open_lots(&self, symbol: &str) -> Vec<Lot> {
        self.book
            .lots(symbol)
            .map(|queue| queue.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Read access to the position book
    pub fn book(&self) -> &PositionBook {
        &self.book
    }
}
