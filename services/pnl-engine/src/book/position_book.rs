//! Per-symbol position book
//!
//! Owns the lot queues for every symbol seen so far. The book is owned by
//! one engine instance; there is no shared or global state, so multiple
//! runs and multiple engines are independent.

use std::collections::HashMap;
use types::lot::Lot;
use types::scheme::InsertEnd;

use super::lot_queue::LotQueue;

/// Mapping from symbol to its ordered lot queue
#[derive(Debug, Clone, Default)]
pub struct PositionBook {
    queues: HashMap<String, LotQueue>,
}

impl PositionBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    /// Get the lot queue for a symbol, creating an empty one on first
    /// reference
    pub fn lots_mut(&mut self, symbol: &str) -> &mut LotQueue {
        self.queues.entry(symbol.to_string()).or_default()
    }

    /// Get the lot queue for a symbol without creating it
    pub fn lots(&self, symbol: &str) -> Option<&LotQueue> {
        self.queues.get(symbol)
    }

    /// Sign of the symbol's head lot, or None when flat or unseen
    pub fn front_sign(&self, symbol: &str) -> Option<i8> {
        self.queues.get(symbol).and_then(|queue| queue.front_sign())
    }

    /// Insert a lot for a symbol at the scheme's insertion end
    pub fn push_lot(&mut self, symbol: &str, lot: Lot, end: InsertEnd) {
        self.lots_mut(symbol).push(lot, end);
    }

    /// True when the symbol holds no open lots
    pub fn is_flat(&self, symbol: &str) -> bool {
        self.queues
            .get(symbol)
            .map(|queue| queue.is_empty())
            .unwrap_or(true)
    }

    /// Iterate over all symbols with their queues
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &LotQueue)> {
        self.queues
            .iter()
            .map(|(symbol, queue)| (symbol.as_str(), queue))
    }
}
