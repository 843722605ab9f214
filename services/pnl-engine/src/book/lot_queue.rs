//! Ordered lot queue for one symbol
//!
//! Lots are held in a double-ended queue. The head is always the next lot
//! to be consumed; FIFO inserts new lots at the tail and LIFO at the head,
//! which is the only place the two schemes differ.

use std::collections::VecDeque;
use types::lot::Lot;
use types::scheme::InsertEnd;

/// Ordered collection of open lots for a single symbol
///
/// Invariant at rest: every lot has non-zero quantity and all lots share
/// the same sign.
#[derive(Debug, Clone, Default)]
pub struct LotQueue {
    lots: VecDeque<Lot>,
}

impl LotQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            lots: VecDeque::new(),
        }
    }

    /// Insert a lot at the given end
    pub fn push(&mut self, lot: Lot, end: InsertEnd) {
        match end {
            InsertEnd::Head => self.lots.push_front(lot),
            InsertEnd::Tail => self.lots.push_back(lot),
        }
    }

    /// Copy out the head lot without removing it
    ///
    /// Returns a copy rather than a reference so callers never hold a
    /// borrow across a mutation of the queue.
    pub fn front(&self) -> Option<Lot> {
        self.lots.front().copied()
    }

    /// Sign of the head lot, or None when flat
    pub fn front_sign(&self) -> Option<i8> {
        self.lots.front().map(|lot| lot.signum())
    }

    /// Consume `cleared` units from the head lot
    ///
    /// Shrinks the lot in place preserving its sign, removing it when its
    /// magnitude reaches zero. `cleared` must not exceed the head lot's
    /// magnitude.
    pub fn consume_front(&mut self, cleared: u64) {
        let Some(front) = self.lots.front_mut() else {
            return;
        };
        let magnitude = front.magnitude();
        debug_assert!(cleared <= magnitude);
        if cleared >= magnitude {
            self.lots.pop_front();
        } else {
            front.reduce(cleared);
        }
    }

    /// Check if the queue is empty (flat position)
    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    /// Number of open lots
    pub fn len(&self) -> usize {
        self.lots.len()
    }

    /// Sum of unsigned quantities across all lots
    pub fn total_magnitude(&self) -> u64 {
        self.lots.iter().map(|lot| lot.magnitude()).sum()
    }

    /// True when every lot shares one sign (vacuously true when empty)
    pub fn is_single_signed(&self) -> bool {
        let mut signs = self.lots.iter().map(|lot| lot.signum());
        match signs.next() {
            Some(first) => signs.all(|s| s == first),
            None => true,
        }
    }

    /// Iterate over lots from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &Lot> {
        self.lots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::numeric::Price;

    fn lot(price: u64, quantity: i64) -> Lot {
        Lot::new(Price::from_u64(price), quantity)
    }

    #[test]
    fn test_tail_insert_keeps_oldest_in_front() {
        let mut queue = LotQueue::new();
        queue.push(lot(10, 5), InsertEnd::Tail);
        queue.push(lot(20, 5), InsertEnd::Tail);

        assert_eq!(queue.front().unwrap().price, Price::from_u64(10));
    }

    #[test]
    fn test_head_insert_puts_newest_in_front() {
        let mut queue = LotQueue::new();
        queue.push(lot(10, 5), InsertEnd::Head);
        queue.push(lot(20, 5), InsertEnd::Head);

        assert_eq!(queue.front().unwrap().price, Price::from_u64(20));
    }

    #[test]
    fn test_consume_front_partial() {
        let mut queue = LotQueue::new();
        queue.push(lot(10, 15), InsertEnd::Tail);

        queue.consume_front(5);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.front().unwrap().quantity, 10);
    }

    #[test]
    fn test_consume_front_exact_removes_lot() {
        let mut queue = LotQueue::new();
        queue.push(lot(10, 15), InsertEnd::Tail);
        queue.push(lot(20, 5), InsertEnd::Tail);

        queue.consume_front(15);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.front().unwrap().price, Price::from_u64(20));
    }

    #[test]
    fn test_consume_front_short_lot_preserves_sign() {
        let mut queue = LotQueue::new();
        queue.push(lot(50, -10), InsertEnd::Tail);

        queue.consume_front(4);
        assert_eq!(queue.front().unwrap().quantity, -6);
        assert_eq!(queue.front_sign(), Some(-1));
    }

    #[test]
    fn test_front_sign_flat() {
        let queue = LotQueue::new();
        assert_eq!(queue.front_sign(), None);
    }

    #[test]
    fn test_total_magnitude() {
        let mut queue = LotQueue::new();
        queue.push(lot(10, -5), InsertEnd::Tail);
        queue.push(lot(20, -7), InsertEnd::Tail);
        assert_eq!(queue.total_magnitude(), 12);
    }

    #[test]
    fn test_single_signed() {
        let mut queue = LotQueue::new();
        assert!(queue.is_single_signed());

        queue.push(lot(10, 5), InsertEnd::Tail);
        queue.push(lot(20, 7), InsertEnd::Tail);
        assert!(queue.is_single_signed());

        queue.push(lot(30, -1), InsertEnd::Tail);
        assert!(!queue.is_single_signed());
    }
}
