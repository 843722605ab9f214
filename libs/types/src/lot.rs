//! Open-position lots
//!
//! A lot is one open-position record: the price it was opened at and a
//! signed quantity (positive = long, negative = short). Partial
//! consumption shrinks the magnitude; the sign never changes while the
//! lot is alive.

use crate::numeric::Price;
use serde::{Deserialize, Serialize};

/// A single open lot for one symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    /// Price the lot was opened at
    pub price: Price,
    /// Signed quantity: positive = long, negative = short. Never zero.
    pub quantity: i64,
}

impl Lot {
    /// Create a lot with a signed quantity
    ///
    /// # Panics
    /// Panics if `quantity` is zero; a zero lot has no meaning and must
    /// never enter the book.
    pub fn new(price: Price, quantity: i64) -> Self {
        assert!(quantity != 0, "Lot quantity must be non-zero");
        Self { price, quantity }
    }

    /// Sign of the lot: +1 for long, -1 for short
    pub fn signum(&self) -> i8 {
        if self.quantity > 0 {
            1
        } else {
            -1
        }
    }

    /// Unsigned quantity held by the lot
    pub fn magnitude(&self) -> u64 {
        self.quantity.unsigned_abs()
    }

    /// Shrink the lot by `cleared` units, preserving its sign
    ///
    /// `cleared` must be strictly less than the magnitude; a full
    /// consumption removes the lot instead of reducing it.
    pub fn reduce(&mut self, cleared: u64) {
        debug_assert!(cleared < self.magnitude());
        self.quantity -= self.signum() as i64 * cleared as i64;
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_reduction() -> impl Strategy<Value = (bool, u64, u64)> {
        (any::<bool>(), 2u64..1_000_000).prop_flat_map(|(long, magnitude)| {
            (Just(long), Just(magnitude), 1..magnitude)
        })
    }

    proptest! {
        #[test]
        fn prop_reduce_preserves_sign_and_shrinks(
            (long, magnitude, cleared) in arb_reduction()
        ) {
            let signed = if long { magnitude as i64 } else { -(magnitude as i64) };
            let mut lot = Lot::new(Price::from_u64(10), signed);

            lot.reduce(cleared);

            prop_assert_eq!(lot.signum(), if long { 1 } else { -1 });
            prop_assert_eq!(lot.magnitude(), magnitude - cleared);
        }
    }
}
