//! Validated numeric types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Both types validate on construction, so a held value is always
//! economically meaningful: prices strictly positive, quantities non-zero.

use crate::errors::TradeError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strictly positive execution price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Try to create a price, rejecting zero and negative values
    pub fn try_new(value: Decimal) -> Result<Self, TradeError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(TradeError::InvalidPrice(value.to_string()))
        }
    }

    /// Create a price from an integer value
    ///
    /// # Panics
    /// Panics if `value` is zero. Intended for tests and literals.
    pub fn from_u64(value: u64) -> Self {
        assert!(value > 0, "Price must be positive");
        Self(Decimal::from(value))
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str_exact(s)
            .map_err(|_| TradeError::InvalidPrice(s.to_string()))?;
        Self::try_new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A strictly positive trade quantity.
///
/// Quantities are whole units; fractional fills are not part of the
/// accounting model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Try to create a quantity, rejecting zero
    pub fn try_new(value: u64) -> Result<Self, TradeError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TradeError::InvalidQuantity(value.to_string()))
        }
    }

    /// Get the inner value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl FromStr for Quantity {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .parse()
            .map_err(|_| TradeError::InvalidQuantity(s.to_string()))?;
        Self::try_new(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
