//! Error types for the accounting engine
//!
//! Validation error taxonomy using thiserror. All trade validation happens
//! at the input boundary; once a `Trade` is constructed the matching
//! algorithm has no failure paths of its own.

use thiserror::Error;

/// Per-trade validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradeError {
    #[error("Invalid side: {0}")]
    InvalidSide(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Empty symbol")]
    EmptySymbol,
}

/// Unrecognized accounting scheme selector
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown accounting scheme: {0} (expected 'fifo' or 'lifo')")]
pub struct ParseSchemeError(pub String);
