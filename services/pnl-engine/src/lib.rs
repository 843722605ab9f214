//! Realized-PnL Engine
//!
//! Lot-matching accounting engine computing realized profit-and-loss over
//! an ordered trade log under FIFO or LIFO lot selection.
//!
//! **Key Invariants:**
//! - A symbol's open lots all share one sign at rest (never long and short
//!   simultaneously)
//! - At most one result record per trade
//! - Deterministic processing (same inputs → same outputs)
//! - Open interest strictly decreases during clearing, guaranteeing
//!   termination

pub mod book;
pub mod engine;
pub mod matching;

pub use engine::MatchingEngine;
