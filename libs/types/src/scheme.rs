//! Accounting scheme selection
//!
//! FIFO and LIFO share one clearing algorithm: both consume lots from the
//! head of a symbol's queue. The only behavioral difference is which end
//! new lots are inserted at, so the scheme reduces to an insertion policy.

use crate::errors::ParseSchemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lot-matching accounting scheme, fixed for the lifetime of one engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountingScheme {
    /// First-In-First-Out: oldest lot closes first
    FIFO,
    /// Last-In-First-Out: newest lot closes first
    LIFO,
}

/// Which end of the lot queue a new lot is inserted at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertEnd {
    Head,
    Tail,
}

impl AccountingScheme {
    /// Insertion end for new lots under this scheme
    ///
    /// Consumption always happens at the head, so FIFO appends at the tail
    /// (oldest stays in front) and LIFO prepends at the head (newest
    /// becomes the front).
    pub fn insert_end(&self) -> InsertEnd {
        match self {
            AccountingScheme::FIFO => InsertEnd::Tail,
            AccountingScheme::LIFO => InsertEnd::Head,
        }
    }
}

impl FromStr for AccountingScheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(AccountingScheme::FIFO),
            "lifo" => Ok(AccountingScheme::LIFO),
            _ => Err(ParseSchemeError(s.to_string())),
        }
    }
}

impl fmt::Display for AccountingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountingScheme::FIFO => write!(f, "FIFO"),
            AccountingScheme::LIFO => write!(f, "LIFO"),
        }
    }
}
