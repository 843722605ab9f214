//! Position book
//!
//! Per-symbol ordered lot storage. The queue is the unit of matching:
//! consumption always happens at the head, and the accounting scheme only
//! decides which end new lots are inserted at.

pub mod lot_queue;
pub mod position_book;

pub use lot_queue::LotQueue;
pub use position_book::PositionBook;
