//! Report rendering
//!
//! Serializes result records as `TIMESTAMP,SYMBOL,PNL` rows with fixed
//! two-decimal precision. Near-zero values are clamped to exactly zero at
//! display time only; the underlying records keep full precision.

use rust_decimal::Decimal;
use std::fmt::Write;
use types::pnl::PnlRecord;

/// Threshold below which a displayed PnL collapses to 0.00
fn near_zero() -> Decimal {
    Decimal::new(1, 9) // 1e-9
}

/// Render the full report, header included
pub fn render(records: &[PnlRecord]) -> String {
    let mut out = String::from("TIMESTAMP,SYMBOL,PNL\n");
    for record in records {
        let display = if record.pnl.abs() < near_zero() {
            Decimal::ZERO
        } else {
            record.pnl
        };
        let _ = writeln!(
            out,
            "{},{},{:.2}",
            record.timestamp,
            record.symbol,
            display.round_dp(2)
        );
    }
    out
}
