//! Realized-PnL report tool
//!
//! Usage: `pnl-report <csv_file> <fifo|lifo>`
//!
//! Reads an ordered trade log, runs it through the accounting engine under
//! the selected scheme, and prints the realized-PnL report to stdout.

mod csv;
mod render;

use anyhow::{bail, Context};
use pnl_engine::MatchingEngine;
use types::scheme::AccountingScheme;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <csv_file> <fifo|lifo>", args[0]);
        std::process::exit(1);
    }

    let scheme: AccountingScheme = args[2].parse()?;
    let input = std::fs::read_to_string(&args[1])
        .with_context(|| format!("could not read trade log {}", args[1]))?;

    let parsed = csv::parse_trades(&input);
    if parsed.skipped > 0 {
        tracing::warn!(skipped = parsed.skipped, "malformed rows were skipped");
    }
    if parsed.trades.is_empty() {
        bail!("no trades found in {}", args[1]);
    }

    tracing::info!(
        trades = parsed.trades.len(),
        %scheme,
        "processing trade log"
    );

    let mut engine = MatchingEngine::new(scheme);
    let results = engine.process_trades(&parsed.trades);

    print!("{}", render::render(&results));

    Ok(())
}
