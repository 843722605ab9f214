//! Trade-log CSV ingestion
//!
//! Expected layout: a header line followed by one
//! `timestamp,symbol,side,price,quantity` row per trade. Every field is
//! validated strictly; a malformed row is skipped with a warning and
//! counted, and the run continues.
//!
//! Some feeds emit the header and the first rows space-joined on a single
//! line. The tail of the first line is therefore split on spaces and each
//! piece parsed as a row; the header token itself is discarded.

use std::str::FromStr;
use thiserror::Error;
use types::errors::TradeError;
use types::numeric::{Price, Quantity};
use types::trade::{Side, Trade};

/// Row-level parse failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected 5 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error(transparent)]
    Invalid(#[from] TradeError),
}

/// Outcome of parsing one input file
#[derive(Debug, Clone, Default)]
pub struct ParsedTrades {
    pub trades: Vec<Trade>,
    /// Count of malformed rows that were skipped
    pub skipped: usize,
}

/// Parse one data row
pub fn parse_row(line: &str) -> Result<Trade, RowError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 5 {
        return Err(RowError::FieldCount {
            found: fields.len(),
        });
    }

    let timestamp: i64 = fields[0]
        .trim()
        .parse()
        .map_err(|_| RowError::InvalidTimestamp(fields[0].to_string()))?;
    let symbol = fields[1].trim();
    let side = Side::from_str(fields[2].trim())?;
    let price = Price::from_str(fields[3].trim())?;
    let quantity = Quantity::from_str(fields[4].trim())?;

    Ok(Trade::new(timestamp, symbol, side, price, quantity)?)
}

/// Parse a full trade log
pub fn parse_trades(input: &str) -> ParsedTrades {
    let mut parsed = ParsedTrades::default();
    let mut lines = input.lines();

    let Some(first) = lines.next() else {
        return parsed;
    };

    // Rows crammed onto the header line, if any; the header token itself
    // is discarded. Only the first line gets this treatment.
    let header_tail = first.split(' ').filter(|piece| !piece.is_empty()).skip(1);
    let rest = lines.filter(|line| !line.trim().is_empty());

    for row in header_tail.chain(rest) {
        match parse_row(row) {
            Ok(trade) => parsed.trades.push(trade),
            Err(error) => {
                tracing::warn!(row, %error, "skipping malformed trade row");
                parsed.skipped += 1;
            }
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row() {
        let trade = parse_row("101,TFS,B,11.00,15").unwrap();
        assert_eq!(trade.timestamp, 101);
        assert_eq!(trade.symbol, "TFS");
        assert_eq!(trade.side, Side::BUY);
        assert_eq!(trade.quantity.get(), 15);
    }

    #[test]
    fn test_parse_row_missing_fields() {
        assert!(matches!(
            parse_row("101,TFS,B,11.00"),
            Err(RowError::FieldCount { found: 4 })
        ));
    }

    #[test]
    fn test_parse_row_bad_side() {
        assert!(matches!(
            parse_row("101,TFS,X,11.00,15"),
            Err(RowError::Invalid(TradeError::InvalidSide(_)))
        ));
    }

    #[test]
    fn test_parse_row_non_positive_quantity() {
        assert!(parse_row("101,TFS,B,11.00,0").is_err());
        assert!(parse_row("101,TFS,B,11.00,-5").is_err());
    }

    #[test]
    fn test_parse_row_non_positive_price() {
        assert!(parse_row("101,TFS,B,0,15").is_err());
        assert!(parse_row("101,TFS,B,-2.50,15").is_err());
    }

    #[test]
    fn test_parse_trades_clean_file() {
        let input = "TIMESTAMP,SYMBOL,SIDE,PRICE,QUANTITY\n\
                     101,TFS,B,11.00,15\n\
                     102,TFS,S,12.00,15\n";
        let parsed = parse_trades(input);
        assert_eq!(parsed.trades.len(), 2);
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn test_parse_trades_skips_bad_rows() {
        let input = "TIMESTAMP,SYMBOL,SIDE,PRICE,QUANTITY\n\
                     101,TFS,B,11.00,15\n\
                     bogus line\n\
                     102,TFS,Q,12.00,15\n\
                     103,TFS,S,12.00,15\n";
        let parsed = parse_trades(input);
        assert_eq!(parsed.trades.len(), 2);
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn test_parse_trades_space_joined_header_line() {
        // Header and first rows arriving on one space-joined line.
        let input = "TIMESTAMP,SYMBOL,SIDE,PRICE,QUANTITY 101,TFS,B,11.00,15 102,TFS,S,12.00,15\n\
                     103,TFS,B,10.00,5\n";
        let parsed = parse_trades(input);
        assert_eq!(parsed.trades.len(), 3);
        assert_eq!(parsed.trades[0].timestamp, 101);
        assert_eq!(parsed.trades[2].timestamp, 103);
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn test_parse_trades_empty_input() {
        let parsed = parse_trades("");
        assert!(parsed.trades.is_empty());
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn test_parse_trades_blank_lines_ignored() {
        let input = "TIMESTAMP,SYMBOL,SIDE,PRICE,QUANTITY\n\n101,TFS,B,11.00,15\n\n";
        let parsed = parse_trades(input);
        assert_eq!(parsed.trades.len(), 1);
        assert_eq!(parsed.skipped, 0);
    }
}
