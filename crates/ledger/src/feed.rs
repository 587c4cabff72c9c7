//! Whole-feed parsing from strings and files

use std::path::Path;

use argus_core::OrderEvent;

use crate::error::{LedgerError, LedgerResult};
use crate::record::parse_record;

/// Parse a complete order feed
///
/// Blank lines are skipped; line numbers in errors count from 1 and include
/// skipped lines, so they match what an editor shows.
pub fn parse_feed(input: &str) -> LedgerResult<Vec<OrderEvent>> {
    let mut events = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        events.push(parse_record(line, idx + 1)?);
    }
    Ok(events)
}

/// Read and parse an order feed file
pub fn read_order_feed(path: impl AsRef<Path>) -> LedgerResult<Vec<OrderEvent>> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|source| LedgerError::Io {
        path: path.as_ref().display().to_string(),
        source,
    })?;
    parse_feed(&content)
}
