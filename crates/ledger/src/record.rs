//! Single-record parsing and field normalization

use std::str::FromStr;

use argus_core::{OrderAction, OrderEvent};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};

/// Feed timestamps are wall-clock UTC, with optional fractional seconds
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Action code for a newly placed order
const CODE_NEW: &str = "D";
/// Action code for a cancellation
const CODE_CANCEL: &str = "F";

/// Parse one feed record: `timestamp,company,action,quantity`
///
/// Field count, timestamp, and quantity are validated here; the action code
/// is not. An unrecognized code maps to [`OrderAction::Other`] so that the
/// record still occupies its place in the company's sequence.
pub(crate) fn parse_record(line: &str, line_no: usize) -> LedgerResult<OrderEvent> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(malformed(
            line_no,
            format!("expected 4 fields, found {}", fields.len()),
        ));
    }

    let timestamp = NaiveDateTime::parse_from_str(fields[0].trim(), TIMESTAMP_FORMAT)
        .map_err(|e| malformed(line_no, format!("bad timestamp '{}': {}", fields[0].trim(), e)))?
        .and_utc();

    let company = fields[1].trim();
    if company.is_empty() {
        return Err(malformed(line_no, "empty company name".to_string()));
    }

    let action = match fields[2].trim() {
        CODE_NEW => OrderAction::New,
        CODE_CANCEL => OrderAction::Cancel,
        _ => OrderAction::Other,
    };

    let quantity = Decimal::from_str(fields[3].trim())
        .map_err(|e| malformed(line_no, format!("bad quantity '{}': {}", fields[3].trim(), e)))?;
    if quantity.is_sign_negative() {
        return Err(malformed(
            line_no,
            format!("negative quantity '{}'", quantity),
        ));
    }

    Ok(OrderEvent::new(timestamp, company, action, quantity))
}

fn malformed(line: usize, reason: String) -> LedgerError {
    LedgerError::MalformedRecord { line, reason }
}
