use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Quantity value - uses Decimal for precision
/// Always a magnitude; the sign carries no meaning in order flow
pub type Quantity = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Identity key for a market participant, opaque to the domain
pub type CompanyId = String;
