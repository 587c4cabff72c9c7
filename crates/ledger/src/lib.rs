//! Argus Ledger - Order Feed Loading
//!
//! Turns a raw order feed into the immutable per-company ledgers the
//! surveillance core consumes:
//!
//! - **Record parsing**: one comma-separated record per line, fields
//!   normalized into domain types
//! - **Feed reading**: whole-feed parsing from a string or a file
//! - **Ledger building**: partitioning events by company, preserving
//!   source order within each company
//!
//! Loading is all-or-nothing: the first unreadable or malformed record
//! aborts the load with a [`LedgerError`]. There is no partial result to
//! fall back on.

pub mod builder;
pub mod error;
pub mod feed;
mod record;

pub use builder::{LedgerBuilder, load_ledgers};
pub use error::{LedgerError, LedgerResult};
pub use feed::{parse_feed, read_order_feed};
