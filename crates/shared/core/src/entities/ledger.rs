use std::collections::HashMap;

use super::OrderEvent;
use crate::values::CompanyId;

/// Ordered event sequence for one company, preserving source order
pub type CompanyLedger = Vec<OrderEvent>;

/// Immutable per-company partition of an order feed
///
/// Built once by the ledger builder before any query runs; evaluations
/// only ever read it.
pub type CompanyLedgers = HashMap<CompanyId, CompanyLedger>;
