use serde::{Deserialize, Serialize};

use super::OrderAction;
use crate::values::{CompanyId, Quantity, Timestamp};

/// One order-flow action by one company
///
/// Events for a company are assumed chronological in source order; nothing
/// in the domain re-sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEvent {
    pub timestamp: Timestamp,
    pub company: CompanyId,
    pub action: OrderAction,
    /// Non-negative volume attributed to exactly one running total
    /// depending on `action`
    pub quantity: Quantity,
}

impl OrderEvent {
    pub fn new(
        timestamp: Timestamp,
        company: impl Into<CompanyId>,
        action: OrderAction,
        quantity: Quantity,
    ) -> Self {
        Self {
            timestamp,
            company: company.into(),
            action,
            quantity,
        }
    }
}
