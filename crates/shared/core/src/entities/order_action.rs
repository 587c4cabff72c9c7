use serde::{Deserialize, Serialize};

/// What an order-flow event does to a company's standing order volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderAction {
    /// Places new quantity onto the market
    New,
    /// Removes previously placed quantity
    Cancel,
    /// Unrecognized action code, carried through but never aggregated
    Other,
}

impl OrderAction {
    /// Returns true for a cancellation
    pub fn is_cancel(&self) -> bool {
        matches!(self, OrderAction::Cancel)
    }
}
