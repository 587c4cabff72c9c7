//! Cancellation Window Evaluator
//!
//! The detection core: a variable-length, time-bounded window slides left
//! to right over one company's event sequence. Each event enters the
//! running totals exactly once, when it becomes the right edge, and leaves
//! exactly once, when the left edge passes it, so a full traversal is
//! amortized linear regardless of how windows overlap.

use argus_core::{OrderAction, OrderEvent, Quantity};
use rust_decimal::Decimal;

use crate::config::CancellationConfig;

/// Working state of one traversal: window cursors plus running totals
/// restricted to window-internal events
#[derive(Debug)]
struct WindowState {
    start: usize,
    end: usize,
    placed: Quantity,
    cancelled: Quantity,
}

impl WindowState {
    fn seed(first: &OrderEvent) -> Self {
        let mut state = Self {
            start: 0,
            end: 0,
            placed: Decimal::ZERO,
            cancelled: Decimal::ZERO,
        };
        state.admit(first);
        state
    }

    /// Fold a newly included event into the totals
    fn admit(&mut self, event: &OrderEvent) {
        match event.action {
            OrderAction::New => self.placed += event.quantity,
            OrderAction::Cancel => self.cancelled += event.quantity,
            OrderAction::Other => {}
        }
    }

    /// Remove a departing event from the totals
    fn evict(&mut self, event: &OrderEvent) {
        match event.action {
            OrderAction::New => self.placed -= event.quantity,
            OrderAction::Cancel => self.cancelled -= event.quantity,
            OrderAction::Other => {}
        }
    }
}

/// Decides whether one company's order flow is excessively cancel-heavy
#[derive(Debug, Clone, Default)]
pub struct CancellationEvaluator {
    config: CancellationConfig,
}

impl CancellationEvaluator {
    pub fn new(config: CancellationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CancellationConfig {
        &self.config
    }

    /// Evaluate one company's ledger
    ///
    /// The ledger must be time-sorted; this is not checked, and no verdict
    /// is promised for unsorted input. A single-event ledger is excessive
    /// exactly when that event is a cancellation, whatever its quantity; an
    /// empty ledger is never excessive.
    ///
    /// When the next event would stretch the window past the configured
    /// length, the ratio is tested against the totals as they stand -
    /// before that event is admitted - and only then is the window extended
    /// and its left edge repaired. Swapping that order changes which
    /// snapshot gets judged, so the ordering is part of this method's
    /// contract, pinned by tests.
    pub fn evaluate(&self, ledger: &[OrderEvent]) -> bool {
        match ledger {
            [] => false,
            [only] => only.action.is_cancel(),
            _ => self.scan(ledger),
        }
    }

    fn scan(&self, ledger: &[OrderEvent]) -> bool {
        let threshold = &self.config.threshold;
        let mut window = WindowState::seed(&ledger[0]);

        while window.end + 1 < ledger.len() {
            let gap = ledger[window.end + 1].timestamp - ledger[window.start].timestamp;

            if gap > self.config.window {
                // A candidate window closes; judge it before extending.
                if threshold.breached(window.cancelled, window.placed) {
                    return true;
                }

                window.end += 1;
                window.admit(&ledger[window.end]);

                // Repair the left edge against the new right-edge event.
                while ledger[window.end].timestamp - ledger[window.start].timestamp
                    > self.config.window
                {
                    window.evict(&ledger[window.start]);
                    window.start += 1;
                }
            } else {
                window.end += 1;
                window.admit(&ledger[window.end]);
            }
        }

        threshold.breached(window.cancelled, window.placed)
    }
}
