//! Aggregate cancellation queries over a ledger partition

use std::collections::HashSet;

use argus_core::{CompanyId, CompanyLedgers};
use log::debug;

use crate::config::CancellationConfig;
use crate::evaluator::CancellationEvaluator;

/// Read-only aggregate queries over the full per-company verdict set
pub trait CancellationSurveillance {
    /// Every company whose order flow evaluates as excessive
    fn companies_involved_in_excessive_cancellations(&self) -> HashSet<CompanyId>;

    /// Count of companies whose order flow does not
    fn total_number_of_well_behaved_companies(&self) -> usize;
}

/// Applies the window evaluator across an immutable ledger partition
///
/// The partition is built once, up front; both queries then re-derive
/// their answer from it, each company judged independently.
pub struct CancellationMonitor {
    ledgers: CompanyLedgers,
    evaluator: CancellationEvaluator,
}

impl CancellationMonitor {
    /// Monitor a ledger partition with the default configuration
    pub fn new(ledgers: CompanyLedgers) -> Self {
        Self::with_config(ledgers, CancellationConfig::default())
    }

    pub fn with_config(ledgers: CompanyLedgers, config: CancellationConfig) -> Self {
        Self {
            ledgers,
            evaluator: CancellationEvaluator::new(config),
        }
    }

    /// Verdict for one company, if present in the partition
    pub fn is_excessive(&self, company: &str) -> Option<bool> {
        self.ledgers
            .get(company)
            .map(|ledger| self.evaluator.evaluate(ledger))
    }

    /// Number of companies in the partition
    pub fn company_count(&self) -> usize {
        self.ledgers.len()
    }
}

impl CancellationSurveillance for CancellationMonitor {
    fn companies_involved_in_excessive_cancellations(&self) -> HashSet<CompanyId> {
        self.ledgers
            .iter()
            .filter(|(_, ledger)| self.evaluator.evaluate(ledger))
            .map(|(company, _)| {
                debug!("company '{}' flagged for excessive cancellations", company);
                company.clone()
            })
            .collect()
    }

    fn total_number_of_well_behaved_companies(&self) -> usize {
        self.ledgers
            .values()
            .filter(|ledger| !self.evaluator.evaluate(ledger))
            .count()
    }
}
