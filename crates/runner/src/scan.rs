//! Order-feed scan orchestration

use std::collections::HashSet;
use std::path::PathBuf;

use argus_core::CompanyId;
use argus_ledger::load_ledgers;
use argus_surveillance::{CancellationConfig, CancellationEvaluator};
use log::info;

use crate::error::ScanError;

/// Configuration for one scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Order feed to scan
    pub feed_path: PathBuf,
    /// Detection settings
    pub surveillance: CancellationConfig,
}

impl ScanConfig {
    /// Scan a feed with the default detection settings
    pub fn new(feed_path: impl Into<PathBuf>) -> Self {
        Self {
            feed_path: feed_path.into(),
            surveillance: CancellationConfig::default(),
        }
    }

    /// Override the detection settings
    pub fn with_surveillance(mut self, surveillance: CancellationConfig) -> Self {
        self.surveillance = surveillance;
        self
    }
}

/// Outcome of one scan
#[derive(Debug, Clone)]
pub struct ScanResults {
    /// Companies flagged for excessive cancellations
    pub flagged_companies: HashSet<CompanyId>,
    /// Companies that came through clean
    pub well_behaved_companies: usize,
    /// Every company seen in the feed
    pub companies_scanned: usize,
}

/// Load an order feed and evaluate every company in it
///
/// The load and each company's evaluation run on blocking tasks. Each
/// evaluation owns its company's ledger and its own evaluator, so the
/// fan-out shares nothing mutable.
pub async fn run_scan(config: ScanConfig) -> Result<ScanResults, ScanError> {
    let feed_path = config.feed_path.clone();
    let ledgers = tokio::task::spawn_blocking(move || load_ledgers(&feed_path)).await??;

    let companies_scanned = ledgers.len();
    let mut handles = Vec::with_capacity(companies_scanned);
    for (company, ledger) in ledgers {
        let evaluator = CancellationEvaluator::new(config.surveillance.clone());
        handles.push(tokio::task::spawn_blocking(move || {
            (company, evaluator.evaluate(&ledger))
        }));
    }

    let mut flagged_companies = HashSet::new();
    for handle in handles {
        let (company, excessive) = handle.await?;
        if excessive {
            flagged_companies.insert(company);
        }
    }

    let well_behaved_companies = companies_scanned - flagged_companies.len();
    info!(
        "scan of '{}' complete: {} companies, {} flagged, {} well behaved",
        config.feed_path.display(),
        companies_scanned,
        flagged_companies.len(),
        well_behaved_companies
    );

    Ok(ScanResults {
        flagged_companies,
        well_behaved_companies,
        companies_scanned,
    })
}
