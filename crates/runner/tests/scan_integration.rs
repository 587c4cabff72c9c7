//! Integration test: feed file -> ledgers -> verdicts
//!
//! Exercises the full path the runner wires together, and cross-checks the
//! scan results against the monitor's aggregate queries.

use std::io::Write;

use argus_ledger::load_ledgers;
use argus_runner::{ScanConfig, run_scan};
use argus_surveillance::{CancellationMonitor, CancellationSurveillance};
use tempfile::NamedTempFile;

fn three_company_feed() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    // Heavy traders cancel 40 of 100 inside ten seconds
    writeln!(file, "2015-02-28 08:00:00,Heavy traders,D,100").unwrap();
    writeln!(file, "2015-02-28 08:00:10,Heavy traders,F,40").unwrap();
    // A lone cancellation with no matching order
    writeln!(file, "2015-02-28 08:00:05,Lone cancellers,F,5").unwrap();
    // Steady traders stay at 20 of 100
    writeln!(file, "2015-02-28 08:00:01,Steady traders,D,100").unwrap();
    writeln!(file, "2015-02-28 08:00:11,Steady traders,F,20").unwrap();
    file
}

#[tokio::test]
async fn scan_flags_heavy_cancellers_and_counts_the_rest() {
    let _ = env_logger::try_init();
    let feed = three_company_feed();

    let results = run_scan(ScanConfig::new(feed.path())).await.unwrap();

    assert_eq!(results.companies_scanned, 3);
    assert_eq!(results.flagged_companies.len(), 2);
    assert!(results.flagged_companies.contains("Heavy traders"));
    assert!(results.flagged_companies.contains("Lone cancellers"));
    assert_eq!(results.well_behaved_companies, 1);
}

#[tokio::test]
async fn scan_agrees_with_the_monitor_queries() {
    let _ = env_logger::try_init();
    let feed = three_company_feed();

    let results = run_scan(ScanConfig::new(feed.path())).await.unwrap();

    let monitor = CancellationMonitor::new(load_ledgers(feed.path()).unwrap());
    assert_eq!(
        results.flagged_companies,
        monitor.companies_involved_in_excessive_cancellations()
    );
    assert_eq!(
        results.well_behaved_companies,
        monitor.total_number_of_well_behaved_companies()
    );
}

#[tokio::test]
async fn malformed_feed_is_a_terminal_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "2015-02-28 08:00:00,Heavy traders,D,100").unwrap();
    writeln!(file, "not a record at all").unwrap();

    let err = run_scan(ScanConfig::new(file.path())).await.unwrap_err();
    assert!(err.to_string().contains("line 2"));
}
