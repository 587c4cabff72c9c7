use argus_ledger::LedgerError;
use thiserror::Error;

/// Errors surfaced by a scan
#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("evaluation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
