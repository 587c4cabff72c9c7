//! Argus Runner - Order Feed Scanning
//!
//! Orchestrates a full surveillance pass over one order feed:
//!
//! ```text
//! feed file ──► argus-ledger ──► CompanyLedgers
//!                                     │ one task per company
//!                                     ▼
//!                          CancellationEvaluator
//!                                     │
//!                                     ▼
//!                               ScanResults
//! ```
//!
//! Company evaluations are independent and pure, so the runner fans them
//! out across blocking tasks. A load failure aborts the whole scan; there
//! is no partial result.

pub mod error;
pub mod scan;

// Re-export main types
pub use error::ScanError;
pub use scan::{ScanConfig, ScanResults, run_scan};
