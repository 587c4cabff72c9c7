//! Argus Surveillance - Excessive Cancellation Detection
//!
//! Decides, per company, whether cancelled order volume is excessive
//! relative to newly placed volume inside any rolling time window:
//!
//! - **Evaluator**: two-cursor sliding window over one company's
//!   chronological event sequence, with incrementally maintained totals
//!   and a strict ratio decision
//! - **Monitor**: applies the evaluator across the full per-company
//!   partition and answers the two aggregate queries
//! - **Config**: window length and ratio limit, with JSON file loading
//!
//! ```text
//! Order Feed ──► Ledger Builder ──► CompanyLedgers
//!                                        │ per company
//!                                        ▼
//!                              CancellationEvaluator ──► bool verdict
//!                                        │
//!                                        ▼
//!                              CancellationMonitor ──► flagged set,
//!                                                      well-behaved count
//! ```
//!
//! Evaluation is pure and per-company: one company's verdict never reads
//! another company's state, so callers may fan evaluations out freely.

pub mod config;
pub mod evaluator;
pub mod monitor;

// Re-export main types
pub use config::{CancellationConfig, ConfigError, RatioThreshold};
pub use evaluator::CancellationEvaluator;
pub use monitor::{CancellationMonitor, CancellationSurveillance};
