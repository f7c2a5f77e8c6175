//! `stockshift-cli` — runs the advisory engine over a JSON snapshot.
//!
//! The only StockShift crate that touches the outside world (environment,
//! files, stdout). Everything it calls is pure.

pub mod config;
pub mod report;

pub use config::AdvisorConfig;
pub use report::{AdvisorInput, AdvisorReport, build_report};
