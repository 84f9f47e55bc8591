//! Sectorfolio Core - trade aggregation and sector classification.
//!
//! This crate folds a raw buy/sell trade feed into per-instrument positions
//! (net quantity, average-cost basis, trade history) and derives portfolio
//! summaries, sector allocations, and a concentration-risk score. It is
//! storage-agnostic and synchronous: persistence of the override table is
//! behind a trait implemented by the host, and every transform is a bounded
//! fold over an in-memory batch.
//!
//! Known caveats, preserved from the upstream feed semantics:
//! - Non-JP/non-US instruments group by display name, so distinct
//!   instruments sharing a name silently merge.
//! - Market value is a placeholder derived from the most-recently-seen
//!   trade price, pending a real pricing feed.

pub mod classification;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod portfolio;
pub mod trades;

// Re-export common types from the trade, portfolio, and classification modules
pub use classification::*;
pub use portfolio::*;
pub use trades::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
