//! Portfolio summary - stateless snapshot over the active holdings.

mod summary_model;
mod summary_service;

#[cfg(test)]
mod summary_service_tests;

pub use summary_model::{ApproximateBaseTotals, DimensionTally, PortfolioSummary, TopHolding};
pub use summary_service::{SummaryService, SummaryServiceTrait};
