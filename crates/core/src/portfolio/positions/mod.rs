//! Position aggregation - folding the trade feed into per-instrument state.

mod aggregation_service;
mod positions_model;


#[cfg(test)]
mod positions_model_tests;

pub use aggregation_service::{
    AggregationDiagnostics, AggregationOutput, AggregationServiceTrait, AggregationWarning,
    PositionAggregator,
};
pub use positions_model::{Position, PositionBook};
