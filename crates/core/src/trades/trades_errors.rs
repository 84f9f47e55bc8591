//! Error types for trade validation.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating a single trade record.
///
/// These never abort an aggregation run: the aggregator records the
/// offending trade in position history, emits a diagnostics warning, and
/// skips the trade's quantity/amount accumulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    #[error("unrecognized trade side '{0}', expected 'buy' or 'sell'")]
    InvalidTradeKind(String),

    #[error("negative quantity {quantity} on trade {trade_id}")]
    NegativeQuantity { trade_id: String, quantity: Decimal },

    #[error("negative amount {amount} on trade {trade_id}")]
    NegativeAmount { trade_id: String, amount: Decimal },
}
