//! Position aggregation service.

use log::{debug, warn};
use serde::Serialize;
use std::fmt;

use crate::portfolio::positions::{Position, PositionBook};
use crate::trades::{InstrumentKey, TradeRecord};

/// A per-trade problem encountered during aggregation.
///
/// The offending trade stays in position history; only its quantity/amount
/// contribution is skipped.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationWarning {
    pub trade_id: String,
    pub instrument_key: InstrumentKey,
    pub message: String,
}

impl fmt::Display for AggregationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trade {} ({}): {}",
            self.trade_id, self.instrument_key, self.message
        )
    }
}

/// Counters and warnings for one aggregation run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationDiagnostics {
    pub trades_processed: usize,
    pub malformed_trades: usize,
    pub warnings: Vec<AggregationWarning>,
}

/// The position book plus the diagnostics gathered while building it.
#[derive(Debug, Clone)]
pub struct AggregationOutput {
    pub book: PositionBook,
    pub diagnostics: AggregationDiagnostics,
}

/// Service trait for position aggregation.
pub trait AggregationServiceTrait: Send + Sync {
    /// Folds the full trade feed into per-instrument positions.
    ///
    /// Net totals are order-independent sums; input order only drives the
    /// first/last date bookkeeping and the placeholder market value. Never
    /// fails: malformed trades are absorbed into the diagnostics.
    fn aggregate(&self, trades: &[TradeRecord]) -> AggregationOutput;

    /// Positions with open quantity and positive cost basis.
    fn select_active_holdings(&self, book: &PositionBook) -> Vec<Position>;
}

/// Stateless aggregator over in-memory trade batches. Re-running the full
/// batch is the only consistency mechanism; there is no incremental path.
#[derive(Debug, Clone, Default)]
pub struct PositionAggregator;

impl PositionAggregator {
    pub fn new() -> Self {
        PositionAggregator
    }
}

impl AggregationServiceTrait for PositionAggregator {
    fn aggregate(&self, trades: &[TradeRecord]) -> AggregationOutput {
        let mut book = PositionBook::new();
        let mut diagnostics = AggregationDiagnostics::default();

        for trade in trades {
            diagnostics.trades_processed += 1;
            let position = book.entry_for_trade(trade);
            if let Err(e) = position.apply_trade(trade) {
                let warning = AggregationWarning {
                    trade_id: trade.transaction_id.clone(),
                    instrument_key: position.key.clone(),
                    message: e.to_string(),
                };
                warn!("{}", warning);
                diagnostics.malformed_trades += 1;
                diagnostics.warnings.push(warning);
            }
        }

        debug!(
            "Aggregated {} trades into {} positions ({} malformed)",
            diagnostics.trades_processed,
            book.len(),
            diagnostics.malformed_trades
        );
        AggregationOutput { book, diagnostics }
    }

    fn select_active_holdings(&self, book: &PositionBook) -> Vec<Position> {
        book.iter().filter(|p| p.is_active()).cloned().collect()
    }
}
