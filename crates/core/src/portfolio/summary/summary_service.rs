//! Portfolio summary service.

use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, TOP_HOLDINGS_COUNT};
use crate::fx::FixedRateConverter;
use crate::portfolio::positions::Position;
use crate::portfolio::summary::{
    ApproximateBaseTotals, DimensionTally, PortfolioSummary, TopHolding,
};

/// Service trait for portfolio summaries.
pub trait SummaryServiceTrait: Send + Sync {
    /// Derives the portfolio snapshot from the active holdings.
    fn summarize(&self, active_holdings: &[Position]) -> PortfolioSummary;
}

/// Computes portfolio totals, breakdowns, and the top-holdings ranking.
#[derive(Debug, Clone, Default)]
pub struct SummaryService {
    fx: FixedRateConverter,
}

impl SummaryService {
    pub fn new() -> Self {
        Self {
            fx: FixedRateConverter::new(),
        }
    }
}

impl SummaryServiceTrait for SummaryService {
    fn summarize(&self, active_holdings: &[Position]) -> PortfolioSummary {
        let mut total_cost_basis_value = Decimal::ZERO;
        let mut total_market_value = Decimal::ZERO;
        let mut base_cost_basis = Decimal::ZERO;
        let mut base_market = Decimal::ZERO;
        let mut by_region: BTreeMap<String, DimensionTally> = BTreeMap::new();
        let mut by_currency: BTreeMap<String, DimensionTally> = BTreeMap::new();
        let mut by_account: BTreeMap<String, DimensionTally> = BTreeMap::new();

        for holding in active_holdings {
            total_cost_basis_value += holding.cost_basis_value;
            total_market_value += holding.market_value;
            base_cost_basis += self
                .fx
                .to_base(holding.cost_basis_value, &holding.currency);
            base_market += self.fx.to_base(holding.market_value, &holding.currency);

            tally(&mut by_region, &holding.region, holding);
            tally(&mut by_currency, &holding.currency, holding);
            for account in &holding.accounts {
                tally(&mut by_account, account, holding);
            }
        }

        let mut ranked: Vec<&Position> = active_holdings.iter().collect();
        ranked.sort_by(|a, b| b.cost_basis_value.cmp(&a.cost_basis_value));

        let top_holdings = ranked
            .into_iter()
            .take(TOP_HOLDINGS_COUNT)
            .map(|holding| {
                let percentage = if total_cost_basis_value > Decimal::ZERO {
                    (holding.cost_basis_value / total_cost_basis_value * Decimal::from(100))
                        .round_dp(DISPLAY_DECIMAL_PRECISION)
                } else {
                    Decimal::ZERO
                };
                TopHolding {
                    key: holding.key.clone(),
                    name: holding.name.clone(),
                    cost_basis_value: holding.cost_basis_value,
                    market_value: holding.market_value,
                    percentage,
                }
            })
            .collect();

        debug!(
            "Summarized {} active holdings, total cost basis {}",
            active_holdings.len(),
            total_cost_basis_value
        );

        PortfolioSummary {
            holding_count: active_holdings.len(),
            total_cost_basis_value,
            total_market_value,
            unrealized_gain: total_market_value - total_cost_basis_value,
            by_region,
            by_currency,
            by_account,
            top_holdings,
            approximate_base_totals: ApproximateBaseTotals {
                currency: self.fx.base_currency().to_string(),
                cost_basis_value: base_cost_basis,
                market_value: base_market,
            },
        }
    }
}

fn tally(buckets: &mut BTreeMap<String, DimensionTally>, key: &str, holding: &Position) {
    let bucket = buckets
        .entry(key.to_string())
        .or_insert_with(DimensionTally::zero);
    bucket.count += 1;
    bucket.cost_basis_value += holding.cost_basis_value;
    bucket.market_value += holding.market_value;
}
