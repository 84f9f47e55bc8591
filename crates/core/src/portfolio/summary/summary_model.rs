//! Portfolio summary models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::trades::InstrumentKey;

/// Per-dimension breakdown bucket (region, currency, or account).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionTally {
    pub count: usize,
    pub cost_basis_value: Decimal,
    pub market_value: Decimal,
}

impl DimensionTally {
    pub fn zero() -> Self {
        DimensionTally {
            count: 0,
            cost_basis_value: Decimal::ZERO,
            market_value: Decimal::ZERO,
        }
    }
}

/// One entry of the ranked top-holdings view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHolding {
    pub key: InstrumentKey,
    pub name: String,
    pub cost_basis_value: Decimal,
    pub market_value: Decimal,
    /// Share of the portfolio cost basis, 0-100. 0 when the total is 0.
    pub percentage: Decimal,
}

/// Portfolio totals converted into the base currency at the fixed
/// approximate rate. Indicative only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproximateBaseTotals {
    pub currency: String,
    pub cost_basis_value: Decimal,
    pub market_value: Decimal,
}

/// Derived, stateless snapshot over a set of active holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub holding_count: usize,
    pub total_cost_basis_value: Decimal,
    pub total_market_value: Decimal,
    /// `total_market_value - total_cost_basis_value`.
    pub unrealized_gain: Decimal,
    pub by_region: BTreeMap<String, DimensionTally>,
    pub by_currency: BTreeMap<String, DimensionTally>,
    /// A position with several account labels contributes its full value to
    /// each of them.
    pub by_account: BTreeMap<String, DimensionTally>,
    pub top_holdings: Vec<TopHolding>,
    pub approximate_base_totals: ApproximateBaseTotals,
}
