//! Allocation models for sector breakdowns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::portfolio::positions::Position;
use crate::trades::InstrumentKey;

/// Brief holding reference carried inside allocation groupings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingBrief {
    pub key: InstrumentKey,
    pub name: String,
    pub market_value: Decimal,
}

impl HoldingBrief {
    pub fn for_position(position: &Position) -> Self {
        HoldingBrief {
            key: position.key.clone(),
            name: position.name.clone(),
            market_value: position.market_value,
        }
    }
}

/// Aggregate exposure to one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocationEntry {
    pub sector: String,
    pub count: usize,
    pub value: Decimal,
    /// Share of the portfolio total, 0-100. 0 when the grand total is 0.
    pub percentage: Decimal,
    pub holdings: Vec<HoldingBrief>,
}

/// Diversification rating derived from the concentration index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Herfindahl-Hirschman style concentration measure over the sector
/// allocation. A single-sector portfolio scores 10000.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationRisk {
    pub index: Decimal,
    pub level: RiskLevel,
}

/// One cell of the region/sector cross-tabulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSectorCell {
    pub count: usize,
    pub value: Decimal,
    pub holdings: Vec<HoldingBrief>,
}

/// Region-first, sector-second cross-tabulation of the classified holdings.
pub type RegionSectorMatrix = BTreeMap<String, BTreeMap<String, RegionSectorCell>>;
