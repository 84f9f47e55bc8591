//! Service for sector allocation and concentration risk.

use log::debug;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::constants::{
    CONCENTRATION_HIGH_THRESHOLD, CONCENTRATION_MEDIUM_THRESHOLD, TOP_SECTORS_COUNT,
};
use crate::portfolio::allocation::{
    ConcentrationRisk, HoldingBrief, RegionSectorCell, RegionSectorMatrix, RiskLevel,
    SectorAllocationEntry,
};
use crate::portfolio::positions::Position;

/// Service trait for allocation views over classified holdings.
pub trait AllocationServiceTrait: Send + Sync {
    /// Groups holdings by sector, sorted descending by value. Percentages
    /// are shares of the grand total (0 when the total is 0) and are kept
    /// unrounded so they sum back to 100.
    fn allocation(&self, classified: &[Position]) -> Vec<SectorAllocationEntry>;

    /// The top sectors of an allocation, without re-deriving it.
    fn top_sectors(&self, allocation: &[SectorAllocationEntry]) -> Vec<SectorAllocationEntry>;

    /// Concentration index over the allocation: sum of squared percentage
    /// shares. Thresholds are fixed policy, not derived.
    fn concentration_risk(&self, allocation: &[SectorAllocationEntry]) -> ConcentrationRisk;

    /// Region-first, sector-second cross-tabulation.
    fn region_sector_matrix(&self, classified: &[Position]) -> RegionSectorMatrix;
}

/// Stateless allocation calculator.
#[derive(Debug, Clone, Default)]
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        AllocationService
    }
}

impl AllocationServiceTrait for AllocationService {
    fn allocation(&self, classified: &[Position]) -> Vec<SectorAllocationEntry> {
        // BTreeMap accumulation keeps equal-value sectors in stable
        // alphabetical order after the value sort.
        let mut groups: BTreeMap<String, (usize, Decimal, Vec<HoldingBrief>)> = BTreeMap::new();
        let mut grand_total = Decimal::ZERO;

        for position in classified {
            grand_total += position.market_value;
            let group = groups
                .entry(position.sector_label().to_string())
                .or_insert_with(|| (0, Decimal::ZERO, Vec::new()));
            group.0 += 1;
            group.1 += position.market_value;
            group.2.push(HoldingBrief::for_position(position));
        }

        let mut entries: Vec<SectorAllocationEntry> = groups
            .into_iter()
            .map(|(sector, (count, value, holdings))| {
                let percentage = if grand_total > Decimal::ZERO {
                    value / grand_total * Decimal::from(100)
                } else {
                    Decimal::ZERO
                };
                SectorAllocationEntry {
                    sector,
                    count,
                    value,
                    percentage,
                    holdings,
                }
            })
            .collect();

        entries.sort_by(|a, b| b.value.cmp(&a.value));
        debug!(
            "Allocated {} holdings across {} sectors",
            classified.len(),
            entries.len()
        );
        entries
    }

    fn top_sectors(&self, allocation: &[SectorAllocationEntry]) -> Vec<SectorAllocationEntry> {
        allocation.iter().take(TOP_SECTORS_COUNT).cloned().collect()
    }

    fn concentration_risk(&self, allocation: &[SectorAllocationEntry]) -> ConcentrationRisk {
        let index: Decimal = allocation
            .iter()
            .map(|entry| entry.percentage * entry.percentage)
            .sum();

        let level = if index > Decimal::from(CONCENTRATION_HIGH_THRESHOLD) {
            RiskLevel::High
        } else if index > Decimal::from(CONCENTRATION_MEDIUM_THRESHOLD) {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        ConcentrationRisk { index, level }
    }

    fn region_sector_matrix(&self, classified: &[Position]) -> RegionSectorMatrix {
        let mut matrix: RegionSectorMatrix = BTreeMap::new();

        for position in classified {
            let cell = matrix
                .entry(position.region.clone())
                .or_default()
                .entry(position.sector_label().to_string())
                .or_insert_with(|| RegionSectorCell {
                    count: 0,
                    value: Decimal::ZERO,
                    holdings: Vec::new(),
                });
            cell.count += 1;
            cell.value += position.market_value;
            cell.holdings.push(HoldingBrief::for_position(position));
        }

        matrix
    }
}
