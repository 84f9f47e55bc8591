//! Portfolio allocation module - sector breakdowns and concentration risk.

mod allocation_model;
mod allocation_service;


pub use allocation_model::{
    ConcentrationRisk, HoldingBrief, RegionSectorCell, RegionSectorMatrix, RiskLevel,
    SectorAllocationEntry,
};
pub use allocation_service::{AllocationService, AllocationServiceTrait};
