//! Domain models for sector classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Provenance of a sector annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectorSource {
    /// Resolved via a user-defined override.
    Override,
    /// Resolved via the static reference table.
    Reference,
    /// No mapping found; unclassified default applied.
    Default,
    /// A lookup failed; unclassified default applied.
    Error,
}

impl SectorSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectorSource::Override => "override",
            SectorSource::Reference => "reference",
            SectorSource::Default => "default",
            SectorSource::Error => "error",
        }
    }
}

/// Sector labels attached to a position by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAnnotation {
    pub sector: String,
    pub sub_sector: String,
    /// How this annotation was determined.
    pub source: SectorSource,
}

/// A sector/sub-sector pair, the value side of reference and override tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorEntry {
    pub sector: String,
    pub sub_sector: String,
}

/// A user-defined sector override, keyed by region + ticker-or-code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorOverride {
    pub region: String,
    pub identifier: String,
    pub sector: String,
    pub sub_sector: String,
}

impl SectorOverride {
    pub fn entry(&self) -> SectorEntry {
        SectorEntry {
            sector: self.sector.clone(),
            sub_sector: self.sub_sector.clone(),
        }
    }
}

/// One row of a host-supplied reference table JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorReferenceRow {
    pub region: String,
    pub identifier: String,
    pub sector: String,
    pub sub_sector: String,
}

/// Classification provenance counts over a set of classified positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityReport {
    pub total: usize,
    pub override_count: usize,
    pub reference_count: usize,
    pub default_count: usize,
    pub error_count: usize,
    /// `(reference + override) / total`, expressed 0-100.
    pub coverage_pct: Decimal,
}
