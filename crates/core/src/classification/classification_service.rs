//! Sector classification service.

use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::classification::{
    ClassificationError, DataQualityReport, SectorAnnotation, SectorEntry, SectorOverride,
    SectorOverrideStoreTrait, SectorReferenceTable, SectorSource,
};
use crate::constants::{DISPLAY_DECIMAL_PRECISION, UNCLASSIFIED_LABEL};
use crate::errors::Result;
use crate::portfolio::Position;

/// Resolves sector annotations for positions.
///
/// Holds the static reference table and an in-process cache of user
/// overrides. Overrides win over the reference table; the unclassified
/// default is the floor. Classification itself never fails - any internal
/// error resolves to the error-tagged default annotation.
pub struct SectorClassificationService {
    reference: SectorReferenceTable,
    override_store: Arc<dyn SectorOverrideStoreTrait>,
    overrides: RwLock<HashMap<(String, String), SectorEntry>>,
}

impl SectorClassificationService {
    /// Builds the service, loading all persisted overrides from the store.
    pub fn new(
        reference: SectorReferenceTable,
        override_store: Arc<dyn SectorOverrideStoreTrait>,
    ) -> Result<Self> {
        let rows = override_store.load_all()?;
        debug!(
            "Loaded {} sector overrides, reference table has {} entries",
            rows.len(),
            reference.len()
        );
        let overrides = rows
            .into_iter()
            .map(|row| ((row.region.clone(), row.identifier.clone()), row.entry()))
            .collect();
        Ok(Self {
            reference,
            override_store,
            overrides: RwLock::new(overrides),
        })
    }

    /// Returns a copy of the position with its sector annotation attached.
    pub fn classify(&self, position: &Position) -> Position {
        let identifier = position.classification_identifier().to_string();
        let annotation = match self.resolve(&position.region, &identifier) {
            Ok(annotation) => annotation,
            Err(e) => {
                warn!(
                    "Sector lookup failed for {} ({}): {}. Using error default.",
                    position.key, identifier, e
                );
                SectorAnnotation {
                    sector: UNCLASSIFIED_LABEL.to_string(),
                    sub_sector: UNCLASSIFIED_LABEL.to_string(),
                    source: SectorSource::Error,
                }
            }
        };

        let mut classified = position.clone();
        classified.sector = Some(annotation);
        classified
    }

    /// Classifies every position independently, preserving input order.
    pub fn classify_all(&self, positions: &[Position]) -> Vec<Position> {
        positions.iter().map(|p| self.classify(p)).collect()
    }

    /// Upserts an override and writes it through to the durable store.
    /// The cache is only updated after the store write succeeds.
    pub fn set_override(
        &self,
        region: &str,
        identifier: &str,
        sector: &str,
        sub_sector: &str,
    ) -> Result<SectorOverride> {
        let row = SectorOverride {
            region: region.to_string(),
            identifier: identifier.to_string(),
            sector: sector.to_string(),
            sub_sector: sub_sector.to_string(),
        };
        self.override_store.upsert(&row)?;

        let mut overrides = self
            .overrides
            .write()
            .map_err(|_| ClassificationError::LockPoisoned)?;
        overrides.insert((row.region.clone(), row.identifier.clone()), row.entry());
        Ok(row)
    }

    /// Removes an override from the store and the cache.
    /// Returns the number of rows removed from the store.
    pub fn remove_override(&self, region: &str, identifier: &str) -> Result<usize> {
        let removed = self.override_store.remove(region, identifier)?;

        let mut overrides = self
            .overrides
            .write()
            .map_err(|_| ClassificationError::LockPoisoned)?;
        overrides.remove(&(region.to_string(), identifier.to_string()));
        Ok(removed)
    }

    /// Current overrides, sorted by key for stable output.
    pub fn list_overrides(&self) -> Result<Vec<SectorOverride>> {
        let overrides = self
            .overrides
            .read()
            .map_err(|_| ClassificationError::LockPoisoned)?;
        let mut rows: Vec<SectorOverride> = overrides
            .iter()
            .map(|((region, identifier), entry)| SectorOverride {
                region: region.clone(),
                identifier: identifier.clone(),
                sector: entry.sector.clone(),
                sub_sector: entry.sub_sector.clone(),
            })
            .collect();
        rows.sort_by(|a, b| {
            (a.region.as_str(), a.identifier.as_str())
                .cmp(&(b.region.as_str(), b.identifier.as_str()))
        });
        Ok(rows)
    }

    /// Provenance counts over a classified position set.
    ///
    /// Positions without an annotation (classifier never ran on them) are
    /// counted in the error bucket.
    pub fn data_quality(&self, classified: &[Position]) -> DataQualityReport {
        let mut report = DataQualityReport {
            total: classified.len(),
            override_count: 0,
            reference_count: 0,
            default_count: 0,
            error_count: 0,
            coverage_pct: Decimal::ZERO,
        };

        for position in classified {
            match position.sector.as_ref().map(|a| a.source) {
                Some(SectorSource::Override) => report.override_count += 1,
                Some(SectorSource::Reference) => report.reference_count += 1,
                Some(SectorSource::Default) => report.default_count += 1,
                Some(SectorSource::Error) | None => report.error_count += 1,
            }
        }

        if report.total > 0 {
            let covered = Decimal::from((report.override_count + report.reference_count) as u64);
            let total = Decimal::from(report.total as u64);
            report.coverage_pct =
                (covered / total * Decimal::from(100)).round_dp(DISPLAY_DECIMAL_PRECISION);
        }
        report
    }

    fn resolve(&self, region: &str, identifier: &str) -> Result<SectorAnnotation> {
        let overrides = self
            .overrides
            .read()
            .map_err(|_| ClassificationError::LockPoisoned)?;

        if let Some(entry) = overrides.get(&(region.to_string(), identifier.to_string())) {
            return Ok(annotation_from(entry, SectorSource::Override));
        }
        if let Some(entry) = self.reference.lookup(region, identifier) {
            return Ok(annotation_from(entry, SectorSource::Reference));
        }
        Ok(SectorAnnotation {
            sector: UNCLASSIFIED_LABEL.to_string(),
            sub_sector: UNCLASSIFIED_LABEL.to_string(),
            source: SectorSource::Default,
        })
    }
}

fn annotation_from(entry: &SectorEntry, source: SectorSource) -> SectorAnnotation {
    SectorAnnotation {
        sector: entry.sector.clone(),
        sub_sector: entry.sub_sector.clone(),
        source,
    }
}
