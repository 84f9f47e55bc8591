//! In-memory override store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::classification::{ClassificationError, SectorOverride, SectorOverrideStoreTrait};
use crate::errors::Result;

/// Reference [`SectorOverrideStoreTrait`] implementation backed by a map.
///
/// Not durable. Intended for tests and hosts that persist elsewhere.
#[derive(Debug, Default)]
pub struct InMemoryOverrideStore {
    rows: RwLock<HashMap<(String, String), SectorOverride>>,
}

impl InMemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing overrides.
    pub fn with_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = SectorOverride>,
    {
        let rows = rows
            .into_iter()
            .map(|row| ((row.region.clone(), row.identifier.clone()), row))
            .collect();
        Self {
            rows: RwLock::new(rows),
        }
    }
}

impl SectorOverrideStoreTrait for InMemoryOverrideStore {
    fn load_all(&self) -> Result<Vec<SectorOverride>> {
        let rows = self
            .rows
            .read()
            .map_err(|_| ClassificationError::LockPoisoned)?;
        Ok(rows.values().cloned().collect())
    }

    fn upsert(&self, row: &SectorOverride) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| ClassificationError::LockPoisoned)?;
        rows.insert((row.region.clone(), row.identifier.clone()), row.clone());
        Ok(())
    }

    fn remove(&self, region: &str, identifier: &str) -> Result<usize> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| ClassificationError::LockPoisoned)?;
        Ok(rows
            .remove(&(region.to_string(), identifier.to_string()))
            .map(|_| 1)
            .unwrap_or(0))
    }
}
