//! Traits for the durable override store.

use crate::classification::SectorOverride;
use crate::errors::Result;

/// Durable key-value store for user sector overrides.
///
/// Implemented by the host (file, database, whatever persists across
/// restarts). The classifier loads the full table once at construction and
/// writes through on every mutation; reads after that hit the in-process
/// cache only.
pub trait SectorOverrideStoreTrait: Send + Sync {
    /// Loads every stored override.
    fn load_all(&self) -> Result<Vec<SectorOverride>>;

    /// Inserts or replaces the override for its `(region, identifier)` key.
    fn upsert(&self, row: &SectorOverride) -> Result<()>;

    /// Removes the override for the key. Returns the number of rows removed.
    fn remove(&self, region: &str, identifier: &str) -> Result<usize>;
}
