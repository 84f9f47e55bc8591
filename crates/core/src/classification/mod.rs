//! Classification module - sector resolution for positions.
//!
//! Resolution order is user override, then static reference table, then the
//! unclassified default. The provenance of every resolution is kept on the
//! annotation so hosts can report data quality.

mod classification_errors;
mod classification_model;
mod classification_service;
mod classification_traits;
mod override_store;
mod reference_table;


pub use classification_errors::ClassificationError;
pub use classification_model::{
    DataQualityReport, SectorAnnotation, SectorEntry, SectorOverride, SectorReferenceRow,
    SectorSource,
};
pub use classification_service::SectorClassificationService;
pub use classification_traits::SectorOverrideStoreTrait;
pub use override_store::InMemoryOverrideStore;
pub use reference_table::SectorReferenceTable;
