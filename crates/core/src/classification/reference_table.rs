//! Static sector reference table.

use std::collections::HashMap;

use crate::classification::{SectorEntry, SectorReferenceRow};
use crate::errors::Result;

/// Built-in seed mappings: (region, identifier, sector, sub-sector).
/// Covers the instruments the bundled reference data has always shipped
/// with; hosts with broader universes load their own JSON table.
const BUILTIN_SECTOR_ROWS: &[(&str, &str, &str, &str)] = &[
    // JP listings, keyed by exchange code
    ("JP", "7203", "Consumer Discretionary", "Automobiles"),
    ("JP", "6758", "Information Technology", "Consumer Electronics"),
    ("JP", "9984", "Communication Services", "Telecom Holdings"),
    ("JP", "8306", "Financials", "Banks"),
    ("JP", "6861", "Information Technology", "Electronic Equipment"),
    ("JP", "9432", "Communication Services", "Integrated Telecom"),
    ("JP", "4502", "Health Care", "Pharmaceuticals"),
    ("JP", "8058", "Industrials", "Trading Companies"),
    ("JP", "6501", "Industrials", "Industrial Conglomerates"),
    ("JP", "8035", "Information Technology", "Semiconductor Equipment"),
    // US listings, keyed by ticker
    ("US", "AAPL", "Information Technology", "Technology Hardware"),
    ("US", "MSFT", "Information Technology", "Software"),
    ("US", "GOOGL", "Communication Services", "Interactive Media"),
    ("US", "AMZN", "Consumer Discretionary", "Broadline Retail"),
    ("US", "NVDA", "Information Technology", "Semiconductors"),
    ("US", "TSLA", "Consumer Discretionary", "Automobiles"),
    ("US", "JPM", "Financials", "Banks"),
    ("US", "JNJ", "Health Care", "Pharmaceuticals"),
    ("US", "XOM", "Energy", "Oil & Gas"),
    ("US", "PG", "Consumer Staples", "Household Products"),
    ("US", "KO", "Consumer Staples", "Beverages"),
];

/// Immutable `(region, identifier) -> sector/sub-sector` mapping.
///
/// Loaded once at startup, either from the built-in seed set or from a
/// host-supplied JSON document, and treated as read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SectorReferenceTable {
    entries: HashMap<(String, String), SectorEntry>,
}

impl SectorReferenceTable {
    /// An empty table. Every lookup misses, so classification falls through
    /// to overrides and the unclassified default.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in seed table.
    pub fn builtin() -> Self {
        Self::from_rows(BUILTIN_SECTOR_ROWS.iter().map(|(region, id, sector, sub)| {
            SectorReferenceRow {
                region: (*region).to_string(),
                identifier: (*id).to_string(),
                sector: (*sector).to_string(),
                sub_sector: (*sub).to_string(),
            }
        }))
    }

    /// Builds a table from rows. Later rows win on duplicate keys.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = SectorReferenceRow>,
    {
        let entries = rows
            .into_iter()
            .map(|row| {
                (
                    (row.region, row.identifier),
                    SectorEntry {
                        sector: row.sector,
                        sub_sector: row.sub_sector,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Parses a host-supplied JSON document (an array of rows).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rows: Vec<SectorReferenceRow> = serde_json::from_str(json)?;
        Ok(Self::from_rows(rows))
    }

    /// Exports the table as a JSON document, rows sorted by key for stable
    /// output.
    pub fn to_json_string(&self) -> Result<String> {
        let mut rows: Vec<SectorReferenceRow> = self
            .entries
            .iter()
            .map(|((region, identifier), entry)| SectorReferenceRow {
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
        Ok(serde_json::to_string_pretty(&rows)?)
    }

    pub fn lookup(&self, region: &str, identifier: &str) -> Option<&SectorEntry> {
        self.entries
            .get(&(region.to_string(), identifier.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
