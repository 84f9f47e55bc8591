//! Instrument key derivation.
//!
//! All keys follow the format `{REGION}:{IDENTIFIER}`:
//!
//! | Region | Identifier | Example |
//! |--------|------------|-------------------|
//! | JP     | code       | `JP:7203`         |
//! | US     | ticker     | `US:AAPL`         |
//! | other  | name       | `HK:Tencent`      |
//!
//! The key is the sole grouping identity for positions. Known data-quality
//! risk: non-JP/non-US instruments fall back to a name-based key, so two
//! distinct instruments sharing a display name silently merge. The upstream
//! feed behaves the same way, so the derivation is preserved rather than
//! guarded.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::trades::TradeRecord;

/// The delimiter between region and identifier.
pub const KEY_DELIMITER: char = ':';

const REGION_JP: &str = "JP";
const REGION_US: &str = "US";

/// Deterministic grouping identity for a tradable instrument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstrumentKey(String);

impl InstrumentKey {
    /// Derives the key for a trade record.
    pub fn for_trade(trade: &TradeRecord) -> Self {
        let identifier = match trade.region.as_str() {
            REGION_JP => trade.code.clone().unwrap_or_default(),
            REGION_US => trade.ticker.clone().unwrap_or_default(),
            _ => trade.name.clone().unwrap_or_default(),
        };
        InstrumentKey(format!("{}{}{}", trade.region, KEY_DELIMITER, identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstrumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
