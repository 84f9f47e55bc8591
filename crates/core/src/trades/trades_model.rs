//! Trade domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::trades::TradeError;

/// Canonical trade side. The feed carries the side as a free-form provider
/// label; parsing happens once, inside the merge, via [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

impl FromStr for TradeSide {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(TradeSide::Buy),
            "sell" => Ok(TradeSide::Sell),
            _ => Err(TradeError::InvalidTradeKind(s.to_string())),
        }
    }
}

/// A single trade record as delivered by the trade source.
///
/// Immutable input: the aggregator never mutates records, it only folds them
/// into positions. Arrives in arbitrary order; the transaction id is the only
/// uniqueness handle the feed provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    /// Originating transaction id from the upstream system.
    pub transaction_id: String,
    /// Listing region, e.g. "JP" or "US". Free-form for other markets.
    pub region: String,
    /// Exchange code, the grouping identifier for JP listings.
    #[serde(default)]
    pub code: Option<String>,
    /// Ticker symbol, the grouping identifier for US listings.
    #[serde(default)]
    pub ticker: Option<String>,
    /// Market/exchange label, e.g. "TSE", "NYSE".
    pub market: String,
    /// Display name. Grouping identifier for non-JP/non-US listings.
    #[serde(default)]
    pub name: Option<String>,
    /// Raw provider side label; validated against [`TradeSide`] in the merge.
    pub side: String,
    /// Traded quantity, non-negative.
    pub quantity: Decimal,
    /// Unit price at execution.
    pub unit_price: Decimal,
    /// Total trade amount.
    pub amount: Decimal,
    /// Execution date.
    pub trade_date: NaiveDate,
    /// Account label the trade settled in.
    pub account: String,
}

impl TradeRecord {
    /// Validates the record and returns its canonical side.
    ///
    /// Non-numeric fields cannot occur (the type is closed), so validation
    /// reduces to the side label and sign checks.
    pub fn validated_side(&self) -> Result<TradeSide, TradeError> {
        let side = TradeSide::from_str(&self.side)?;
        if self.quantity.is_sign_negative() {
            return Err(TradeError::NegativeQuantity {
                trade_id: self.transaction_id.clone(),
                quantity: self.quantity,
            });
        }
        if self.amount.is_sign_negative() {
            return Err(TradeError::NegativeAmount {
                trade_id: self.transaction_id.clone(),
                amount: self.amount,
            });
        }
        Ok(side)
    }

    /// Display name with a fallback to the grouping identifier.
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.ticker.clone())
            .or_else(|| self.code.clone())
            .unwrap_or_default()
    }
}
