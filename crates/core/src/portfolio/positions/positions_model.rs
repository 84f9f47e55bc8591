//! Position domain model and the position book arena.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::classification::SectorAnnotation;
use crate::fx::currency_for_region;
use crate::trades::{InstrumentKey, TradeError, TradeRecord, TradeSide};

const REGION_JP: &str = "JP";
const REGION_US: &str = "US";

/// Running aggregate state for one instrument.
///
/// Created on the first trade seen for its key, mutated by every subsequent
/// trade, never deleted. A fully liquidated position stays in the book with
/// zeroed valuation and is filtered out of active-holdings views.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub key: InstrumentKey,
    pub name: String,
    pub code: Option<String>,
    pub ticker: Option<String>,
    pub market: String,
    pub region: String,
    pub currency: String,
    pub total_buy_quantity: Decimal,
    pub total_sell_quantity: Decimal,
    pub total_buy_amount: Decimal,
    pub total_sell_amount: Decimal,
    /// `total_buy_quantity - total_sell_quantity`. Recomputed, never set.
    pub net_quantity: Decimal,
    /// `total_buy_amount - total_sell_amount`. Recomputed, never set.
    pub net_investment: Decimal,
    /// Average-cost valuation of the open quantity. Exactly 0 unless
    /// `net_quantity > 0`.
    pub cost_basis_value: Decimal,
    /// Placeholder valuation from the most-recently-seen unit price.
    /// Stand-in for a future pricing feed; falls back to cost basis when no
    /// usable price has been seen. Exactly 0 unless `net_quantity > 0`.
    pub market_value: Decimal,
    pub first_trade_date: NaiveDate,
    pub last_trade_date: NaiveDate,
    /// Distinct account labels the instrument traded in.
    pub accounts: BTreeSet<String>,
    /// Distinct contributing transaction ids.
    pub trade_ids: BTreeSet<String>,
    /// Contributing trade records in arrival order, malformed ones included.
    pub trades: Vec<TradeRecord>,
    /// Set by the classifier; `None` until it runs.
    #[serde(default)]
    pub sector: Option<SectorAnnotation>,
}

impl Position {
    /// Seeds a position from the first trade seen for a key. Accumulators
    /// start at zero; the trade itself is applied separately.
    pub fn new_from_trade(key: InstrumentKey, trade: &TradeRecord) -> Self {
        Position {
            key,
            name: trade.display_name(),
            code: trade.code.clone(),
            ticker: trade.ticker.clone(),
            market: trade.market.clone(),
            region: trade.region.clone(),
            currency: currency_for_region(&trade.region).to_string(),
            total_buy_quantity: Decimal::ZERO,
            total_sell_quantity: Decimal::ZERO,
            total_buy_amount: Decimal::ZERO,
            total_sell_amount: Decimal::ZERO,
            net_quantity: Decimal::ZERO,
            net_investment: Decimal::ZERO,
            cost_basis_value: Decimal::ZERO,
            market_value: Decimal::ZERO,
            first_trade_date: trade.trade_date,
            last_trade_date: trade.trade_date,
            accounts: BTreeSet::new(),
            trade_ids: BTreeSet::new(),
            trades: Vec::new(),
            sector: None,
        }
    }

    /// Applies one trade to the running aggregates.
    ///
    /// History, dates, and account bookkeeping happen for every trade. A
    /// malformed trade (bad side, negative quantity/amount) returns its
    /// error after that bookkeeping, leaving the accumulators untouched.
    pub fn apply_trade(&mut self, trade: &TradeRecord) -> Result<(), TradeError> {
        if trade.trade_date < self.first_trade_date {
            self.first_trade_date = trade.trade_date;
        }
        if trade.trade_date > self.last_trade_date {
            self.last_trade_date = trade.trade_date;
        }
        self.accounts.insert(trade.account.clone());
        self.trade_ids.insert(trade.transaction_id.clone());
        self.trades.push(trade.clone());

        let side = trade.validated_side()?;
        match side {
            TradeSide::Buy => {
                self.total_buy_quantity += trade.quantity;
                self.total_buy_amount += trade.amount;
            }
            TradeSide::Sell => {
                self.total_sell_quantity += trade.quantity;
                self.total_sell_amount += trade.amount;
            }
        }
        self.recalculate(trade.unit_price);
        Ok(())
    }

    /// Recomputes the derived fields from the accumulators.
    fn recalculate(&mut self, last_unit_price: Decimal) {
        self.net_quantity = self.total_buy_quantity - self.total_sell_quantity;
        self.net_investment = self.total_buy_amount - self.total_sell_amount;

        if self.net_quantity > Decimal::ZERO {
            self.cost_basis_value = self.average_cost() * self.net_quantity;
            self.market_value = if last_unit_price > Decimal::ZERO {
                last_unit_price * self.net_quantity
            } else {
                self.cost_basis_value
            };
        } else {
            self.cost_basis_value = Decimal::ZERO;
            self.market_value = Decimal::ZERO;
        }
    }

    /// Average cost per unit over all buys. 0 when no buys are recorded.
    pub fn average_cost(&self) -> Decimal {
        if self.total_buy_quantity > Decimal::ZERO {
            self.total_buy_amount / self.total_buy_quantity
        } else {
            Decimal::ZERO
        }
    }

    /// The ticker-or-code identifier used for sector lookups.
    pub fn classification_identifier(&self) -> &str {
        match self.region.as_str() {
            REGION_JP => self.code.as_deref().unwrap_or(""),
            REGION_US => self.ticker.as_deref().unwrap_or(""),
            _ => self
                .ticker
                .as_deref()
                .or(self.code.as_deref())
                .unwrap_or(""),
        }
    }

    /// Whether this position belongs in active-holdings views. Both checks
    /// are required: residual quantity with a non-positive cost basis is
    /// excluded rather than shown.
    pub fn is_active(&self) -> bool {
        self.net_quantity > Decimal::ZERO && self.cost_basis_value > Decimal::ZERO
    }

    /// The sector label for grouping; unclassified positions group under the
    /// default label.
    pub fn sector_label(&self) -> &str {
        self.sector
            .as_ref()
            .map(|a| a.sector.as_str())
            .unwrap_or(crate::constants::UNCLASSIFIED_LABEL)
    }
}

/// Insertion-ordered arena of positions with map-style lookup.
///
/// Keys map to dense indexes into a vector, so iteration is deterministic
/// (first-seen order) and lookups stay O(1). Behavior is identical to a
/// plain map keyed by instrument key.
#[derive(Debug, Clone, Default)]
pub struct PositionBook {
    index: HashMap<InstrumentKey, usize>,
    positions: Vec<Position>,
}

impl PositionBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains_key(&self, key: &InstrumentKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &InstrumentKey) -> Option<&Position> {
        self.index.get(key).map(|&i| &self.positions[i])
    }

    /// The position for the trade's key, created from the trade if absent.
    pub(crate) fn entry_for_trade(&mut self, trade: &TradeRecord) -> &mut Position {
        let key = InstrumentKey::for_trade(trade);
        let next_index = self.positions.len();
        let index = *self.index.entry(key.clone()).or_insert(next_index);
        if index == next_index {
            self.positions.push(Position::new_from_trade(key, trade));
        }
        &mut self.positions[index]
    }

    /// Positions in first-seen order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }
}

impl<'a> IntoIterator for &'a PositionBook {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
