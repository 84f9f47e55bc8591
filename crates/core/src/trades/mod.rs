//! Trades module - the raw trade feed models and instrument identity.

mod instrument_key;
mod trades_errors;
mod trades_model;


pub use instrument_key::InstrumentKey;
pub use trades_errors::TradeError;
pub use trades_model::{TradeRecord, TradeSide};
