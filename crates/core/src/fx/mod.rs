//! FX module - fixed approximate currency handling.
//!
//! There is no FX feed in this core. Currencies are inferred from the
//! listing region and the only conversion offered is a fixed approximate
//! USD/JPY rate used for portfolio-level base totals.

mod currency;

pub use currency::{approx_rate_to_base, convert_to_base, currency_for_region, FixedRateConverter};
