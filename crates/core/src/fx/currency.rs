//! Fixed-rate currency helpers.

use log::warn;
use rust_decimal::Decimal;

use crate::constants::{APPROX_USD_JPY_RATE, BASE_CURRENCY};

const CURRENCY_JPY: &str = "JPY";
const CURRENCY_USD: &str = "USD";

/// Infers the settlement currency from the listing region.
/// The trade feed carries no currency field; JP listings settle in JPY,
/// US listings in USD, and everything else is booked in JPY.
pub fn currency_for_region(region: &str) -> &'static str {
    match region {
        "US" => CURRENCY_USD,
        _ => CURRENCY_JPY,
    }
}

/// Approximate conversion rate from `currency` into the base currency.
///
/// Fixed policy rate, not a market quote. Unknown currencies convert at 1:1
/// with a warning so totals stay best-effort instead of failing.
pub fn approx_rate_to_base(currency: &str) -> Decimal {
    if currency == BASE_CURRENCY {
        return Decimal::ONE;
    }
    if currency == CURRENCY_USD {
        return Decimal::from_str_radix(APPROX_USD_JPY_RATE, 10).unwrap_or(Decimal::ONE);
    }
    warn!(
        "No approximate rate for currency {}. Converting to {} at 1:1.",
        currency, BASE_CURRENCY
    );
    Decimal::ONE
}

/// Converts an amount into the base currency at the fixed approximate rate.
pub fn convert_to_base(amount: Decimal, currency: &str) -> Decimal {
    amount * approx_rate_to_base(currency)
}

/// Converter handle for services that report base-currency totals.
#[derive(Debug, Clone, Default)]
pub struct FixedRateConverter;

impl FixedRateConverter {
    pub fn new() -> Self {
        FixedRateConverter
    }

    pub fn base_currency(&self) -> &'static str {
        BASE_CURRENCY
    }

    pub fn to_base(&self, amount: Decimal, currency: &str) -> Decimal {
        convert_to_base(amount, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_for_region_maps_known_regions() {
        assert_eq!(currency_for_region("JP"), "JPY");
        assert_eq!(currency_for_region("US"), "USD");
        assert_eq!(currency_for_region("HK"), "JPY");
    }

    #[test]
    fn usd_converts_at_fixed_rate() {
        assert_eq!(convert_to_base(dec!(10), "USD"), dec!(1500));
    }

    #[test]
    fn base_currency_converts_at_parity() {
        assert_eq!(convert_to_base(dec!(10), "JPY"), dec!(10));
    }
}
