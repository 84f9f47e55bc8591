/// Label applied when no sector resolution is available.
pub const UNCLASSIFIED_LABEL: &str = "Unclassified";

/// Number of holdings reported in the portfolio summary ranking.
pub const TOP_HOLDINGS_COUNT: usize = 10;

/// Number of sectors reported in the "top sectors" view.
pub const TOP_SECTORS_COUNT: usize = 5;

/// Concentration index above which the portfolio is rated high risk.
pub const CONCENTRATION_HIGH_THRESHOLD: i64 = 2500;

/// Concentration index above which the portfolio is rated medium risk.
pub const CONCENTRATION_MEDIUM_THRESHOLD: i64 = 1500;

/// Base currency for the approximate portfolio-level totals.
pub const BASE_CURRENCY: &str = "JPY";

/// Fixed approximate USD/JPY rate used for the base-currency totals.
/// Stand-in until a real FX feed is wired in.
pub const APPROX_USD_JPY_RATE: &str = "150";

/// Decimal precision for display percentages.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
