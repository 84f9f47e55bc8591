//! Tests for the portfolio summary service.

#[cfg(test)]
mod tests {
    use crate::portfolio::positions::{Position, PositionBook};
    use crate::portfolio::summary::{SummaryService, SummaryServiceTrait};
    use crate::trades::{InstrumentKey, TradeRecord};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Builds an active position with the given cost basis and market value
    /// (single buy of quantity 1).
    fn holding(region: &str, identifier: &str, account: &str, cost: Decimal, market: Decimal) -> Position {
        let trade = TradeRecord {
            transaction_id: format!("tx-{}", identifier),
            region: region.to_string(),
            code: Some(identifier.to_string()),
            ticker: Some(identifier.to_string()),
            market: "TEST".to_string(),
            name: Some(identifier.to_string()),
            side: "buy".to_string(),
            quantity: dec!(1),
            unit_price: market,
            amount: cost,
            trade_date: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            account: account.to_string(),
        };
        let mut book = PositionBook::new();
        book.entry_for_trade(&trade).apply_trade(&trade).unwrap();
        book.into_positions().remove(0)
    }

    #[test]
    fn totals_and_unrealized_gain_are_summed() {
        let service = SummaryService::new();
        let summary = service.summarize(&[
            holding("JP", "7203", "main", dec!(1000), dec!(1200)),
            holding("JP", "9984", "main", dec!(500), dec!(450)),
        ]);

        assert_eq!(summary.holding_count, 2);
        assert_eq!(summary.total_cost_basis_value, dec!(1500));
        assert_eq!(summary.total_market_value, dec!(1650));
        assert_eq!(summary.unrealized_gain, dec!(150));
    }

    #[test]
    fn breakdowns_are_keyed_by_dimension_value() {
        let service = SummaryService::new();
        let summary = service.summarize(&[
            holding("JP", "7203", "a", dec!(1000), dec!(1000)),
            holding("US", "AAPL", "b", dec!(200), dec!(200)),
            holding("JP", "9984", "a", dec!(300), dec!(300)),
        ]);

        assert_eq!(summary.by_region["JP"].count, 2);
        assert_eq!(summary.by_region["JP"].cost_basis_value, dec!(1300));
        assert_eq!(summary.by_region["US"].count, 1);
        assert_eq!(summary.by_currency["JPY"].cost_basis_value, dec!(1300));
        assert_eq!(summary.by_currency["USD"].cost_basis_value, dec!(200));
        assert_eq!(summary.by_account["a"].count, 2);
        assert_eq!(summary.by_account["b"].count, 1);
    }

    #[test]
    fn multi_account_position_contributes_full_value_to_each_tally() {
        let mut position = holding("JP", "7203", "a", dec!(1000), dec!(1000));
        position.accounts.insert("b".to_string());

        let service = SummaryService::new();
        let summary = service.summarize(&[position]);

        assert_eq!(summary.by_account["a"].cost_basis_value, dec!(1000));
        assert_eq!(summary.by_account["b"].cost_basis_value, dec!(1000));
    }

    #[test]
    fn top_holdings_are_ranked_by_cost_basis() {
        let service = SummaryService::new();
        let summary = service.summarize(&[
            holding("JP", "small", "main", dec!(250), dec!(250)),
            holding("JP", "large", "main", dec!(750), dec!(750)),
        ]);

        assert_eq!(summary.top_holdings.len(), 2);
        assert_eq!(summary.top_holdings[0].name, "large");
        assert_eq!(summary.top_holdings[0].percentage, dec!(75));
        assert_eq!(summary.top_holdings[1].percentage, dec!(25));
    }

    #[test]
    fn top_holdings_view_is_capped_at_ten() {
        let holdings: Vec<Position> = (0..12)
            .map(|i| {
                holding(
                    "JP",
                    &format!("c{:02}", i),
                    "main",
                    Decimal::from(100 + i),
                    Decimal::from(100 + i),
                )
            })
            .collect();

        let service = SummaryService::new();
        let summary = service.summarize(&holdings);

        assert_eq!(summary.top_holdings.len(), 10);
        assert_eq!(summary.top_holdings[0].cost_basis_value, dec!(111));
    }

    #[test]
    fn empty_portfolio_yields_zeroed_summary() {
        let service = SummaryService::new();
        let summary = service.summarize(&[]);

        assert_eq!(summary.holding_count, 0);
        assert_eq!(summary.total_cost_basis_value, Decimal::ZERO);
        assert!(summary.top_holdings.is_empty());
        assert!(summary.by_region.is_empty());
    }

    #[test]
    fn base_totals_convert_usd_at_the_fixed_rate() {
        let service = SummaryService::new();
        let summary = service.summarize(&[
            holding("US", "AAPL", "main", dec!(10), dec!(12)),
            holding("JP", "7203", "main", dec!(100), dec!(100)),
        ]);

        assert_eq!(summary.approximate_base_totals.currency, "JPY");
        assert_eq!(summary.approximate_base_totals.cost_basis_value, dec!(1600));
        assert_eq!(summary.approximate_base_totals.market_value, dec!(1900));
    }

    #[test]
    fn summary_serializes_camel_case() {
        let service = SummaryService::new();
        let summary = service.summarize(&[holding("JP", "7203", "main", dec!(100), dec!(100))]);
        let json = serde_json::to_value(&summary).unwrap();

        assert!(json.get("totalCostBasisValue").is_some());
        assert!(json.get("unrealizedGain").is_some());
        assert!(json.get("approximateBaseTotals").is_some());
    }

    #[test]
    fn key_helper_matches_grouping_identity() {
        let position = holding("US", "AAPL", "main", dec!(10), dec!(10));
        let probe = InstrumentKey::for_trade(&position.trades[0]);
        assert_eq!(position.key, probe);
    }
}
