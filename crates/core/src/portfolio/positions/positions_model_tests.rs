//! Tests for the position model and position book.

#[cfg(test)]
mod tests {
    use crate::portfolio::positions::{Position, PositionBook};
    use crate::trades::{InstrumentKey, TradeError, TradeRecord};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trade(
        id: &str,
        side: &str,
        quantity: Decimal,
        unit_price: Decimal,
        amount: Decimal,
    ) -> TradeRecord {
        TradeRecord {
            transaction_id: id.to_string(),
            region: "US".to_string(),
            code: None,
            ticker: Some("AAPL".to_string()),
            market: "NASDAQ".to_string(),
            name: Some("Apple Inc.".to_string()),
            side: side.to_string(),
            quantity,
            unit_price,
            amount,
            trade_date: date(2024, 1, 15),
            account: "main".to_string(),
        }
    }

    fn position_from(trades: &[TradeRecord]) -> Position {
        let mut position =
            Position::new_from_trade(InstrumentKey::for_trade(&trades[0]), &trades[0]);
        for t in trades {
            let _ = position.apply_trade(t);
        }
        position
    }

    #[test]
    fn buys_and_sells_accumulate_into_net_totals() {
        let position = position_from(&[
            trade("t1", "buy", dec!(10), dec!(100), dec!(1000)),
            trade("t2", "buy", dec!(5), dec!(120), dec!(600)),
            trade("t3", "sell", dec!(8), dec!(130), dec!(1040)),
        ]);

        assert_eq!(position.net_quantity, dec!(7));
        assert_eq!(position.total_buy_amount, dec!(1600));
        assert_eq!(position.net_investment, dec!(560));
        // average cost 1600/15 = 106.667, cost basis = average * 7
        assert!((position.average_cost() - dec!(106.6667)).abs() < dec!(0.0001));
        assert!((position.cost_basis_value - dec!(746.67)).abs() < dec!(0.01));
        // placeholder market value reuses the last seen unit price
        assert_eq!(position.market_value, dec!(910));
    }

    #[test]
    fn full_liquidation_zeroes_both_valuations() {
        let position = position_from(&[
            trade("t1", "buy", dec!(10), dec!(100), dec!(1000)),
            trade("t2", "sell", dec!(10), dec!(110), dec!(1100)),
        ]);

        assert_eq!(position.net_quantity, Decimal::ZERO);
        assert_eq!(position.cost_basis_value, Decimal::ZERO);
        assert_eq!(position.market_value, Decimal::ZERO);
        assert_eq!(position.trades.len(), 2);
        assert!(!position.is_active());
    }

    #[test]
    fn cost_basis_of_two_buys_equals_their_total_cost() {
        let position = position_from(&[
            trade("t1", "buy", dec!(10), dec!(100), dec!(1000)),
            trade("t2", "buy", dec!(5), dec!(120), dec!(600)),
        ]);

        assert!((position.cost_basis_value - dec!(1600)).abs() < dec!(0.0000001));
    }

    #[test]
    fn market_value_falls_back_to_cost_basis_without_a_price() {
        let position = position_from(&[trade("t1", "buy", dec!(10), dec!(0), dec!(1000))]);

        assert_eq!(position.cost_basis_value, dec!(1000));
        assert_eq!(position.market_value, position.cost_basis_value);
    }

    #[test]
    fn zero_buy_quantity_keeps_average_cost_at_zero() {
        let position = position_from(&[trade("t1", "buy", dec!(0), dec!(100), dec!(500))]);

        assert_eq!(position.average_cost(), Decimal::ZERO);
        assert_eq!(position.net_quantity, Decimal::ZERO);
        assert_eq!(position.cost_basis_value, Decimal::ZERO);
    }

    #[test]
    fn malformed_side_is_recorded_in_history_only() {
        let mut position = Position::new_from_trade(
            InstrumentKey::for_trade(&trade("t1", "hold", dec!(10), dec!(100), dec!(1000))),
            &trade("t1", "hold", dec!(10), dec!(100), dec!(1000)),
        );
        let result = position.apply_trade(&trade("t1", "hold", dec!(10), dec!(100), dec!(1000)));

        assert_eq!(
            result.unwrap_err(),
            TradeError::InvalidTradeKind("hold".to_string())
        );
        assert_eq!(position.trades.len(), 1);
        assert!(position.trade_ids.contains("t1"));
        assert_eq!(position.total_buy_quantity, Decimal::ZERO);
        assert_eq!(position.total_buy_amount, Decimal::ZERO);
    }

    #[test]
    fn trade_dates_extend_chronologically_regardless_of_order() {
        let mut late = trade("t1", "buy", dec!(1), dec!(100), dec!(100));
        late.trade_date = date(2024, 6, 1);
        let mut early = trade("t2", "buy", dec!(1), dec!(100), dec!(100));
        early.trade_date = date(2023, 2, 20);

        let position = position_from(&[late, early]);

        assert_eq!(position.first_trade_date, date(2023, 2, 20));
        assert_eq!(position.last_trade_date, date(2024, 6, 1));
    }

    #[test]
    fn account_labels_are_deduplicated() {
        let mut a = trade("t1", "buy", dec!(1), dec!(100), dec!(100));
        a.account = "broker-a".to_string();
        let mut b = trade("t2", "buy", dec!(1), dec!(100), dec!(100));
        b.account = "broker-b".to_string();
        let mut c = trade("t3", "buy", dec!(1), dec!(100), dec!(100));
        c.account = "broker-a".to_string();

        let position = position_from(&[a, b, c]);

        assert_eq!(position.accounts.len(), 2);
        assert!(position.accounts.contains("broker-a"));
        assert!(position.accounts.contains("broker-b"));
    }

    #[test]
    fn currency_is_inferred_from_region() {
        let us = position_from(&[trade("t1", "buy", dec!(1), dec!(100), dec!(100))]);
        assert_eq!(us.currency, "USD");

        let mut jp_trade = trade("t2", "buy", dec!(1), dec!(100), dec!(100));
        jp_trade.region = "JP".to_string();
        jp_trade.code = Some("7203".to_string());
        let jp = position_from(&[jp_trade]);
        assert_eq!(jp.currency, "JPY");
    }

    #[test]
    fn book_reuses_the_position_for_a_repeated_key() {
        let mut book = PositionBook::new();
        let first = trade("t1", "buy", dec!(10), dec!(100), dec!(1000));
        let second = trade("t2", "buy", dec!(5), dec!(120), dec!(600));

        book.entry_for_trade(&first).apply_trade(&first).unwrap();
        book.entry_for_trade(&second).apply_trade(&second).unwrap();

        assert_eq!(book.len(), 1);
        let key = InstrumentKey::for_trade(&first);
        assert_eq!(book.get(&key).unwrap().total_buy_quantity, dec!(15));
    }

    #[test]
    fn book_preserves_first_seen_order() {
        let mut book = PositionBook::new();
        let mut second_instrument = trade("t2", "buy", dec!(1), dec!(50), dec!(50));
        second_instrument.ticker = Some("MSFT".to_string());
        let first = trade("t1", "buy", dec!(1), dec!(100), dec!(100));

        book.entry_for_trade(&first).apply_trade(&first).unwrap();
        book.entry_for_trade(&second_instrument)
            .apply_trade(&second_instrument)
            .unwrap();

        let keys: Vec<&str> = book.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["US:AAPL", "US:MSFT"]);
    }
}
