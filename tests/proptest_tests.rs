//! Property-based tests for the formatters and the recurring schedule.
//!
//! Run with: `cargo test --test proptest_tests`

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use rechnungswesen::core::*;
use rust_decimal::Decimal;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Amounts with up to four fractional digits, roughly ±10 million.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000_000i64..100_000_000_000i64).prop_map(|units| Decimal::new(units, 4))
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_interval() -> impl Strategy<Value = RecurringInterval> {
    prop::sample::select(RecurringInterval::ALL.to_vec())
}

proptest! {
    #[test]
    fn formatted_currency_parses_back_to_rounded_value(value in arb_amount()) {
        let config = DomainConfig::default_german();
        let text = format_currency(value, &config);
        let parsed = parse_currency(&text, &config).unwrap();
        prop_assert_eq!(parsed, round_half_up(value));
        // Re-formatting the parsed value is stable.
        prop_assert_eq!(format_currency(parsed, &config), text);
    }

    #[test]
    fn currency_always_has_two_decimals(value in arb_amount()) {
        let config = DomainConfig::default_german();
        let text = format_currency(value, &config);
        let number = text.strip_suffix(" €").unwrap();
        let (_, cents) = number.rsplit_once(',').unwrap();
        prop_assert_eq!(cents.len(), 2);
        prop_assert!(cents.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn grouping_uses_three_digit_clusters(value in arb_amount()) {
        let config = DomainConfig::default_german();
        let text = format_currency(value, &config);
        let number = text.strip_suffix(" €").unwrap().trim_start_matches('-');
        let (int_part, _) = number.rsplit_once(',').unwrap();
        let groups: Vec<&str> = int_part.split('.').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for g in &groups[1..] {
            prop_assert_eq!(g.len(), 3);
        }
    }

    #[test]
    fn sign_matches_rounded_value(value in arb_amount()) {
        let config = DomainConfig::default_german();
        let text = format_currency(value, &config);
        let rounded = round_half_up(value);
        prop_assert_eq!(text.starts_with('-'), rounded < Decimal::ZERO);
    }

    #[test]
    fn short_date_matches_chrono(d in arb_date()) {
        let config = DomainConfig::default_german();
        let text = format_date(&d, DateFormatKind::Short, &config).unwrap();
        prop_assert_eq!(text, d.format("%d.%m.%Y").to_string());
    }

    #[test]
    fn next_date_moves_forward(d in arb_date(), interval in arb_interval(), n in 1u32..5) {
        let next = interval.next_date(d, n).unwrap();
        prop_assert!(next > d);
        let months = (i64::from(next.year()) * 12 + i64::from(next.month0()))
            - (i64::from(d.year()) * 12 + i64::from(d.month0()));
        prop_assert_eq!(months, i64::from(interval.months() * n));
    }
}
