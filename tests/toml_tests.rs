//! Run with: `cargo test --features toml --test toml_tests`

#![cfg(feature = "toml")]

use rechnungswesen::core::*;

#[test]
fn overrides_from_toml() {
    let overrides = ConfigOverrides::from_toml_str(
        r#"
        apiBaseUrl = "https://buchhaltung.example/api"
        defaultPaymentTerms = "Zahlbar sofort ohne Abzug."
        paymentTermDays = 7

        [[vatRates]]
        value = 19
        label = "19%"

        [[vatRates]]
        value = 7
        label = "7%"
        "#,
    )
    .unwrap();

    let config = DomainConfig::load(overrides).unwrap();
    assert_eq!(config.api_base_url(), "https://buchhaltung.example/api");
    assert_eq!(config.default_payment_terms(), "Zahlbar sofort ohne Abzug.");
    assert_eq!(config.payment_term_days(), 7);
    assert_eq!(config.vat_rates().len(), 2);
    assert!(config.vat_rate(0).is_err());
}

#[test]
fn incomplete_date_formats_in_toml() {
    let overrides = ConfigOverrides::from_toml_str(
        r#"
        [dateFormats]
        short = "DD.MM.YY"
        "#,
    )
    .unwrap();
    let err = DomainConfig::load(overrides).unwrap_err();
    let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["dateFormats.long", "dateFormats.time", "dateFormats.dateTime"]);
}

#[test]
fn malformed_toml() {
    let err = ConfigOverrides::from_toml_str("apiBaseUrl = ").unwrap_err();
    assert!(matches!(err, ConfigError::Overrides(_)));

    // Multi-character separator cannot become a char.
    let err = ConfigOverrides::from_toml_str(
        r#"
        [currencyFormat]
        currency = "EUR"
        symbol = "€"
        decimalSeparator = ",,"
        thousandsSeparator = "."
        symbolPosition = "after"
        format = "{value} {symbol}"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Overrides(_)));
}
