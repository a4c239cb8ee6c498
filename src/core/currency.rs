//! Monetary amount rendering and parsing.
//!
//! All arithmetic is done on [`Decimal`]; amounts are rounded to cents with
//! [`round_half_up`] before grouping, so display never drifts from the
//! booked value.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::config::DomainConfig;
use super::error::ConfigError;

/// Round to two fractional digits, midpoints away from zero
/// (2.345 → 2.35, -2.345 → -2.35).
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render `value` using the configured currency format.
///
/// ```
/// use rechnungswesen::core::*;
/// use rust_decimal_macros::dec;
///
/// let config = DomainConfig::default_german();
/// assert_eq!(format_currency(dec!(1234.5), &config), "1.234,50 €");
/// assert_eq!(format_currency(dec!(-5), &config), "-5,00 €");
/// ```
pub fn format_currency(value: Decimal, config: &DomainConfig) -> String {
    let cf = config.currency_format();
    let number = format_amount(value, cf.decimal_separator, cf.thousands_separator);
    cf.format
        .replace("{value}", &number)
        .replace("{symbol}", &cf.symbol)
}

/// The numeric part only: sign, grouped integer digits, separator, two decimals.
pub fn format_amount(
    value: Decimal,
    decimal_separator: char,
    thousands_separator: char,
) -> String {
    let rounded = round_half_up(value);
    // -0.001 rounds to a signed zero; never print "-0,00"
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut cents = rounded.abs();
    cents.rescale(2);
    let digits = cents.to_string();
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, thousands_separator));
    out.push(decimal_separator);
    out.push_str(frac_part);
    out
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Parse a string produced by [`format_currency`] back into a decimal.
///
/// The symbol is optional. Thousands separators, when present, must
/// delimit groups of exactly three digits.
pub fn parse_currency(text: &str, config: &DomainConfig) -> Result<Decimal, ConfigError> {
    let cf = config.currency_format();
    let invalid = || ConfigError::InvalidAmount(text.to_string());

    let stripped = text.replace(cf.symbol.as_str(), "");
    let trimmed = stripped.trim_matches(|c: char| c.is_whitespace());
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (int_part, frac_part) = match unsigned.split_once(cf.decimal_separator) {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let groups: Vec<&str> = int_part.split(cf.thousands_separator).collect();
    let well_grouped = groups.iter().enumerate().all(|(i, g)| {
        let digits_ok = !g.is_empty() && g.chars().all(|c| c.is_ascii_digit());
        let size_ok = groups.len() == 1 || if i == 0 { g.len() <= 3 } else { g.len() == 3 };
        digits_ok && size_ok
    });
    if !well_grouped {
        return Err(invalid());
    }
    if frac_part.is_some_and(|f| f.is_empty() || !f.chars().all(|c| c.is_ascii_digit())) {
        return Err(invalid());
    }

    let mut canonical = String::with_capacity(unsigned.len() + 1);
    if negative {
        canonical.push('-');
    }
    canonical.push_str(&groups.concat());
    if let Some(f) = frac_part {
        canonical.push('.');
        canonical.push_str(f);
    }
    Decimal::from_str(&canonical).map_err(|_| invalid())
}

/// Check whether `code` is a known ISO 4217 currency code.
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Conventional symbol for an ISO 4217 code, if known.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    CURRENCY_SYMBOLS
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| CURRENCY_SYMBOLS[i].1)
}

/// Accepted ISO 4217 codes, sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AED", "AMD", "AUD", "BGN", "BRL", "CAD", "CHF", "CNY", "CZK", "DKK", "EGP", "EUR", "GBP",
    "GEL", "HKD", "HRK", "HUF", "IDR", "ILS", "INR", "ISK", "JPY", "KES", "KRW", "KZT", "MXN",
    "MYR", "NGN", "NOK", "NZD", "PHP", "PLN", "RON", "RUB", "SAR", "SEK", "SGD", "THB", "TRY",
    "TWD", "UAH", "USD", "VND", "ZAR",
];

/// ISO 4217 code → symbol, for currencies common on German invoices.
/// Sorted by code for binary search.
static CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BGN", "лв"),
    ("CAD", "CA$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("CZK", "Kč"),
    ("DKK", "kr"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HUF", "Ft"),
    ("JPY", "¥"),
    ("NOK", "kr"),
    ("PLN", "zł"),
    ("RON", "lei"),
    ("SEK", "kr"),
    ("TRY", "₺"),
    ("UAH", "₴"),
    ("USD", "$"),
];
