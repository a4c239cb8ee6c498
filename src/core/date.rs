//! Date and time rendering with the configured patterns.
//!
//! Supported tokens: `YYYY` (4-digit year), `MMMM` (full month name in the
//! default locale), `MM` (month number), `DD` (day), `HH` (hour, 24h) and
//! `mm` (minute). Numeric tokens are zero-padded to two digits; everything
//! else in a pattern is copied through literally.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::config::DomainConfig;
use super::error::ConfigError;
use super::types::DateFormatKind;

/// Calendar values the formatter accepts.
///
/// Plain dates render their time tokens as midnight.
pub trait CalendarValue {
    fn date(&self) -> NaiveDate;
    fn time(&self) -> NaiveTime;
}

impl CalendarValue for NaiveDate {
    fn date(&self) -> NaiveDate {
        *self
    }

    fn time(&self) -> NaiveTime {
        NaiveTime::MIN
    }
}

impl CalendarValue for NaiveDateTime {
    fn date(&self) -> NaiveDate {
        NaiveDateTime::date(self)
    }

    fn time(&self) -> NaiveTime {
        NaiveDateTime::time(self)
    }
}

/// Render `value` with the pattern registered under `kind`.
///
/// Fails with [`ConfigError::UnsupportedLocale`] if the pattern needs a
/// month name and the default locale has no month table.
///
/// ```
/// use chrono::NaiveDate;
/// use rechnungswesen::core::*;
///
/// let config = DomainConfig::default_german();
/// let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(format_date(&d, DateFormatKind::Short, &config).unwrap(), "07.03.2024");
/// assert_eq!(format_date(&d, DateFormatKind::Long, &config).unwrap(), "07. März 2024");
/// ```
pub fn format_date<V: CalendarValue + ?Sized>(
    value: &V,
    kind: DateFormatKind,
    config: &DomainConfig,
) -> Result<String, ConfigError> {
    format_pattern(value, config.date_formats().get(kind), config.default_locale())
}

/// Like [`format_date`], with the kind given by its configuration key
/// ("short", "long", "time", "dateTime").
pub fn format_date_named<V: CalendarValue + ?Sized>(
    value: &V,
    kind: &str,
    config: &DomainConfig,
) -> Result<String, ConfigError> {
    format_date(value, kind.parse()?, config)
}

/// Apply an arbitrary pattern in `locale`.
pub fn format_pattern<V: CalendarValue + ?Sized>(
    value: &V,
    pattern: &str,
    locale: &str,
) -> Result<String, ConfigError> {
    let date = value.date();
    let time = value.time();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if let Some(r) = rest.strip_prefix("YYYY") {
            out.push_str(&format!("{:04}", date.year()));
            rest = r;
        } else if let Some(r) = rest.strip_prefix("MMMM") {
            let names = month_names(locale)
                .ok_or_else(|| ConfigError::UnsupportedLocale(locale.to_string()))?;
            out.push_str(names[date.month0() as usize]);
            rest = r;
        } else if let Some(r) = rest.strip_prefix("MM") {
            out.push_str(&format!("{:02}", date.month()));
            rest = r;
        } else if let Some(r) = rest.strip_prefix("DD") {
            out.push_str(&format!("{:02}", date.day()));
            rest = r;
        } else if let Some(r) = rest.strip_prefix("HH") {
            out.push_str(&format!("{:02}", time.hour()));
            rest = r;
        } else if let Some(r) = rest.strip_prefix("mm") {
            out.push_str(&format!("{:02}", time.minute()));
            rest = r;
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    Ok(out)
}

/// Full month names for `locale`, matched on the primary language subtag
/// ("de", "de-DE" and "de_AT" all select German).
pub fn month_names(locale: &str) -> Option<&'static [&'static str; 12]> {
    let language = locale.split(['-', '_']).next().unwrap_or(locale);
    match language {
        "de" => Some(&MONTHS_DE),
        "en" => Some(&MONTHS_EN),
        _ => None,
    }
}

static MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

static MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn all_kinds_german() {
        let config = DomainConfig::default_german();
        let v = dt(2024, 3, 7, 9, 5);
        assert_eq!(format_date(&v, DateFormatKind::Short, &config).unwrap(), "07.03.2024");
        assert_eq!(format_date(&v, DateFormatKind::Long, &config).unwrap(), "07. März 2024");
        assert_eq!(format_date(&v, DateFormatKind::Time, &config).unwrap(), "09:05");
        assert_eq!(
            format_date(&v, DateFormatKind::DateTime, &config).unwrap(),
            "07.03.2024 09:05"
        );
    }

    #[test]
    fn plain_date_is_midnight() {
        let config = DomainConfig::default_german();
        let d = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_date(&d, DateFormatKind::Time, &config).unwrap(), "00:00");
        assert_eq!(format_date(&d, DateFormatKind::Long, &config).unwrap(), "31. Dezember 2024");
    }

    #[test]
    fn named_kind() {
        let config = DomainConfig::default_german();
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date_named(&d, "short", &config).unwrap(), "07.03.2024");
        assert_eq!(
            format_date_named(&d, "medium", &config),
            Err(ConfigError::UnknownFormatKind("medium".into()))
        );
    }

    #[test]
    fn literals_pass_through() {
        let d = NaiveDate::from_ymd_opt(987, 1, 2).unwrap();
        assert_eq!(format_pattern(&d, "[YYYY/MM/DD] Uhr", "de").unwrap(), "[0987/01/02] Uhr");
    }

    #[test]
    fn unsupported_locale_only_when_month_name_needed() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_pattern(&d, "DD.MM.YYYY", "fr").unwrap(), "07.03.2024");
        assert_eq!(
            format_pattern(&d, "DD MMMM YYYY", "fr"),
            Err(ConfigError::UnsupportedLocale("fr".into()))
        );
    }

    #[test]
    fn locale_subtags() {
        assert_eq!(month_names("de-AT").map(|m| m[2]), Some("März"));
        assert_eq!(month_names("en_GB").map(|m| m[4]), Some("May"));
        assert!(month_names("").is_none());
    }
}
