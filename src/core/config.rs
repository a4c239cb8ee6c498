use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::currency::is_known_currency_code;
use super::error::{ConfigError, ConfigViolation};
use super::types::*;
use super::vocabulary::{self, Catalog, CatalogEntry, Vocabulary, unknown_code};

/// Endpoint used when no override is supplied.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable consulted by [`ConfigOverrides::from_env`].
pub const API_BASE_URL_ENV: &str = "APP_API_BASE_URL";

/// Externally supplied values merged over the built-in German defaults.
///
/// Every field is optional; a `Some` replaces the default wholesale
/// (catalogs and date formats are never merged entry by entry).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub app_name: Option<String>,
    pub default_locale: Option<String>,
    pub available_locales: Option<Vec<String>>,
    /// Raw key → pattern map; must contain exactly short, long, time, dateTime.
    pub date_formats: Option<BTreeMap<String, String>>,
    pub currency_format: Option<CurrencyFormat>,
    pub vat_rates: Option<Vec<VatRate>>,
    pub recurring_intervals: Option<Vec<LabeledEntry>>,
    pub invoice_status: Option<Vec<StatusEntry>>,
    pub payment_status: Option<Vec<StatusEntry>>,
    pub payment_methods: Option<Vec<LabeledEntry>>,
    pub default_units: Option<Vec<LabeledEntry>>,
    pub default_payment_terms: Option<String>,
    pub default_invoice_footer: Option<String>,
    pub payment_term_days: Option<u32>,
}

impl ConfigOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the API endpoint from [`API_BASE_URL_ENV`].
    ///
    /// An unset or blank variable leaves the default endpoint in place.
    pub fn from_env() -> Self {
        let api_base_url = std::env::var(API_BASE_URL_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        if api_base_url.is_none() {
            tracing::debug!(
                var = API_BASE_URL_ENV,
                default = DEFAULT_API_BASE_URL,
                "API endpoint not set in environment"
            );
        }
        Self {
            api_base_url,
            ..Self::default()
        }
    }

    /// Parse overrides from a TOML document using the camelCase field names.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Overrides(e.to_string()))
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Set the default locale together with the available set.
    pub fn locales<I, S>(mut self, default: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_locale = Some(default.into());
        self.available_locales = Some(available.into_iter().map(Into::into).collect());
        self
    }

    pub fn date_formats<I, K, V>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.date_formats = Some(
            formats
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn currency_format(mut self, format: CurrencyFormat) -> Self {
        self.currency_format = Some(format);
        self
    }

    pub fn vat_rates(mut self, rates: Vec<VatRate>) -> Self {
        self.vat_rates = Some(rates);
        self
    }

    pub fn recurring_intervals(mut self, entries: Vec<LabeledEntry>) -> Self {
        self.recurring_intervals = Some(entries);
        self
    }

    pub fn invoice_status(mut self, entries: Vec<StatusEntry>) -> Self {
        self.invoice_status = Some(entries);
        self
    }

    pub fn payment_status(mut self, entries: Vec<StatusEntry>) -> Self {
        self.payment_status = Some(entries);
        self
    }

    pub fn payment_methods(mut self, entries: Vec<LabeledEntry>) -> Self {
        self.payment_methods = Some(entries);
        self
    }

    pub fn default_units(mut self, entries: Vec<LabeledEntry>) -> Self {
        self.default_units = Some(entries);
        self
    }

    pub fn default_payment_terms(mut self, text: impl Into<String>) -> Self {
        self.default_payment_terms = Some(text.into());
        self
    }

    pub fn default_invoice_footer(mut self, text: impl Into<String>) -> Self {
        self.default_invoice_footer = Some(text.into());
        self
    }

    pub fn payment_term_days(mut self, days: u32) -> Self {
        self.payment_term_days = Some(days);
        self
    }
}

/// Immutable application configuration: vocabularies and formatting rules.
///
/// Only obtainable through [`DomainConfig::load`] (or the defaults), so every
/// instance in circulation has passed [`DomainConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfig {
    api_base_url: String,
    app_name: String,
    default_locale: String,
    available_locales: BTreeSet<String>,
    date_formats: DateFormats,
    currency_format: CurrencyFormat,
    vat_rates: Catalog<VatRate>,
    recurring_intervals: Catalog<LabeledEntry>,
    invoice_status: Catalog<StatusEntry>,
    payment_status: Catalog<StatusEntry>,
    payment_methods: Catalog<LabeledEntry>,
    default_units: Catalog<LabeledEntry>,
    default_payment_terms: String,
    default_invoice_footer: String,
    payment_term_days: u32,
}

static GLOBAL: OnceLock<DomainConfig> = OnceLock::new();

/// Build the process-wide configuration and install it.
///
/// Fails with [`ConfigError::AlreadyInitialized`] on any call after the
/// first successful one; the installed value is never replaced.
pub fn init(overrides: ConfigOverrides) -> Result<&'static DomainConfig, ConfigError> {
    let config = DomainConfig::load(overrides)?;
    let mut installed = false;
    let global = GLOBAL.get_or_init(|| {
        installed = true;
        config
    });
    if installed {
        Ok(global)
    } else {
        Err(ConfigError::AlreadyInitialized)
    }
}

/// The process-wide configuration, if [`init`] has run.
pub fn global() -> Option<&'static DomainConfig> {
    GLOBAL.get()
}

impl DomainConfig {
    /// Merge `overrides` over the German defaults and validate the result.
    pub fn load(overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let defaults = Self::default_german();
        tracing::debug!(?overrides, "merging configuration overrides");

        let mut violations = Vec::new();
        let date_formats = match overrides.date_formats {
            Some(raw) => match date_formats_from_map(&raw) {
                Ok(formats) => formats,
                Err(mut v) => {
                    violations.append(&mut v);
                    defaults.date_formats.clone()
                }
            },
            None => defaults.date_formats.clone(),
        };

        let config = Self {
            api_base_url: overrides.api_base_url.unwrap_or(defaults.api_base_url),
            app_name: overrides.app_name.unwrap_or(defaults.app_name),
            default_locale: overrides.default_locale.unwrap_or(defaults.default_locale),
            available_locales: overrides
                .available_locales
                .map(|l| l.into_iter().collect())
                .unwrap_or(defaults.available_locales),
            date_formats,
            currency_format: overrides.currency_format.unwrap_or(defaults.currency_format),
            vat_rates: overrides.vat_rates.map(Catalog::new).unwrap_or(defaults.vat_rates),
            recurring_intervals: overrides
                .recurring_intervals
                .map(Catalog::new)
                .unwrap_or(defaults.recurring_intervals),
            invoice_status: overrides
                .invoice_status
                .map(Catalog::new)
                .unwrap_or(defaults.invoice_status),
            payment_status: overrides
                .payment_status
                .map(Catalog::new)
                .unwrap_or(defaults.payment_status),
            payment_methods: overrides
                .payment_methods
                .map(Catalog::new)
                .unwrap_or(defaults.payment_methods),
            default_units: overrides
                .default_units
                .map(Catalog::new)
                .unwrap_or(defaults.default_units),
            default_payment_terms: overrides
                .default_payment_terms
                .unwrap_or(defaults.default_payment_terms),
            default_invoice_footer: overrides
                .default_invoice_footer
                .unwrap_or(defaults.default_invoice_footer),
            payment_term_days: overrides
                .payment_term_days
                .unwrap_or(defaults.payment_term_days),
        };

        violations.extend(config.validate());
        if !violations.is_empty() {
            for v in &violations {
                tracing::warn!(field = %v.field, rule = %v.rule, "configuration rule violated");
            }
            return Err(ConfigError::Invalid(violations));
        }

        tracing::info!(
            app = %config.app_name,
            locale = %config.default_locale,
            currency = %config.currency_format.currency,
            api = %config.api_base_url,
            "domain configuration loaded"
        );
        Ok(config)
    }

    /// The built-in German-market configuration.
    pub fn default_german() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            app_name: "Buchhaltungssoftware".to_string(),
            default_locale: "de".to_string(),
            available_locales: BTreeSet::from(["de".to_string()]),
            date_formats: DateFormats {
                short: "DD.MM.YYYY".into(),
                long: "DD. MMMM YYYY".into(),
                time: "HH:mm".into(),
                date_time: "DD.MM.YYYY HH:mm".into(),
            },
            currency_format: CurrencyFormat {
                currency: "EUR".into(),
                symbol: "€".into(),
                decimal_separator: ',',
                thousands_separator: '.',
                symbol_position: SymbolPosition::After,
                format: "{value} {symbol}".into(),
            },
            vat_rates: Catalog::new(vec![
                VatRate::new(19, "19% (Standard)"),
                VatRate::new(7, "7% (Ermäßigt)"),
                VatRate::new(0, "0% (Steuerfrei)"),
            ]),
            recurring_intervals: RecurringInterval::ALL.iter().map(|i| i.entry()).collect(),
            invoice_status: InvoiceStatus::ALL.iter().map(|s| s.entry()).collect(),
            payment_status: PaymentStatus::ALL.iter().map(|s| s.entry()).collect(),
            payment_methods: PaymentMethod::ALL.iter().map(|m| m.entry()).collect(),
            default_units: Unit::ALL.iter().map(|u| u.entry()).collect(),
            default_payment_terms: "Zahlbar innerhalb von 14 Tagen ohne Abzug.".into(),
            default_invoice_footer: "Vielen Dank für Ihr Vertrauen. Bei Fragen stehen wir \
                                     Ihnen gerne zur Verfügung."
                .into(),
            payment_term_days: 14,
        }
    }

    /// Check every construction rule and return all violations.
    ///
    /// An empty list means the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigViolation> {
        let mut errors = Vec::new();

        if !self.available_locales.contains(&self.default_locale) {
            errors.push(ConfigViolation::new(
                "defaultLocale",
                format!(
                    "'{}' must be one of availableLocales",
                    self.default_locale
                ),
            ));
        }

        let cf = &self.currency_format;
        if cf.decimal_separator == cf.thousands_separator {
            errors.push(ConfigViolation::new(
                "currencyFormat.thousandsSeparator",
                format!(
                    "must differ from decimalSeparator ('{}')",
                    cf.decimal_separator
                ),
            ));
        }
        if cf.decimal_separator.is_ascii_digit() || cf.thousands_separator.is_ascii_digit() {
            errors.push(ConfigViolation::new(
                "currencyFormat",
                "separators must not be digits",
            ));
        }
        if !is_known_currency_code(&cf.currency) {
            errors.push(ConfigViolation::new(
                "currencyFormat.currency",
                format!("'{}' is not a known ISO 4217 code", cf.currency),
            ));
        }
        match (cf.format.find("{value}"), cf.format.find("{symbol}")) {
            (None, _) => errors.push(ConfigViolation::new(
                "currencyFormat.format",
                "must contain the {value} placeholder",
            )),
            (Some(value_at), Some(symbol_at)) => {
                let symbol_first = symbol_at < value_at;
                if symbol_first != (cf.symbol_position == SymbolPosition::Before) {
                    errors.push(ConfigViolation::new(
                        "currencyFormat.symbolPosition",
                        "does not match the placeholder order in format",
                    ));
                }
            }
            (Some(_), None) => {}
        }

        if self.vat_rates.is_empty() {
            errors.push(ConfigViolation::new("vatRates", "must not be empty"));
        }
        for (i, rate) in self.vat_rates.iter().enumerate() {
            if rate.value > 100 {
                errors.push(ConfigViolation::new(
                    format!("vatRates[{i}].value"),
                    format!("{} exceeds 100 percent", rate.value),
                ));
            }
        }

        check_unique(&mut errors, Vocabulary::VatRates, &self.vat_rates);
        check_unique(&mut errors, Vocabulary::RecurringIntervals, &self.recurring_intervals);
        check_unique(&mut errors, Vocabulary::InvoiceStatus, &self.invoice_status);
        check_unique(&mut errors, Vocabulary::PaymentStatus, &self.payment_status);
        check_unique(&mut errors, Vocabulary::PaymentMethods, &self.payment_methods);
        check_unique(&mut errors, Vocabulary::Units, &self.default_units);

        if self.payment_term_days == 0 {
            errors.push(ConfigViolation::new(
                "paymentTermDays",
                "must be at least one day",
            ));
        }

        errors
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn available_locales(&self) -> &BTreeSet<String> {
        &self.available_locales
    }

    pub fn date_formats(&self) -> &DateFormats {
        &self.date_formats
    }

    pub fn currency_format(&self) -> &CurrencyFormat {
        &self.currency_format
    }

    pub fn vat_rates(&self) -> &Catalog<VatRate> {
        &self.vat_rates
    }

    pub fn recurring_intervals(&self) -> &Catalog<LabeledEntry> {
        &self.recurring_intervals
    }

    pub fn invoice_status(&self) -> &Catalog<StatusEntry> {
        &self.invoice_status
    }

    pub fn payment_status(&self) -> &Catalog<StatusEntry> {
        &self.payment_status
    }

    pub fn payment_methods(&self) -> &Catalog<LabeledEntry> {
        &self.payment_methods
    }

    pub fn default_units(&self) -> &Catalog<LabeledEntry> {
        &self.default_units
    }

    pub fn default_payment_terms(&self) -> &str {
        &self.default_payment_terms
    }

    pub fn default_invoice_footer(&self) -> &str {
        &self.default_invoice_footer
    }

    pub fn payment_term_days(&self) -> u32 {
        self.payment_term_days
    }

    /// Due date for an invoice issued on `issue_date` under the default terms.
    pub fn due_date(&self, issue_date: NaiveDate) -> Option<NaiveDate> {
        issue_date.checked_add_days(Days::new(u64::from(self.payment_term_days)))
    }

    /// See [`vocabulary::resolve`].
    pub fn resolve(
        &self,
        vocabulary: Vocabulary,
        code: &str,
    ) -> Result<&dyn CatalogEntry, ConfigError> {
        vocabulary::resolve(self, vocabulary, code)
    }

    /// Accept `code` only if it is both configured and a known invoice status.
    pub fn parse_invoice_status(&self, code: &str) -> Result<InvoiceStatus, ConfigError> {
        self.invoice_status
            .find(code)
            .and_then(|e| InvoiceStatus::from_code(&e.value))
            .ok_or_else(|| unknown_code(Vocabulary::InvoiceStatus, code))
    }

    pub fn parse_payment_status(&self, code: &str) -> Result<PaymentStatus, ConfigError> {
        self.payment_status
            .find(code)
            .and_then(|e| PaymentStatus::from_code(&e.value))
            .ok_or_else(|| unknown_code(Vocabulary::PaymentStatus, code))
    }

    pub fn parse_payment_method(&self, code: &str) -> Result<PaymentMethod, ConfigError> {
        self.payment_methods
            .find(code)
            .and_then(|e| PaymentMethod::from_code(&e.value))
            .ok_or_else(|| unknown_code(Vocabulary::PaymentMethods, code))
    }

    pub fn parse_unit(&self, code: &str) -> Result<Unit, ConfigError> {
        self.default_units
            .find(code)
            .and_then(|e| Unit::from_code(&e.value))
            .ok_or_else(|| unknown_code(Vocabulary::Units, code))
    }

    pub fn parse_recurring_interval(&self, code: &str) -> Result<RecurringInterval, ConfigError> {
        self.recurring_intervals
            .find(code)
            .and_then(|e| RecurringInterval::from_code(&e.value))
            .ok_or_else(|| unknown_code(Vocabulary::RecurringIntervals, code))
    }

    /// Accept a VAT percentage only if it is in the configured catalog.
    pub fn vat_rate(&self, percent: u8) -> Result<&VatRate, ConfigError> {
        self.vat_rates
            .iter()
            .find(|r| r.value == percent)
            .ok_or_else(|| unknown_code(Vocabulary::VatRates, &percent.to_string()))
    }
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self::default_german()
    }
}

fn check_unique<E: CatalogEntry>(
    errors: &mut Vec<ConfigViolation>,
    vocabulary: Vocabulary,
    catalog: &Catalog<E>,
) {
    for code in catalog.duplicate_codes() {
        errors.push(ConfigViolation::new(
            vocabulary.field(),
            format!("duplicate value '{code}'"),
        ));
    }
}

fn date_formats_from_map(
    raw: &BTreeMap<String, String>,
) -> Result<DateFormats, Vec<ConfigViolation>> {
    let mut errors = Vec::new();
    for key in raw.keys() {
        if key.parse::<DateFormatKind>().is_err() {
            errors.push(ConfigViolation::new(
                format!("dateFormats.{key}"),
                "not a recognized format kind",
            ));
        }
    }
    let mut pattern = |kind: DateFormatKind| match raw.get(kind.key()) {
        Some(p) => p.clone(),
        None => {
            errors.push(ConfigViolation::new(
                format!("dateFormats.{}", kind.key()),
                "required key is missing",
            ));
            String::new()
        }
    };
    let formats = DateFormats {
        short: pattern(DateFormatKind::Short),
        long: pattern(DateFormatKind::Long),
        time: pattern(DateFormatKind::Time),
        date_time: pattern(DateFormatKind::DateTime),
    };
    if errors.is_empty() {
        Ok(formats)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(err: &ConfigError) -> Vec<&str> {
        err.violations().iter().map(|v| v.field.as_str()).collect()
    }

    #[test]
    fn defaults_are_valid() {
        assert!(DomainConfig::default_german().validate().is_empty());
    }

    #[test]
    fn load_without_overrides_equals_defaults() {
        let config = DomainConfig::load(ConfigOverrides::new()).unwrap();
        assert_eq!(config, DomainConfig::default_german());
        assert_eq!(config.api_base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn api_override_applies() {
        let config =
            DomainConfig::load(ConfigOverrides::new().api_base_url("https://erp.example/api"))
                .unwrap();
        assert_eq!(config.api_base_url(), "https://erp.example/api");
        assert_eq!(config.app_name(), "Buchhaltungssoftware");
    }

    #[test]
    fn default_locale_must_be_available() {
        let err = DomainConfig::load(ConfigOverrides::new().locales("en", ["de"])).unwrap_err();
        assert_eq!(fields(&err), vec!["defaultLocale"]);
    }

    #[test]
    fn partial_date_formats_rejected() {
        let err = DomainConfig::load(
            ConfigOverrides::new().date_formats([("short", "DD.MM.YYYY"), ("long", "DD. MMMM YYYY")]),
        )
        .unwrap_err();
        assert_eq!(fields(&err), vec!["dateFormats.time", "dateFormats.dateTime"]);
    }

    #[test]
    fn unknown_date_format_key_rejected() {
        let err = DomainConfig::load(ConfigOverrides::new().date_formats([
            ("short", "DD.MM.YYYY"),
            ("long", "DD. MMMM YYYY"),
            ("time", "HH:mm"),
            ("dateTime", "DD.MM.YYYY HH:mm"),
            ("iso", "YYYY-MM-DD"),
        ]))
        .unwrap_err();
        assert_eq!(fields(&err), vec!["dateFormats.iso"]);
    }

    #[test]
    fn all_violations_collected() {
        let mut cf = DomainConfig::default_german().currency_format().clone();
        cf.thousands_separator = ',';
        cf.currency = "XXY".into();
        let err = DomainConfig::load(
            ConfigOverrides::new()
                .currency_format(cf)
                .vat_rates(vec![])
                .payment_term_days(0),
        )
        .unwrap_err();
        assert_eq!(
            fields(&err),
            vec![
                "currencyFormat.thousandsSeparator",
                "currencyFormat.currency",
                "vatRates",
                "paymentTermDays",
            ]
        );
    }

    #[test]
    fn symbol_position_must_match_template() {
        let mut cf = DomainConfig::default_german().currency_format().clone();
        cf.symbol_position = SymbolPosition::Before;
        let err = DomainConfig::load(ConfigOverrides::new().currency_format(cf)).unwrap_err();
        assert_eq!(fields(&err), vec!["currencyFormat.symbolPosition"]);
    }

    #[test]
    fn template_without_value_rejected() {
        let mut cf = DomainConfig::default_german().currency_format().clone();
        cf.format = "{symbol}".into();
        let err = DomainConfig::load(ConfigOverrides::new().currency_format(cf)).unwrap_err();
        assert_eq!(fields(&err), vec!["currencyFormat.format"]);
    }

    #[test]
    fn vat_rate_above_hundred_rejected() {
        let err = DomainConfig::load(
            ConfigOverrides::new().vat_rates(vec![VatRate::new(19, "19%"), VatRate::new(150, "150%")]),
        )
        .unwrap_err();
        assert_eq!(fields(&err), vec!["vatRates[1].value"]);
    }

    #[test]
    fn duplicate_codes_rejected_per_catalog() {
        let err = DomainConfig::load(
            ConfigOverrides::new()
                .vat_rates(vec![VatRate::new(7, "7%"), VatRate::new(7, "sieben")])
                .default_units(vec![
                    LabeledEntry::new("kg", "Kilogramm"),
                    LabeledEntry::new("kg", "Kilo"),
                ]),
        )
        .unwrap_err();
        assert_eq!(fields(&err), vec!["vatRates", "defaultUnits"]);
        assert!(err.violations()[1].rule.contains("'kg'"));
    }

    #[test]
    fn due_date_uses_payment_terms() {
        let config = DomainConfig::default_german();
        let issued = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        assert_eq!(config.due_date(issued), NaiveDate::from_ymd_opt(2025, 1, 3));
    }

    #[test]
    fn typed_parse_goes_through_catalog() {
        let config = DomainConfig::load(
            ConfigOverrides::new().payment_methods(vec![PaymentMethod::BankTransfer.entry()]),
        )
        .unwrap();
        assert_eq!(
            config.parse_payment_method("Überweisung").unwrap(),
            PaymentMethod::BankTransfer
        );
        // Known to the enum but removed from the configured catalog.
        assert!(matches!(
            config.parse_payment_method("PayPal"),
            Err(ConfigError::UnknownCode { vocabulary: Vocabulary::PaymentMethods, .. })
        ));
    }

    #[test]
    fn custom_catalog_code_without_enum_variant_is_rejected_by_typed_parse() {
        let mut statuses: Vec<StatusEntry> = InvoiceStatus::ALL.iter().map(|s| s.entry()).collect();
        statuses.push(StatusEntry::new("gemahnt", "Gemahnt", "purple"));
        let config = DomainConfig::load(ConfigOverrides::new().invoice_status(statuses)).unwrap();
        assert!(config.resolve(Vocabulary::InvoiceStatus, "gemahnt").is_ok());
        assert!(config.parse_invoice_status("gemahnt").is_err());
    }

    #[test]
    fn vat_rate_lookup() {
        let config = DomainConfig::default_german();
        assert_eq!(config.vat_rate(7).unwrap().label, "7% (Ermäßigt)");
        assert!(config.vat_rate(16).is_err());
    }
}
