//! Closed vocabularies and the lookup gate for externally supplied codes.
//!
//! Every code that enters the system (status, interval, method, unit, VAT
//! rate) is checked here against the configured catalog before it is stored
//! or displayed. Matching is exact and case-sensitive.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::DomainConfig;
use super::error::ConfigError;
use super::types::{LabeledEntry, StatusEntry, VatRate};

/// Common view over the entries of all catalogs.
pub trait CatalogEntry: fmt::Debug {
    /// The code matched by [`resolve`].
    fn code(&self) -> Cow<'_, str>;
    /// Display label.
    fn label(&self) -> &str;
    /// Badge color, for vocabularies that carry one.
    fn color(&self) -> Option<&str> {
        None
    }
}

impl CatalogEntry for LabeledEntry {
    fn code(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.value)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl CatalogEntry for StatusEntry {
    fn code(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.value)
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn color(&self) -> Option<&str> {
        Some(&self.color)
    }
}

impl CatalogEntry for VatRate {
    fn code(&self) -> Cow<'_, str> {
        Cow::Owned(self.value.to_string())
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// The six catalogs held by [`DomainConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    VatRates,
    RecurringIntervals,
    InvoiceStatus,
    PaymentStatus,
    PaymentMethods,
    Units,
}

impl Vocabulary {
    pub const ALL: [Self; 6] = [
        Self::VatRates,
        Self::RecurringIntervals,
        Self::InvoiceStatus,
        Self::PaymentStatus,
        Self::PaymentMethods,
        Self::Units,
    ];

    /// Configuration field holding this catalog.
    pub fn field(&self) -> &'static str {
        match self {
            Self::VatRates => "vatRates",
            Self::RecurringIntervals => "recurringIntervals",
            Self::InvoiceStatus => "invoiceStatus",
            Self::PaymentStatus => "paymentStatus",
            Self::PaymentMethods => "paymentMethods",
            Self::Units => "defaultUnits",
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Ordered list of entries, serialized as a plain array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog<E> {
    entries: Vec<E>,
}

impl<E> Catalog<E> {
    pub fn new(entries: Vec<E>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: CatalogEntry> Catalog<E> {
    /// Entry whose code equals `code` exactly.
    pub fn find(&self, code: &str) -> Option<&E> {
        self.entries.iter().find(|e| e.code() == code)
    }

    /// Codes that occur more than once, in first-repeat order.
    pub fn duplicate_codes(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for e in &self.entries {
            let code = e.code().into_owned();
            if !seen.insert(code.clone()) && !dupes.contains(&code) {
                dupes.push(code);
            }
        }
        dupes
    }
}

impl<E> FromIterator<E> for Catalog<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, E> IntoIterator for &'a Catalog<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Look up `code` in the named catalog of `config`.
///
/// Returns the full entry (label, and color where the vocabulary has one),
/// or [`ConfigError::UnknownCode`] if the code is not a member.
pub fn resolve<'a>(
    config: &'a DomainConfig,
    vocabulary: Vocabulary,
    code: &str,
) -> Result<&'a dyn CatalogEntry, ConfigError> {
    fn erase<E: CatalogEntry>(entry: Option<&E>) -> Option<&dyn CatalogEntry> {
        entry.map(|e| e as &dyn CatalogEntry)
    }

    let found = match vocabulary {
        Vocabulary::VatRates => erase(config.vat_rates().find(code)),
        Vocabulary::RecurringIntervals => erase(config.recurring_intervals().find(code)),
        Vocabulary::InvoiceStatus => erase(config.invoice_status().find(code)),
        Vocabulary::PaymentStatus => erase(config.payment_status().find(code)),
        Vocabulary::PaymentMethods => erase(config.payment_methods().find(code)),
        Vocabulary::Units => erase(config.default_units().find(code)),
    };
    found.ok_or_else(|| unknown_code(vocabulary, code))
}

pub(crate) fn unknown_code(vocabulary: Vocabulary, code: &str) -> ConfigError {
    ConfigError::UnknownCode {
        vocabulary,
        code: code.to_string(),
    }
}
