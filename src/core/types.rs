use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Entry of a vocabulary that only carries a display label
/// (recurring intervals, payment methods, units).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledEntry {
    pub value: String,
    pub label: String,
}

impl LabeledEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Entry of a status vocabulary: code, label and the UI color used for badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub value: String,
    pub label: String,
    pub color: String,
}

impl StatusEntry {
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            color: color.into(),
        }
    }
}

/// A selectable VAT rate in whole percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatRate {
    /// Percentage, 0..=100.
    pub value: u8,
    pub label: String,
}

impl VatRate {
    pub fn new(value: u8, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// The rate as a decimal percentage (e.g. `19`), suitable for tax arithmetic.
    pub fn percent(&self) -> Decimal {
        Decimal::from(self.value)
    }
}

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

/// Rules for rendering monetary amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// ISO 4217 code, e.g. "EUR".
    pub currency: String,
    pub symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: char,
    pub symbol_position: SymbolPosition,
    /// Template with `{value}` and `{symbol}` placeholders.
    pub format: String,
}

/// The four named date/time patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFormats {
    pub short: String,
    pub long: String,
    pub time: String,
    pub date_time: String,
}

impl DateFormats {
    /// Pattern registered for `kind`.
    pub fn get(&self, kind: DateFormatKind) -> &str {
        match kind {
            DateFormatKind::Short => &self.short,
            DateFormatKind::Long => &self.long,
            DateFormatKind::Time => &self.time,
            DateFormatKind::DateTime => &self.date_time,
        }
    }
}

/// Key into [`DateFormats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFormatKind {
    Short,
    Long,
    Time,
    DateTime,
}

impl DateFormatKind {
    pub const ALL: [Self; 4] = [Self::Short, Self::Long, Self::Time, Self::DateTime];

    /// Configuration key ("short", "long", "time", "dateTime").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Long => "long",
            Self::Time => "time",
            Self::DateTime => "dateTime",
        }
    }
}

impl FromStr for DateFormatKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| ConfigError::UnknownFormatKind(s.to_string()))
    }
}

/// Invoice lifecycle stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Drafted, not yet sent.
    #[default]
    Created,
    Sent,
    Paid,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [Self; 4] = [Self::Created, Self::Sent, Self::Paid, Self::Cancelled];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Created => "erstellt",
            Self::Sent => "versendet",
            Self::Paid => "bezahlt",
            Self::Cancelled => "storniert",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "erstellt" => Some(Self::Created),
            "versendet" => Some(Self::Sent),
            "bezahlt" => Some(Self::Paid),
            "storniert" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "Erstellt",
            Self::Sent => "Versendet",
            Self::Paid => "Bezahlt",
            Self::Cancelled => "Storniert",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Created => "blue",
            Self::Sent => "orange",
            Self::Paid => "green",
            Self::Cancelled => "red",
        }
    }

    pub fn entry(&self) -> StatusEntry {
        StatusEntry::new(self.code(), self.label(), self.color())
    }
}

/// How much of an invoice has been paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Open,
    PartiallyPaid,
    FullyPaid,
}

impl PaymentStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::PartiallyPaid, Self::FullyPaid];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Open => "offen",
            Self::PartiallyPaid => "teilweise bezahlt",
            Self::FullyPaid => "vollständig bezahlt",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "offen" => Some(Self::Open),
            "teilweise bezahlt" => Some(Self::PartiallyPaid),
            "vollständig bezahlt" => Some(Self::FullyPaid),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Offen",
            Self::PartiallyPaid => "Teilweise bezahlt",
            Self::FullyPaid => "Vollständig bezahlt",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Open => "orange",
            Self::PartiallyPaid => "blue",
            Self::FullyPaid => "green",
        }
    }

    pub fn entry(&self) -> StatusEntry {
        StatusEntry::new(self.code(), self.label(), self.color())
    }

    /// Derive the payment status from the amount received so far.
    ///
    /// Nothing (or a net refund) received is open; anything short of the
    /// gross total is partial; reaching or exceeding it is fully paid.
    pub fn from_amounts(paid: Decimal, gross_total: Decimal) -> Self {
        if paid <= Decimal::ZERO {
            Self::Open
        } else if paid < gross_total {
            Self::PartiallyPaid
        } else {
            Self::FullyPaid
        }
    }
}

/// Accepted means of payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    BankTransfer,
    DirectDebit,
    CreditCard,
    PayPal,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [Self; 5] = [
        Self::BankTransfer,
        Self::DirectDebit,
        Self::CreditCard,
        Self::PayPal,
        Self::Cash,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::BankTransfer => "Überweisung",
            Self::DirectDebit => "Lastschrift",
            Self::CreditCard => "Kreditkarte",
            Self::PayPal => "PayPal",
            Self::Cash => "Bar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Überweisung" => Some(Self::BankTransfer),
            "Lastschrift" => Some(Self::DirectDebit),
            "Kreditkarte" => Some(Self::CreditCard),
            "PayPal" => Some(Self::PayPal),
            "Bar" => Some(Self::Cash),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Barzahlung",
            other => other.code(),
        }
    }

    pub fn entry(&self) -> LabeledEntry {
        LabeledEntry::new(self.code(), self.label())
    }
}

/// Unit of measure for invoice line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Piece,
    Hour,
    Day,
    Month,
    Kilogram,
    Litre,
    Metre,
    SquareMetre,
    LumpSum,
}

impl Unit {
    pub const ALL: [Self; 9] = [
        Self::Piece,
        Self::Hour,
        Self::Day,
        Self::Month,
        Self::Kilogram,
        Self::Litre,
        Self::Metre,
        Self::SquareMetre,
        Self::LumpSum,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Piece => "Stück",
            Self::Hour => "Stunde",
            Self::Day => "Tag",
            Self::Month => "Monat",
            Self::Kilogram => "kg",
            Self::Litre => "l",
            Self::Metre => "m",
            Self::SquareMetre => "m²",
            Self::LumpSum => "Pauschal",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Kilogram => "Kilogramm",
            Self::Litre => "Liter",
            Self::Metre => "Meter",
            Self::SquareMetre => "Quadratmeter",
            other => other.code(),
        }
    }

    /// UN/CEFACT Recommendation 20 code used in XRechnung/ZUGFeRD exports.
    pub fn rec20_code(&self) -> &'static str {
        match self {
            Self::Piece => "C62",
            Self::Hour => "HUR",
            Self::Day => "DAY",
            Self::Month => "MON",
            Self::Kilogram => "KGM",
            Self::Litre => "LTR",
            Self::Metre => "MTR",
            Self::SquareMetre => "MTK",
            Self::LumpSum => "LS",
        }
    }

    pub fn entry(&self) -> LabeledEntry {
        LabeledEntry::new(self.code(), self.label())
    }
}

/// Cadence at which a recurring invoice is regenerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurringInterval {
    Monthly,
    Quarterly,
    SemiAnnual,
    Annual,
}

impl RecurringInterval {
    pub const ALL: [Self; 4] = [Self::Monthly, Self::Quarterly, Self::SemiAnnual, Self::Annual];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Monthly => "monatlich",
            Self::Quarterly => "quartalsweise",
            Self::SemiAnnual => "halbjährlich",
            Self::Annual => "jährlich",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "monatlich" => Some(Self::Monthly),
            "quartalsweise" => Some(Self::Quarterly),
            "halbjährlich" => Some(Self::SemiAnnual),
            "jährlich" => Some(Self::Annual),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monthly => "Monatlich",
            Self::Quarterly => "Quartalsweise",
            Self::SemiAnnual => "Halbjährlich",
            Self::Annual => "Jährlich",
        }
    }

    pub fn entry(&self) -> LabeledEntry {
        LabeledEntry::new(self.code(), self.label())
    }
}
