//! # rechnungswesen
//!
//! Domain configuration and German localization for an invoicing and
//! accounting application: currency and date formatting, the VAT rate
//! catalog, recurring-invoice intervals, and the controlled vocabularies for
//! invoice status, payment status, payment method and unit of measure.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! The configuration is built once through a validating factory and is
//! read-only afterwards, so it can be shared freely between threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rechnungswesen::core::*;
//! use rust_decimal_macros::dec;
//!
//! let config = DomainConfig::load(ConfigOverrides::from_env()).unwrap();
//!
//! assert_eq!(format_currency(dec!(1234.5), &config), "1.234,50 €");
//!
//! let issued = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
//! assert_eq!(format_date(&issued, DateFormatKind::Short, &config).unwrap(), "07.03.2024");
//!
//! let paid = config.resolve(Vocabulary::InvoiceStatus, "bezahlt").unwrap();
//! assert_eq!(paid.label(), "Bezahlt");
//! assert_eq!(paid.color(), Some("green"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Configuration, formatters, vocabularies, numbering |
//! | `toml` | Load [`core::ConfigOverrides`] from a TOML document |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
