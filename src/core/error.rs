use thiserror::Error;

use super::vocabulary::Vocabulary;

/// Errors raised while building or interpreting the domain configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration violates one or more construction rules.
    /// Fatal at startup.
    #[error("invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),

    /// A date format kind other than short, long, time or dateTime.
    #[error("unknown date format kind '{0}'")]
    UnknownFormatKind(String),

    /// No month-name table exists for the configured locale.
    #[error("unsupported locale '{0}': no month names available")]
    UnsupportedLocale(String),

    /// A code that is not a member of the named vocabulary.
    #[error("unknown {vocabulary} code '{code}'")]
    UnknownCode {
        /// Catalog the lookup ran against.
        vocabulary: Vocabulary,
        /// The rejected code, verbatim.
        code: String,
    },

    /// A currency string that does not follow the configured format.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    /// An invoice number sequence cannot continue as requested.
    /// Recoverable; unrelated to configuration validity.
    #[error("invoice numbering: {0}")]
    Numbering(String),

    /// An override document could not be parsed.
    #[error("overrides error: {0}")]
    Overrides(String),

    /// The process-wide configuration was installed more than once.
    #[error("configuration already initialized")]
    AlreadyInitialized,
}

impl ConfigError {
    /// Violations carried by an [`ConfigError::Invalid`], empty otherwise.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(v) => v,
            _ => &[],
        }
    }
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single broken construction rule with the field path it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigViolation {
    /// Path to the offending field (e.g. "currencyFormat.thousandsSeparator").
    pub field: String,
    /// Human-readable description of the violated rule.
    pub rule: String,
}

impl std::fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}

impl ConfigViolation {
    pub fn new(field: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
        }
    }
}
