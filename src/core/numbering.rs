use chrono::{Datelike, NaiveDate};

use super::error::ConfigError;

/// Gapless monthly invoice number sequence.
///
/// Issues numbers of the form `{year}-{month}-{sequential}`, e.g.
/// "2024-03-0001", "2024-03-0002", restarting at 1 with each new month.
/// German tax law (§14 UStG, GoBD) requires numbers to be unique and
/// sequential; this struct only moves forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceNumberSequence {
    year: i32,
    month: u32,
    next: u32,
    width: usize,
}

impl InvoiceNumberSequence {
    /// Start a sequence at 1 for the month containing `date`.
    pub fn for_month(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            next: 1,
            width: 4,
        }
    }

    /// Continue after the last number issued in the month of `date`.
    ///
    /// `last` is the most recent number, e.g. "2024-03-0041". It must
    /// belong to the same month and end in plain digits; `None` starts at 1.
    pub fn after_last(date: NaiveDate, last: Option<&str>) -> Result<Self, ConfigError> {
        let mut seq = Self::for_month(date);
        if let Some(last) = last {
            let Some(counter) = last.strip_prefix(&seq.prefix()) else {
                return Err(ConfigError::Numbering(format!(
                    "'{last}' does not belong to {}",
                    seq.prefix().trim_end_matches('-')
                )));
            };
            let no_counter = || ConfigError::Numbering(format!("'{last}' has no numeric counter"));
            if counter.is_empty() || !counter.bytes().all(|b| b.is_ascii_digit()) {
                return Err(no_counter());
            }
            let n: u32 = counter.parse().map_err(|_| no_counter())?;
            seq.next = n
                .checked_add(1)
                .ok_or_else(|| ConfigError::Numbering(format!("'{last}' exhausts the counter")))?;
        }
        Ok(seq)
    }

    /// Set zero-padding width of the counter (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Issue the next number.
    ///
    /// Fails without consuming anything once the counter is exhausted.
    pub fn next_number(&mut self) -> Result<String, ConfigError> {
        let following = self.next.checked_add(1).ok_or_else(|| {
            ConfigError::Numbering(format!("counter exhausted in {}", self.month_label()))
        })?;
        let number = self.peek();
        self.next = following;
        Ok(number)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        format!("{}{:0>width$}", self.prefix(), self.next, width = self.width)
    }

    /// "YYYY-MM-" for the current month.
    pub fn prefix(&self) -> String {
        format!("{}-", self.month_label())
    }

    fn month_label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }

    /// Counter value the next number will carry.
    pub fn next_raw(&self) -> u32 {
        self.next
    }

    /// Move to the month containing `date`, resetting the counter.
    ///
    /// Returns true if the month changed. Dates in the current month leave
    /// the sequence untouched; earlier months are rejected.
    pub fn advance_to(&mut self, date: NaiveDate) -> Result<bool, ConfigError> {
        let target = (date.year(), date.month());
        let current = (self.year, self.month);
        if target < current {
            return Err(ConfigError::Numbering(format!(
                "{}-{:02} is before the current sequence month {}",
                target.0,
                target.1,
                self.month_label()
            )));
        }
        if target == current {
            return Ok(false);
        }
        self.year = target.0;
        self.month = target.1;
        self.next = 1;
        Ok(true)
    }
}
