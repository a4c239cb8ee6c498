use std::num::NonZeroU32;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::types::RecurringInterval;

impl RecurringInterval {
    /// Length of one interval in calendar months.
    pub fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::SemiAnnual => 6,
            Self::Annual => 12,
        }
    }

    /// The date `multiplier` intervals after `date`.
    ///
    /// Days past the end of the target month are clamped, so a monthly
    /// schedule starting on Jan 31 continues with Feb 29 (or 28).
    /// Returns `None` only when the result leaves chrono's date range.
    pub fn next_date(&self, date: NaiveDate, multiplier: u32) -> Option<NaiveDate> {
        date.checked_add_months(Months::new(self.months().checked_mul(multiplier)?))
    }
}

/// Template for invoices regenerated at a fixed cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringSchedule {
    /// First invoice date.
    pub start: NaiveDate,
    /// Last date on which an invoice may be generated, inclusive.
    pub end: Option<NaiveDate>,
    pub interval: RecurringInterval,
    /// Number of intervals between invoices (e.g. 2 with `Monthly` = every other month).
    #[serde(default = "one")]
    pub multiplier: NonZeroU32,
}

fn one() -> NonZeroU32 {
    NonZeroU32::MIN
}

impl RecurringSchedule {
    pub fn new(start: NaiveDate, interval: RecurringInterval) -> Self {
        Self {
            start,
            end: None,
            interval,
            multiplier: one(),
        }
    }

    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Invoice every `multiplier` intervals; 0 is treated as 1.
    pub fn every(mut self, multiplier: u32) -> Self {
        self.multiplier = NonZeroU32::new(multiplier).unwrap_or(one());
        self
    }

    /// Whether an invoice scheduled for `next` must be generated on `today`.
    pub fn is_due(&self, today: NaiveDate, next: NaiveDate) -> bool {
        next <= today && self.end.is_none_or(|end| end >= today)
    }

    /// The first scheduled date after `current`.
    ///
    /// Dates are derived from `start`, like [`Self::occurrences`], so
    /// calling this repeatedly on its own output does not drift after a
    /// clamped month end. The schedule end is not applied here; see
    /// [`Self::is_due`].
    pub fn advance(&self, current: NaiveDate) -> Option<NaiveDate> {
        let step = self.interval.months().checked_mul(self.multiplier.get())?;
        let elapsed = month_index(current) - month_index(self.start);
        let mut n = u32::try_from(elapsed.max(0)).ok()? / step;
        loop {
            let date = self.nth(n)?;
            if date > current {
                return Some(date);
            }
            n = n.checked_add(1)?;
        }
    }

    /// Invoice dates from the start through `until` (and the schedule end), in order.
    ///
    /// Each date is derived from `start` rather than from the previous
    /// occurrence, so month-end clamping does not accumulate
    /// (Jan 31 → Feb 29 → Mar 31, not Mar 29).
    pub fn occurrences(&self, until: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        let limit = self.end.map_or(until, |end| end.min(until));
        (0u32..)
            .map_while(move |n| self.nth(n))
            .take_while(move |d| *d <= limit)
    }

    fn nth(&self, n: u32) -> Option<NaiveDate> {
        self.interval
            .next_date(self.start, n.checked_mul(self.multiplier.get())?)
    }
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}
