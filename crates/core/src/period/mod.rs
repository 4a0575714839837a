//! Date ranges and calendar-month cycles.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub start: NaiveDate,
    /// Last day of the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range. `start > end` yields an empty range.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Returns the calendar month containing `date`.
    #[must_use]
    pub fn month_of(date: NaiveDate) -> Self {
        let start = month_start(date);
        let end = month_start(start + Days::new(32)) - Days::new(1);
        Self { start, end }
    }

    /// Returns true if the range covers no day.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates every day of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Number of days covered.
    #[must_use]
    pub fn len_days(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
        }
    }
}

/// Credit card invoice cycle relative to today.
///
/// Cycles are calendar months, not statement-closing-day windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthCycle {
    /// The month before the current one.
    Previous,
    /// The month containing today.
    Current,
    /// The month after the current one.
    Next,
}

impl MonthCycle {
    /// Returns the calendar-month bounds of this cycle.
    #[must_use]
    pub fn window(self, today: NaiveDate) -> DateRange {
        let current = month_start(today);
        let anchor = match self {
            Self::Previous => current - Days::new(1),
            Self::Current => current,
            Self::Next => current + Days::new(32),
        };
        DateRange::month_of(anchor)
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}
