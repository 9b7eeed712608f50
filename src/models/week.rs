//! Week range model
//!
//! A month is partitioned into 4-6 weeks. Each week carries two windows:
//!
//! - `start`/`end`: the transaction-matching window. The first week reaches
//!   back to the start of the previous month and the last week reaches
//!   forward to the end of the next month, so stray transactions posted
//!   around month boundaries are still captured.
//! - `budget_start`/`budget_end`: the day-counting window used to distribute
//!   the monthly budget. These windows never overlap and always tile the
//!   month's days exactly.
//!
//! The budget window of week 1 is empty when the month starts on a Monday;
//! this is represented as `budget_end == budget_start - 1 day` and
//! [`WeekRange::budget_days`] floors at zero.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::Month;

/// One week of a partitioned month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    /// 1-based week number within the month
    pub week_number: u32,

    /// The month this week belongs to
    pub month: Month,

    /// The calendar year
    pub year: i32,

    /// Start of the transaction-matching window (start of day)
    pub start: NaiveDateTime,

    /// End of the transaction-matching window (end of day, 23:59:59.999)
    pub end: NaiveDateTime,

    /// First day of the budget day-counting window
    pub budget_start: NaiveDate,

    /// Last day of the budget day-counting window (may precede
    /// `budget_start` by one day for an empty window)
    pub budget_end: NaiveDate,
}

impl WeekRange {
    /// Number of days in the budget window, floored at zero
    pub fn budget_days(&self) -> i64 {
        ((self.budget_end - self.budget_start).num_days() + 1).max(0)
    }

    /// Whether a date falls inside the transaction-matching window.
    ///
    /// Both ends are inclusive: `start` is a start-of-day timestamp and
    /// `end` an end-of-day timestamp, so comparing by calendar day is exact.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start.date() && date <= self.end.date()
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Week {} of {} {} ({} - {})",
            self.week_number,
            self.month,
            self.year,
            self.start.date().format("%Y-%m-%d"),
            self.end.date().format("%Y-%m-%d")
        )
    }
}

/// Build a start-of-day timestamp (00:00:00.000)
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("valid start of day")
}

/// Build an end-of-day timestamp (23:59:59.999)
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("valid end of day")
}
