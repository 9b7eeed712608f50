//! Calendar month model
//!
//! Months are addressed by name throughout the application (the budget data
//! layer supplies month names, not numbers), so this enum owns the fixed
//! ordered list of twelve names and the calendar math derived from it.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Parse a month from its English name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }

    /// The month's English name
    pub fn name(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// 1-based month number (January = 1)
    pub fn number(&self) -> u32 {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0) as u32 + 1
    }

    /// Month from a 1-based number, if in range
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=12 => Some(Self::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    /// The month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        // month() is always 1-12
        Self::from_number(date.month()).unwrap_or(Self::January)
    }

    /// First calendar day of this month
    pub fn first_day(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.number(), 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date"))
    }

    /// Last calendar day of this month
    pub fn last_day(&self, year: i32) -> NaiveDate {
        let (next, next_year) = self.next(year);
        next.first_day(next_year) - Duration::days(1)
    }

    /// Number of days in this month
    pub fn days(&self, year: i32) -> i64 {
        (self.last_day(year) - self.first_day(year)).num_days() + 1
    }

    /// The following month, with year rollover
    pub fn next(&self, year: i32) -> (Self, i32) {
        match self {
            Self::December => (Self::January, year + 1),
            _ => (Self::ALL[self.number() as usize], year),
        }
    }

    /// The preceding month, with year rollover
    pub fn prev(&self, year: i32) -> (Self, i32) {
        match self {
            Self::January => (Self::December, year - 1),
            _ => (Self::ALL[(self.number() - 2) as usize], year),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Month::parse("January"), Some(Month::January));
        assert_eq!(Month::parse("january"), Some(Month::January));
        assert_eq!(Month::parse("DECEMBER"), Some(Month::December));
        assert_eq!(Month::parse(" March "), Some(Month::March));
        assert_eq!(Month::parse("Januar"), None);
        assert_eq!(Month::parse(""), None);
    }

    #[test]
    fn test_numbering() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::December.number(), 12);
        assert_eq!(Month::from_number(6), Some(Month::June));
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn test_first_and_last_day() {
        assert_eq!(
            Month::January.first_day(2026),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        assert_eq!(
            Month::January.last_day(2026),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
        );
        assert_eq!(
            Month::February.last_day(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            Month::February.last_day(2026),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_days() {
        assert_eq!(Month::January.days(2026), 31);
        assert_eq!(Month::April.days(2026), 30);
        assert_eq!(Month::February.days(2024), 29);
    }

    #[test]
    fn test_rollover() {
        assert_eq!(Month::December.next(2025), (Month::January, 2026));
        assert_eq!(Month::January.prev(2026), (Month::December, 2025));
        assert_eq!(Month::June.next(2026), (Month::July, 2026));
        assert_eq!(Month::June.prev(2026), (Month::May, 2026));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Month::September), "September");
    }

    #[test]
    fn test_of_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(Month::of(date), Month::August);
    }
}
