//! Week partitioner
//!
//! Splits a calendar month into 4-6 weeks. Week 1 runs from the start of the
//! month up to the Sunday before the first Monday; every later week is a
//! Monday-to-Sunday block. The first and last weeks widen their
//! transaction-matching windows into the adjacent months (late-posted and
//! early-posted transactions still land in a week), while their budget
//! windows stay inside the month so day counting tiles the month exactly.
//!
//! Month names that fail to parse fall back to the current ISO week rather
//! than erroring: the weekly view must always have something to render.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::warn;

use crate::models::week::{end_of_day, start_of_day};
use crate::models::{Month, WeekRange};

/// Minimum number of weeks a month is partitioned into
pub const MIN_WEEKS: u32 = 4;

/// Maximum number of weeks a month is partitioned into
pub const MAX_WEEKS: u32 = 6;

/// Number of weeks a month is divided into.
///
/// Counts the 7-day blocks from the month's first Monday needed to reach the
/// last day, clamped to `[MIN_WEEKS, MAX_WEEKS]`. Unknown month names yield
/// the minimum.
pub fn weeks_in_month(month: &str, year: i32) -> u32 {
    match Month::parse(month) {
        Some(month) => weeks_in(month, year),
        None => {
            warn!(month, "unknown month name, assuming minimum week count");
            MIN_WEEKS
        }
    }
}

/// Week range for one week of a month.
///
/// Unknown month names fall back to the ISO week containing today. Week
/// numbers outside `[1, weeks_in_month]` are clamped into range.
pub fn week_info(month: &str, year: i32, week_number: u32) -> WeekRange {
    week_info_on(month, year, week_number, chrono::Local::now().date_naive())
}

/// [`week_info`] with an explicit "today" for the fallback path.
pub fn week_info_on(month: &str, year: i32, week_number: u32, today: NaiveDate) -> WeekRange {
    match Month::parse(month) {
        Some(month) => week_range(month, year, week_number),
        None => {
            warn!(month, "unknown month name, falling back to current week");
            fallback_week(week_number.max(1), today)
        }
    }
}

/// All week ranges of a month, in order.
///
/// This is the allocator's input: the full partition the monthly pool is
/// distributed over.
pub fn month_weeks(month: &str, year: i32) -> Vec<WeekRange> {
    let weeks = weeks_in_month(month, year);
    (1..=weeks)
        .map(|number| week_info(month, year, number))
        .collect()
}

/// Which week of the month `today` falls in.
///
/// Returns 1 when `today` is outside the month entirely, so callers can
/// default their week selection safely.
pub fn current_week_number(month: &str, year: i32, today: NaiveDate) -> u32 {
    let Some(month) = Month::parse(month) else {
        return 1;
    };

    if today.year() != year || today.month() != month.number() {
        return 1;
    }

    let monday = first_monday(month.first_day(year));
    if today < monday {
        return 1;
    }

    let week = ((today - monday).num_days() / 7) as u32 + 2;
    week.min(weeks_in(month, year))
}

fn weeks_in(month: Month, year: i32) -> u32 {
    let monday = first_monday(month.first_day(year));
    let days_from_monday = (month.last_day(year) - monday).num_days() + 1;
    let blocks = ((days_from_monday + 6) / 7).max(0) as u32;
    blocks.clamp(MIN_WEEKS, MAX_WEEKS)
}

/// First Monday on or after the given day
fn first_monday(day: NaiveDate) -> NaiveDate {
    let offset = match day.weekday().num_days_from_monday() {
        0 => 0,
        n => 7 - n as i64,
    };
    day + Duration::days(offset)
}

fn week_range(month: Month, year: i32, week_number: u32) -> WeekRange {
    let weeks = weeks_in(month, year);
    let week_number = week_number.clamp(1, weeks);

    let first_day = month.first_day(year);
    let last_day = month.last_day(year);
    let monday = first_monday(first_day);

    if week_number == 1 {
        // Transaction window reaches back to the start of the previous
        // month; the budget window is the partial pre-Monday stretch,
        // empty when the month itself starts on a Monday.
        let (prev_month, prev_year) = month.prev(year);
        let days_to_sunday = match first_day.weekday().num_days_from_sunday() {
            0 => 0,
            n => 7 - n as i64,
        };

        return WeekRange {
            week_number,
            month,
            year,
            start: start_of_day(prev_month.first_day(prev_year)),
            end: end_of_day(first_day + Duration::days(days_to_sunday)),
            budget_start: first_day,
            budget_end: monday - Duration::days(1),
        };
    }

    let block_start = monday + Duration::days(((week_number - 2) * 7) as i64);
    let block_end = block_start + Duration::days(6);

    if week_number == weeks {
        // Transaction window reaches to the end of the next month; the
        // budget window absorbs every remaining day of this month.
        let (next_month, next_year) = month.next(year);
        return WeekRange {
            week_number,
            month,
            year,
            start: start_of_day(block_start),
            end: end_of_day(next_month.last_day(next_year)),
            budget_start: block_start,
            budget_end: last_day,
        };
    }

    let block_end = block_end.min(last_day);
    WeekRange {
        week_number,
        month,
        year,
        start: start_of_day(block_start),
        end: end_of_day(block_end),
        budget_start: block_start,
        budget_end: block_end,
    }
}

/// The ISO week (Monday through Sunday) containing `today`
fn fallback_week(week_number: u32, today: NaiveDate) -> WeekRange {
    let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let sunday = monday + Duration::days(6);

    WeekRange {
        week_number,
        month: Month::of(today),
        year: today.year(),
        start: start_of_day(monday),
        end: end_of_day(sunday),
        budget_start: monday,
        budget_end: sunday,
    }
}
