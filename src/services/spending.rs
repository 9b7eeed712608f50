//! Spending aggregator
//!
//! Sums outflow transactions for one category inside one week's
//! transaction-matching window. Every contribution is the magnitude of the
//! transaction's cash amount: source ledgers disagree on sign conventions,
//! but spend is always non-negative.

use tracing::warn;

use crate::models::{Transaction, WeekRange};

/// Total spending for a category within a week.
///
/// Transactions count when they are outflows, their category matches
/// case-insensitively, and their normalized date falls inside the week's
/// transaction window (both ends inclusive). Rows with unparseable dates are
/// skipped. Empty input yields 0.
pub fn week_spending(transactions: &[Transaction], category: &str, week: &WeekRange) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }

    transactions
        .iter()
        .filter(|txn| txn.kind.is_outflow())
        .filter(|txn| txn.category.trim().eq_ignore_ascii_case(category.trim()))
        .filter_map(|txn| match txn.parsed_date() {
            Some(date) => Some((txn, date)),
            None => {
                warn!(date = %txn.date, "skipping transaction with unparseable date");
                None
            }
        })
        .filter(|(_, date)| week.contains(*date))
        .map(|(txn, _)| txn.amount.abs())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::week::{end_of_day, start_of_day};
    use crate::models::{Month, TransactionKind};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn week() -> WeekRange {
        WeekRange {
            week_number: 2,
            month: Month::January,
            year: 2026,
            start: start_of_day(date(2026, 1, 5)),
            end: end_of_day(date(2026, 1, 11)),
            budget_start: date(2026, 1, 5),
            budget_end: date(2026, 1, 11),
        }
    }

    fn spending(category: &str, date: &str, amount: f64) -> Transaction {
        Transaction::new(TransactionKind::Spending, category, date, amount)
    }

    #[test]
    fn test_sums_matching_transactions() {
        let txns = vec![
            spending("FOOD", "05/01/2026", -30.0),
            spending("FOOD", "08/01/2026", -20.0),
            spending("FOOD", "11/01/2026", -12.5),
        ];
        assert_eq!(week_spending(&txns, "FOOD", &week()), 62.5);
    }

    #[test]
    fn test_amounts_count_by_magnitude() {
        // Mixed sign conventions still add up as spend.
        let txns = vec![
            spending("FOOD", "06/01/2026", -30.0),
            spending("FOOD", "07/01/2026", 20.0),
        ];
        assert_eq!(week_spending(&txns, "FOOD", &week()), 50.0);
    }

    #[test]
    fn test_category_is_case_insensitive() {
        let txns = vec![spending("food", "06/01/2026", -10.0)];
        assert_eq!(week_spending(&txns, "FOOD", &week()), 10.0);
    }

    #[test]
    fn test_other_categories_excluded() {
        let txns = vec![
            spending("FOOD", "06/01/2026", -10.0),
            spending("GROCERIES", "06/01/2026", -99.0),
        ];
        assert_eq!(week_spending(&txns, "FOOD", &week()), 10.0);
    }

    #[test]
    fn test_non_spending_kinds_excluded() {
        let txns = vec![
            Transaction::new(TransactionKind::Income, "FOOD", "06/01/2026", 100.0),
            Transaction::new(TransactionKind::Transfer, "FOOD", "06/01/2026", -40.0),
            spending("FOOD", "06/01/2026", -10.0),
        ];
        assert_eq!(week_spending(&txns, "FOOD", &week()), 10.0);
    }

    #[test]
    fn test_dates_outside_week_excluded() {
        let txns = vec![
            spending("FOOD", "04/01/2026", -10.0),
            spending("FOOD", "12/01/2026", -10.0),
        ];
        assert_eq!(week_spending(&txns, "FOOD", &week()), 0.0);
    }

    #[test]
    fn test_window_ends_inclusive() {
        let txns = vec![
            spending("FOOD", "05/01/2026", -1.0),
            spending("FOOD", "11/01/2026", -2.0),
        ];
        assert_eq!(week_spending(&txns, "FOOD", &week()), 3.0);
    }

    #[test]
    fn test_iso_and_day_first_dates_match_identically() {
        let txns = vec![
            spending("FOOD", "06/01/2026", -10.0),
            spending("FOOD", "2026-01-06", -10.0),
        ];
        assert_eq!(week_spending(&txns, "FOOD", &week()), 20.0);
    }

    #[test]
    fn test_unparseable_dates_skipped() {
        let txns = vec![
            spending("FOOD", "not a date", -10.0),
            spending("FOOD", "06/01/2026", -5.0),
        ];
        assert_eq!(week_spending(&txns, "FOOD", &week()), 5.0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(week_spending(&[], "FOOD", &week()), 0.0);
    }

    #[test]
    fn test_deterministic() {
        let txns = vec![
            spending("FOOD", "06/01/2026", -10.31),
            spending("FOOD", "07/01/2026", -0.07),
        ];
        let first = week_spending(&txns, "FOOD", &week());
        let second = week_spending(&txns, "FOOD", &week());
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
