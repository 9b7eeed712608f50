//! Weekly budget report
//!
//! Builds the per-category view for one week of a month: every catalog
//! category gets its cascade-adjusted budget, its spending, what remains and
//! how much of the budget is used, plus totals across the catalog. The
//! report is recomputed from scratch on every request; nothing is cached.

use serde::Serialize;

use crate::models::{CategoryCatalog, MonthlyBudget, Transaction, WeeklyAllocation, WeekRange};
use crate::services::allocation::{original_weekly_budget, weekly_budget};
use crate::services::partition::{month_weeks, week_info};
use crate::services::spending::week_spending;

/// The weekly budget overview for one (month, week) selection
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    /// Month name the report was requested for
    pub month: String,
    /// Calendar year
    pub year: i32,
    /// 1-based week number
    pub week_number: u32,
    /// The selected week's range
    pub week: WeekRange,
    /// One allocation per catalog category, in catalog order
    pub rows: Vec<WeeklyAllocation>,
    /// Sum of all categories' adjusted budgets
    pub total_budget: f64,
    /// Sum of all categories' spending this week
    pub total_spending: f64,
    /// Total budget minus total spending
    pub total_remaining: f64,
    /// Total spending as a percentage of the total budget (0 when 0)
    pub total_percentage: f64,
}

impl WeeklyReport {
    /// Compute the report for one week.
    ///
    /// Categories without a monthly budget still appear with zero budget so
    /// the view always shows the full catalog.
    pub fn generate(
        catalog: &CategoryCatalog,
        budgets: &[MonthlyBudget],
        transactions: &[Transaction],
        month: &str,
        year: i32,
        week_number: u32,
    ) -> Self {
        let all_weeks = month_weeks(month, year);
        let selected = week_info(month, year, week_number);

        let rows: Vec<WeeklyAllocation> = catalog
            .categories()
            .iter()
            .map(|category| {
                let monthly = budgets
                    .iter()
                    .find(|b| category.matches(&b.category))
                    .map(MonthlyBudget::pool)
                    .unwrap_or(0.0);

                let adjusted = weekly_budget(
                    monthly,
                    &all_weeks,
                    week_number,
                    transactions,
                    &category.key,
                );
                let original = original_weekly_budget(monthly, &all_weeks, week_number);
                let spending = week_spending(transactions, &category.key, &selected);

                let remaining = adjusted.abs() - spending;
                let percentage = if adjusted.abs() > 0.0 {
                    spending / adjusted.abs() * 100.0
                } else {
                    0.0
                };

                WeeklyAllocation {
                    category: category.key.clone(),
                    week_number,
                    original_budget: original,
                    adjusted_budget: adjusted,
                    spending,
                    remaining,
                    percentage,
                }
            })
            .collect();

        let total_budget: f64 = rows.iter().map(|r| r.adjusted_budget.abs()).sum();
        let total_spending: f64 = rows.iter().map(|r| r.spending).sum();
        let total_remaining = total_budget - total_spending;
        let total_percentage = if total_budget > 0.0 {
            total_spending / total_budget * 100.0
        } else {
            0.0
        };

        Self {
            month: month.to_string(),
            year,
            week_number,
            week: selected,
            rows,
            total_budget,
            total_spending,
            total_remaining,
            total_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    const EPS: f64 = 1e-9;

    fn catalog() -> CategoryCatalog {
        CategoryCatalog::default_catalog()
    }

    fn budgets() -> Vec<MonthlyBudget> {
        vec![
            MonthlyBudget::new("FOOD", -310.0),
            MonthlyBudget::new("GROCERIES", 155.0),
        ]
    }

    #[test]
    fn test_report_covers_whole_catalog() {
        let report = WeeklyReport::generate(&catalog(), &budgets(), &[], "January", 2026, 2);
        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.week_number, 2);
    }

    #[test]
    fn test_unbudgeted_categories_are_zero() {
        let report = WeeklyReport::generate(&catalog(), &budgets(), &[], "January", 2026, 2);
        let fruits = report.rows.iter().find(|r| r.category == "FRUITS").unwrap();
        assert_eq!(fruits.adjusted_budget, 0.0);
        assert_eq!(fruits.percentage, 0.0);
    }

    #[test]
    fn test_rows_carry_cascade_budgets() {
        // January 2026: week 2 of FOOD's 310 pool is 70 (10 per day).
        let report = WeeklyReport::generate(&catalog(), &budgets(), &[], "January", 2026, 2);
        let food = report.rows.iter().find(|r| r.category == "FOOD").unwrap();
        assert!((food.adjusted_budget - 70.0).abs() < EPS);
        assert!((food.original_budget - 70.0).abs() < EPS);
    }

    #[test]
    fn test_spending_and_percentage() {
        let txns = vec![
            Transaction::new(TransactionKind::Spending, "FOOD", "06/01/2026", -35.0),
            Transaction::new(TransactionKind::Spending, "groceries", "07/01/2026", -10.0),
        ];
        let report = WeeklyReport::generate(&catalog(), &budgets(), &txns, "January", 2026, 2);

        let food = report.rows.iter().find(|r| r.category == "FOOD").unwrap();
        assert!((food.spending - 35.0).abs() < EPS);
        assert!((food.percentage - 50.0).abs() < EPS);
        assert!((food.remaining - 35.0).abs() < EPS);
    }

    #[test]
    fn test_totals() {
        let txns = vec![Transaction::new(
            TransactionKind::Spending,
            "FOOD",
            "06/01/2026",
            -35.0,
        )];
        let report = WeeklyReport::generate(&catalog(), &budgets(), &txns, "January", 2026, 2);

        let sum_budget: f64 = report.rows.iter().map(|r| r.adjusted_budget.abs()).sum();
        assert!((report.total_budget - sum_budget).abs() < EPS);
        assert!((report.total_spending - 35.0).abs() < EPS);
        assert!((report.total_remaining - (sum_budget - 35.0)).abs() < EPS);
        assert!(report.total_percentage > 0.0);
    }

    #[test]
    fn test_deterministic() {
        let txns = vec![Transaction::new(
            TransactionKind::Spending,
            "FOOD",
            "06/01/2026",
            -35.17,
        )];
        let a = WeeklyReport::generate(&catalog(), &budgets(), &txns, "January", 2026, 3);
        let b = WeeklyReport::generate(&catalog(), &budgets(), &txns, "January", 2026, 3);
        assert_eq!(
            serde_json::to_string(&a.rows).unwrap(),
            serde_json::to_string(&b.rows).unwrap()
        );
    }
}
