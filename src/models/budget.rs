//! Budget models
//!
//! A `MonthlyBudget` is the per-category pool the user sets once per month.
//! A `WeeklyAllocation` is the derived, never-persisted result of running the
//! cascade over that pool: recomputed on every request so it is always
//! consistent with the current transaction set.

use serde::{Deserialize, Serialize};

/// The monthly budget pool for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    /// Category key
    pub category: String,

    /// Budget amount; the sign is ignored, the magnitude is the pool
    pub amount: f64,
}

impl MonthlyBudget {
    /// Create a monthly budget
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// The budget magnitude used by all allocation math
    pub fn pool(&self) -> f64 {
        self.amount.abs()
    }
}

/// The computed weekly budget state for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAllocation {
    /// Category key
    pub category: String,

    /// 1-based week number the allocation applies to
    pub week_number: u32,

    /// This week's share of the monthly pool before any cascade adjustment
    pub original_budget: f64,

    /// Effective budget after penalties and bonuses from earlier weeks
    pub adjusted_budget: f64,

    /// Spending recorded against the category this week
    pub spending: f64,

    /// Budget left this week (negative when overspent)
    pub remaining: f64,

    /// Spending as a percentage of the adjusted budget (0 when budget is 0)
    pub percentage: f64,
}
