//! Cascading budget allocator
//!
//! Distributes a monthly pool across the weeks of a month in proportion to
//! each week's budget-window day count, then propagates every week's
//! over/under-spending into the weeks after it: a week's overshoot is spread
//! evenly per remaining day of the month and charged to each later week by
//! its day count (and symmetrically for undershoot). The result is the
//! effective budget for the requested week.
//!
//! The whole computation is a pure function of its inputs. It never fails:
//! malformed input degrades to a zero budget with a warning.

use tracing::warn;

use crate::models::{Transaction, WeekRange};

use super::spending::week_spending;

/// A week's share of the monthly pool before any cascade adjustment.
///
/// `pool / total budget days`, multiplied by the week's day count. Returns 0
/// when the week number is out of range or the month has no countable days.
pub fn original_weekly_budget(monthly_budget: f64, all_weeks: &[WeekRange], week: u32) -> f64 {
    let originals = original_budgets(monthly_budget, all_weeks);
    if week < 1 || week as usize > originals.len() {
        return 0.0;
    }
    originals[week as usize - 1]
}

/// Effective budget for `current_week` after cascading earlier weeks'
/// surplus and deficit.
///
/// With no transactions at all the original share is returned untouched, and
/// week 1 is never adjusted (nothing precedes it). The result is floored at
/// zero.
pub fn weekly_budget(
    monthly_budget: f64,
    all_weeks: &[WeekRange],
    current_week: u32,
    transactions: &[Transaction],
    category: &str,
) -> f64 {
    if all_weeks.is_empty() {
        warn!("weekly budget requested for an empty week partition");
        return 0.0;
    }

    let originals = original_budgets(monthly_budget, all_weeks);
    if originals.iter().all(|b| *b == 0.0) {
        return 0.0;
    }

    if current_week < 1 || current_week as usize > all_weeks.len() {
        warn!(current_week, weeks = all_weeks.len(), "week index out of range");
        return 0.0;
    }
    let current = current_week as usize - 1;

    // Without spend data there is nothing to cascade.
    if transactions.is_empty() {
        return originals[current];
    }

    // Nothing precedes week 1.
    if current_week == 1 {
        return originals[0];
    }

    // Walk the weeks up to and including the current one, keeping one
    // over-budget and one under-budget ledger entry per week. Each week's
    // adjusted budget already absorbs every earlier week's cascade, so the
    // ledgers are computed against effective budgets, not original ones.
    let mut over = Vec::with_capacity(current + 1);
    let mut under = Vec::with_capacity(current + 1);

    for i in 0..=current {
        let days = all_weeks[i].budget_days() as f64;
        let penalty = cascade_share(&over, all_weeks, i, days);
        let bonus = cascade_share(&under, all_weeks, i, days);

        let adjusted = (originals[i] - penalty + bonus).max(0.0);
        let spent = week_spending(transactions, category, &all_weeks[i]);

        over.push((spent - adjusted).max(0.0));
        under.push((adjusted - spent).max(0.0));
    }

    // The current week's own share of every earlier week's cascade. Its own
    // ledger entry is excluded: a week is never penalized for itself.
    let days = all_weeks[current].budget_days() as f64;
    let penalty = cascade_share(&over, all_weeks, current, days);
    let bonus = cascade_share(&under, all_weeks, current, days);

    (originals[current] - penalty + bonus).max(0.0)
}

/// Per-week original shares of the monthly pool
fn original_budgets(monthly_budget: f64, all_weeks: &[WeekRange]) -> Vec<f64> {
    let pool = monthly_budget.abs();
    let total_days: i64 = all_weeks.iter().map(WeekRange::budget_days).sum();

    if pool == 0.0 || total_days == 0 {
        if total_days == 0 && !all_weeks.is_empty() {
            warn!("week partition has no countable budget days");
        }
        return vec![0.0; all_weeks.len()];
    }

    let per_day = pool / total_days as f64;
    all_weeks
        .iter()
        .map(|week| per_day * week.budget_days() as f64)
        .collect()
}

/// Sum of ledger entries before `upto`, each spread per remaining day of the
/// month and weighted by `target_days`.
///
/// A week's remaining days are the budget-day counts of every week strictly
/// after it; a zero remainder contributes nothing rather than dividing by
/// zero.
fn cascade_share(ledger: &[f64], all_weeks: &[WeekRange], upto: usize, target_days: f64) -> f64 {
    let mut share = 0.0;
    for (j, &entry) in ledger.iter().enumerate().take(upto) {
        if entry <= 0.0 {
            continue;
        }
        let remaining: i64 = all_weeks[j + 1..].iter().map(WeekRange::budget_days).sum();
        if remaining > 0 {
            share += entry / remaining as f64 * target_days;
        }
    }
    share
}
