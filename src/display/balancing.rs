//! Balancing display formatting
//!
//! Renders the reality-check views: the account overview before an update
//! and the outcome after one.

use crate::models::{Account, AccountKind};
use crate::services::reconciliation::{standing_difference, ReconcileOutcome};

use super::{format_amount, format_whole};

/// Format an amount according to the account kind's precision
fn format_for_kind(kind: AccountKind, value: f64) -> String {
    match kind {
        AccountKind::Decimal => format_amount(value),
        AccountKind::Integer => format_whole(value),
    }
}

/// Format the pre-update balancing overview for an account
pub fn format_balancing_overview(account: &Account, kind: AccountKind) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {} ({})\n", account.name, kind));
    output.push_str(&format!(
        "Calculated balance:  {:>16}\n",
        format_for_kind(kind, account.balance)
    ));

    if account.has_balancing() {
        output.push_str(&format!(
            "Last reality check:  {:>16}\n",
            format_for_kind(kind, account.balancing)
        ));
        output.push_str(&format!(
            "Difference:          {:>16}\n",
            format_for_kind(kind, standing_difference(account))
        ));
    } else {
        output.push_str("Last reality check:  never recorded\n");
    }

    output
}

/// Format the result of a successful balancing update
pub fn format_reconcile_outcome(
    account: &Account,
    kind: AccountKind,
    outcome: &ReconcileOutcome,
) -> String {
    let drift = if outcome.difference >= 0.0 {
        "surplus"
    } else {
        "shortfall"
    };

    format!(
        "Recorded real balance {} for {}.\nDifference vs calculated balance: {} ({})\n",
        format_for_kind(kind, outcome.new_balancing),
        account.name,
        format_for_kind(kind, outcome.difference),
        drift,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reconciliation::reconcile;

    #[test]
    fn test_overview_without_balancing() {
        let account = Account::new("Wallet", 1500.0);
        let rendered = format_balancing_overview(&account, AccountKind::Integer);

        assert!(rendered.contains("Wallet"));
        assert!(rendered.contains("1.500"));
        assert!(rendered.contains("never recorded"));
    }

    #[test]
    fn test_overview_with_balancing() {
        let mut account = Account::new("Bank", 1000.0);
        account.balancing = 1234.56;
        let rendered = format_balancing_overview(&account, AccountKind::Decimal);

        assert!(rendered.contains("1.234,56"));
        assert!(rendered.contains("234,56"));
        assert!(!rendered.contains("never recorded"));
    }

    #[test]
    fn test_outcome_reports_surplus_and_shortfall() {
        let mut account = Account::new("Bank", 1000.0);

        let outcome = reconcile(&mut account, 1200.0);
        let rendered = format_reconcile_outcome(&account, AccountKind::Decimal, &outcome);
        assert!(rendered.contains("surplus"));
        assert!(rendered.contains("1.200,00"));

        let outcome = reconcile(&mut account, 900.0);
        let rendered = format_reconcile_outcome(&account, AccountKind::Decimal, &outcome);
        assert!(rendered.contains("shortfall"));
    }
}
