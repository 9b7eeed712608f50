//! Display formatting for terminal output
//!
//! Formats reports and reconciliation results for the terminal. Amounts are
//! rendered the way the app has always shown them: `.` groups thousands and
//! `,` separates decimals.

pub mod balancing;
pub mod weekly;

pub use balancing::{format_balancing_overview, format_reconcile_outcome};
pub use weekly::format_weekly_report;

/// Format an amount with grouped thousands and two decimals ("1.234,56")
pub fn format_amount(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let formatted = format!("{},{:02}", group_digits(cents / 100), cents % 100);
    if value < 0.0 && cents != 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Format an amount with grouped thousands and no decimals ("1.235")
pub fn format_whole(value: f64) -> String {
    let rounded = value.abs().round() as i64;
    let formatted = group_digits(rounded);
    if value < 0.0 && rounded != 0 {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

/// Group a non-negative integer's digits with `.` separators
fn group_digits(mut value: i64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }

    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(group) = groups.pop() {
        out.push('.');
        out.push_str(&format!("{:03}", group));
    }
    out
}
