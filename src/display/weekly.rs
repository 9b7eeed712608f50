//! Weekly report display formatting
//!
//! Renders the weekly budget overview as a fixed-width table, one row per
//! catalog category plus a totals line.

use crate::models::CategoryCatalog;
use crate::reports::WeeklyReport;

use super::format_amount;

/// Format the weekly budget report as a table
pub fn format_weekly_report(report: &WeeklyReport, catalog: &CategoryCatalog) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Week {} of {} {}  ({} - {})\n\n",
        report.week_number,
        report.month,
        report.year,
        report.week.start.date().format("%Y-%m-%d"),
        report.week.end.date().format("%Y-%m-%d"),
    ));

    let names: Vec<String> = report
        .rows
        .iter()
        .map(|row| {
            catalog
                .find(&row.category)
                .map(|c| c.to_string())
                .unwrap_or_else(|| row.category.clone())
        })
        .collect();

    let name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(8).max(8);

    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>7}  {}\n",
        "Category",
        "Budget",
        "Spent",
        "Remaining",
        "Used",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->12}  {:->7}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (row, name) in report.rows.iter().zip(&names) {
        // Pad by character count; emoji throw len() off.
        let padding = name_width.saturating_sub(name.chars().count());
        output.push_str(&format!(
            "{}{}  {:>12}  {:>12}  {:>12}  {:>6.0}%  {}\n",
            name,
            " ".repeat(padding),
            format_amount(row.adjusted_budget),
            format_amount(row.spending),
            format_amount(row.remaining),
            row.percentage,
            usage_status(row.percentage),
        ));
    }

    output.push_str(&format!(
        "\n{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>6.0}%\n",
        "Total",
        format_amount(report.total_budget),
        format_amount(report.total_spending),
        format_amount(report.total_remaining),
        report.total_percentage,
        name_width = name_width,
    ));

    output
}

/// Short status label for a usage percentage
fn usage_status(percentage: f64) -> &'static str {
    if percentage >= 100.0 {
        "Over"
    } else if percentage >= 80.0 {
        "Watch"
    } else {
        "On track"
    }
}
