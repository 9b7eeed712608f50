//! Weekly budget CLI commands

use chrono::Datelike;
use clap::Subcommand;

use crate::display::format_weekly_report;
use crate::error::CascadeResult;
use crate::models::{CategoryCatalog, Month};
use crate::reports::WeeklyReport;
use crate::services::partition::{current_week_number, month_weeks};
use crate::storage::Storage;

/// Weekly budget subcommands
#[derive(Subcommand)]
pub enum WeeklyCommands {
    /// Show the weekly budget overview
    Show {
        /// Month name; defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// 1-based week number; defaults to the current week
        #[arg(short, long)]
        week: Option<u32>,
        /// Calendar year; defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// List the week ranges of a month
    Weeks {
        /// Month name; defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Calendar year; defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },
}

/// Handle a weekly subcommand
pub fn handle_weekly_command(storage: &Storage, cmd: WeeklyCommands) -> CascadeResult<()> {
    let today = chrono::Local::now().date_naive();

    match cmd {
        WeeklyCommands::Show { month, week, year } => {
            let month = month.unwrap_or_else(|| Month::of(today).name().to_string());
            let year = year.unwrap_or_else(|| today.year());
            let week = week.unwrap_or_else(|| current_week_number(&month, year, today));

            let catalog = CategoryCatalog::default_catalog();
            let budgets = storage.budgets.get_all()?;
            let transactions = storage.transactions.get_all()?;

            let report =
                WeeklyReport::generate(&catalog, &budgets, &transactions, &month, year, week);
            print!("{}", format_weekly_report(&report, &catalog));
        }
        WeeklyCommands::Weeks { month, year } => {
            let month = month.unwrap_or_else(|| Month::of(today).name().to_string());
            let year = year.unwrap_or_else(|| today.year());

            for week in month_weeks(&month, year) {
                println!(
                    "Week {}: {} - {}  (budget days: {})",
                    week.week_number,
                    week.start.date().format("%Y-%m-%d"),
                    week.end.date().format("%Y-%m-%d"),
                    week.budget_days(),
                );
            }
        }
    }

    Ok(())
}
