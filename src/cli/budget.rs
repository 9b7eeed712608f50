//! Budget CLI commands

use clap::Subcommand;

use crate::display::format_amount;
use crate::error::{CascadeError, CascadeResult};
use crate::models::{CategoryCatalog, MonthlyBudget};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget for a category
    Set {
        /// Category key (e.g., "FOOD")
        category: String,
        /// Monthly budget amount (sign is ignored)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// List monthly budgets per category
    List,
}

/// Handle a budget subcommand
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> CascadeResult<()> {
    let catalog = CategoryCatalog::default_catalog();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let category = catalog
                .find(&category)
                .ok_or_else(|| CascadeError::category_not_found(category.clone()))?;

            storage
                .budgets
                .set(MonthlyBudget::new(category.key.clone(), amount))?;
            storage.budgets.save()?;
            println!(
                "Monthly budget for {} set to {}.",
                category,
                format_amount(amount.abs())
            );
        }
        BudgetCommands::List => {
            let budgets = storage.budgets.get_all()?;

            for category in catalog.categories() {
                let pool = budgets
                    .iter()
                    .find(|b| category.matches(&b.category))
                    .map(MonthlyBudget::pool)
                    .unwrap_or(0.0);

                println!("{:<24}  {:>16}", category.to_string(), format_amount(pool));
            }
        }
    }

    Ok(())
}
