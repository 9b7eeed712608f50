//! Service layer for cascade-cli
//!
//! The four computation duties (week partitioning, spending aggregation,
//! cascade allocation, reconciliation) plus CSV ingestion. All computation
//! services are pure functions over supplied value objects: no state, no
//! I/O, deterministic for identical inputs.

pub mod allocation;
pub mod import;
pub mod partition;
pub mod reconciliation;
pub mod spending;

pub use allocation::{original_weekly_budget, weekly_budget};
pub use import::{read_transactions, ColumnMapping, ImportSummary};
pub use partition::{current_week_number, month_weeks, week_info, weeks_in_month};
pub use reconciliation::{
    difference, parse_balance_input, reconcile, standing_difference, InputRejection,
    ParsedBalance, ReconcileOutcome, MAX_BALANCE,
};
pub use spending::week_spending;
