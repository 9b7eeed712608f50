//! Report generation for cascade-cli
//!
//! Reports are derived views over the core computations, built fresh per
//! request and handed to the display layer.

pub mod weekly;

pub use weekly::WeeklyReport;
