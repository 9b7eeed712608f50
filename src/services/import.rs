//! CSV import service
//!
//! Ingests ledger exports into transaction records. The source sheets carry
//! one row per entry with a kind column ("Spending", "Income", ...), a
//! category column, a day-first date column, and either one signed amount
//! column or separate inflow/outflow columns.

use std::io::Read;

use csv::ReaderBuilder;
use tracing::warn;

use crate::error::{CascadeError, CascadeResult};
use crate::models::{Transaction, TransactionKind};

/// Column mapping configuration for CSV import
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the transaction-kind column
    pub kind_column: usize,
    /// Index of the category column
    pub category_column: usize,
    /// Index of the date column
    pub date_column: usize,
    /// Index of the signed amount column (or separate in/out columns)
    pub amount_column: Option<usize>,
    /// Index of the outflow column (if using separate columns)
    pub outflow_column: Option<usize>,
    /// Index of the inflow column (if using separate columns)
    pub inflow_column: Option<usize>,
    /// Whether the first row is a header
    pub has_header: bool,
    /// Delimiter character
    pub delimiter: u8,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            kind_column: 0,
            category_column: 1,
            date_column: 2,
            amount_column: Some(3),
            outflow_column: None,
            inflow_column: None,
            has_header: true,
            delimiter: b',',
        }
    }
}

impl ColumnMapping {
    /// Mapping for sheets with separate cash-in / cash-out columns
    pub fn separate_inout(
        kind_col: usize,
        category_col: usize,
        date_col: usize,
        outflow_col: usize,
        inflow_col: usize,
    ) -> Self {
        Self {
            kind_column: kind_col,
            category_column: category_col,
            date_column: date_col,
            amount_column: None,
            outflow_column: Some(outflow_col),
            inflow_column: Some(inflow_col),
            has_header: true,
            delimiter: b',',
        }
    }
}

/// What an import run did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    /// Rows converted into transactions
    pub imported: usize,
    /// Rows dropped (short rows, unreadable amounts)
    pub skipped: usize,
}

/// Read transactions from CSV data.
///
/// Rows that are too short or whose amount cell is unreadable are skipped
/// with a warning; the rest of the file still imports. Dates are carried
/// through raw, the aggregation layer normalizes them on use.
pub fn read_transactions<R: Read>(
    reader: R,
    mapping: &ColumnMapping,
) -> CascadeResult<(Vec<Transaction>, ImportSummary)> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(mapping.has_header)
        .delimiter(mapping.delimiter)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();
    let mut summary = ImportSummary::default();

    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| CascadeError::Import(format!("row {}: {}", row + 1, e)))?;

        let Some(kind_cell) = record.get(mapping.kind_column) else {
            warn!(row = row + 1, "skipping row without a kind column");
            summary.skipped += 1;
            continue;
        };
        let Some(category) = record.get(mapping.category_column) else {
            warn!(row = row + 1, "skipping row without a category column");
            summary.skipped += 1;
            continue;
        };
        let Some(date) = record.get(mapping.date_column) else {
            warn!(row = row + 1, "skipping row without a date column");
            summary.skipped += 1;
            continue;
        };

        let Some(amount) = row_amount(&record, mapping) else {
            warn!(row = row + 1, "skipping row with unreadable amount");
            summary.skipped += 1;
            continue;
        };

        transactions.push(Transaction::new(
            TransactionKind::parse(kind_cell),
            category.trim(),
            date.trim(),
            amount,
        ));
        summary.imported += 1;
    }

    Ok((transactions, summary))
}

/// Signed amount of one record, honoring the mapping's column style
fn row_amount(record: &csv::StringRecord, mapping: &ColumnMapping) -> Option<f64> {
    if let Some(col) = mapping.amount_column {
        return parse_amount(record.get(col)?);
    }

    // Separate columns: outflow counts negative, inflow positive. A row
    // usually fills exactly one of the two.
    let outflow = mapping
        .outflow_column
        .and_then(|col| record.get(col))
        .and_then(parse_amount)
        .unwrap_or(0.0);
    let inflow = mapping
        .inflow_column
        .and_then(|col| record.get(col))
        .and_then(parse_amount)
        .unwrap_or(0.0);

    if mapping.outflow_column.is_none() && mapping.inflow_column.is_none() {
        return None;
    }

    Some(inflow - outflow.abs())
}

/// Parse an amount cell, tolerating grouping and currency decoration
fn parse_amount(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }

    if let Ok(value) = cell.parse::<f64>() {
        return Some(value);
    }

    // Decorated cells ("Rp 1,250.50", "-1,250"): strip everything except
    // digits, sign and the decimal dot.
    let cleaned: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    cleaned.parse().ok()
}
