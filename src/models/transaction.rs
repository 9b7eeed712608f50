//! Transaction model
//!
//! Transactions arrive from the external data layer (manual entry or CSV
//! import) and are treated as read-only input to the budget math. Dates are
//! kept in their raw string form and normalized through a single parsing
//! function, because the source data mixes `DD/MM/YYYY` ledger rows with
//! ISO-formatted ones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TransactionKind {
    /// An outflow; the only kind counted by the spending aggregation
    Spending,
    /// An inflow
    Income,
    /// A movement between accounts
    Transfer,
    /// Anything else the source ledger produces
    #[default]
    #[serde(other)]
    Other,
}

impl TransactionKind {
    /// Parse a kind from a ledger cell, case-insensitively
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "spending" => Self::Spending,
            "income" => Self::Income,
            "transfer" => Self::Transfer,
            _ => Self::Other,
        }
    }

    /// Whether this entry counts as an outflow
    pub fn is_outflow(&self) -> bool {
        matches!(self, Self::Spending)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spending => write!(f, "Spending"),
            Self::Income => write!(f, "Income"),
            Self::Transfer => write!(f, "Transfer"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A ledger transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Entry kind
    pub kind: TransactionKind,

    /// Category key (matched case-insensitively against the catalog)
    pub category: String,

    /// Raw date string, `DD/MM/YYYY` or ISO
    pub date: String,

    /// Signed cash amount; sign convention varies by source ledger
    pub amount: f64,
}

impl Transaction {
    /// Create a transaction
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        date: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            date: date.into(),
            amount,
        }
    }

    /// The transaction's normalized date, if parseable
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_transaction_date(&self.date)
    }
}

/// Normalize a transaction date string.
///
/// Strings containing `/` are day-first (`DD/MM/YYYY`); everything else is
/// treated as ISO, either a bare date or a datetime whose first ten
/// characters are `YYYY-MM-DD`. Returns `None` for anything unparseable so
/// callers can skip the row instead of failing.
pub fn parse_transaction_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.contains('/') {
        return NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok();
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    // ISO datetime: take the date prefix
    if raw.len() >= 10 {
        return NaiveDate::parse_from_str(&raw[..10], "%Y-%m-%d").ok();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("Spending"), TransactionKind::Spending);
        assert_eq!(TransactionKind::parse("SPENDING"), TransactionKind::Spending);
        assert_eq!(TransactionKind::parse("income"), TransactionKind::Income);
        assert_eq!(TransactionKind::parse("Transfer"), TransactionKind::Transfer);
        assert_eq!(TransactionKind::parse("Adjustment"), TransactionKind::Other);
    }

    #[test]
    fn test_is_outflow() {
        assert!(TransactionKind::Spending.is_outflow());
        assert!(!TransactionKind::Income.is_outflow());
        assert!(!TransactionKind::Other.is_outflow());
    }

    #[test]
    fn test_parse_day_first() {
        assert_eq!(parse_transaction_date("05/01/2026"), Some(date(2026, 1, 5)));
        assert_eq!(parse_transaction_date("31/12/2025"), Some(date(2025, 12, 31)));
    }

    #[test]
    fn test_parse_iso() {
        assert_eq!(parse_transaction_date("2026-01-05"), Some(date(2026, 1, 5)));
        assert_eq!(
            parse_transaction_date("2026-01-05T14:30:00Z"),
            Some(date(2026, 1, 5))
        );
    }

    #[test]
    fn test_both_forms_normalize_identically() {
        assert_eq!(
            parse_transaction_date("05/01/2026"),
            parse_transaction_date("2026-01-05")
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_transaction_date(""), None);
        assert_eq!(parse_transaction_date("not a date"), None);
        assert_eq!(parse_transaction_date("32/01/2026"), None);
        assert_eq!(parse_transaction_date("2026-13-01"), None);
    }

    #[test]
    fn test_parsed_date() {
        let txn = Transaction::new(TransactionKind::Spending, "FOOD", "07/01/2026", -50.0);
        assert_eq!(txn.parsed_date(), Some(date(2026, 1, 7)));
    }

    #[test]
    fn test_serde_round_trip() {
        let txn = Transaction::new(TransactionKind::Spending, "FOOD", "07/01/2026", -50.0);
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }

    #[test]
    fn test_unknown_kind_deserializes_to_other() {
        let json = r#"{"kind":"Adjustment","category":"FOOD","date":"2026-01-05","amount":1.0}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.kind, TransactionKind::Other);
    }
}
