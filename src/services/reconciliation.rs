//! Reconciliation calculator
//!
//! The "reality check" flow: the user types their account's actual balance,
//! the input is validated according to the account's kind, and the difference
//! against the calculated balance tells them how far the ledger has drifted.
//!
//! Decimal-capable accounts accept `,` or `.` as the decimal separator with
//! comma taking priority: in `1.234,56` the dots are thousands separators.
//! A lone dot is decimal only when at most two digits follow it; otherwise it
//! is a thousands separator and is stripped. Integer accounts take digits
//! only. Rejected input leaves the caller's previous value untouched.

use thiserror::Error;

use crate::models::{Account, AccountKind};

/// Largest accepted balance magnitude (999 billion)
pub const MAX_BALANCE: f64 = 999_999_999_999.0;

/// A successfully validated balance entry
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBalance {
    /// Numeric value of the entry
    pub value: f64,
    /// Canonical string form (`.` as the decimal separator, no grouping)
    pub normalized: String,
    /// Whether the entry carried a decimal part
    pub is_decimal: bool,
}

/// Why a balance entry was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputRejection {
    /// No digits at all
    #[error("enter at least one digit")]
    Empty,

    /// More than two digits after the decimal separator
    #[error("at most two decimal places are allowed")]
    TooManyDecimals,

    /// Leftover separators make the entry unreadable
    #[error("not a valid amount")]
    NotNumeric,

    /// Magnitude above [`MAX_BALANCE`]
    #[error("value exceeds the maximum of 999,999,999,999")]
    TooLarge,
}

/// Result of recording a reality check against an account
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutcome {
    /// The balancing value now stored on the account
    pub new_balancing: f64,
    /// Real balance minus the calculated balance
    pub difference: f64,
}

/// Validate and normalize a balance entry for the given account kind.
pub fn parse_balance_input(kind: AccountKind, raw: &str) -> Result<ParsedBalance, InputRejection> {
    match kind {
        AccountKind::Decimal => parse_decimal_input(raw),
        AccountKind::Integer => parse_integer_input(raw),
    }
}

/// Signed drift between the recorded and the real balance.
///
/// Positive means the real balance is higher than the ledger thinks.
pub fn difference(recorded: f64, real: f64) -> f64 {
    real - recorded
}

/// How far the last recorded reality check sits from the calculated balance.
///
/// Zero when no reality check has ever been recorded.
pub fn standing_difference(account: &Account) -> f64 {
    if account.has_balancing() {
        difference(account.balance, account.balancing)
    } else {
        0.0
    }
}

/// Record a reality check: the account's balancing becomes `real` and the
/// outcome reports the drift against the calculated balance.
pub fn reconcile(account: &mut Account, real: f64) -> ReconcileOutcome {
    account.balancing = real;
    ReconcileOutcome {
        new_balancing: real,
        difference: difference(account.balance, real),
    }
}

fn parse_decimal_input(raw: &str) -> Result<ParsedBalance, InputRejection> {
    let clean: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    if !clean.chars().any(|c| c.is_ascii_digit()) {
        return Err(InputRejection::Empty);
    }

    let (normalized, is_decimal) = if let Some(comma) = clean.rfind(',') {
        if clean.len() - comma - 1 > 2 {
            return Err(InputRejection::TooManyDecimals);
        }
        // Comma is the decimal separator; dots before it are grouping.
        let stripped: String = clean.chars().filter(|c| *c != '.').collect();
        (stripped.replacen(',', ".", 1), true)
    } else if let Some(dot) = clean.rfind('.') {
        if clean.len() - dot - 1 <= 2 {
            (clean.clone(), true)
        } else {
            (clean.chars().filter(|c| *c != '.').collect(), false)
        }
    } else {
        (clean.clone(), false)
    };

    if !well_formed(&normalized, is_decimal) {
        return Err(InputRejection::NotNumeric);
    }

    let value: f64 = normalized
        .parse()
        .map_err(|_| InputRejection::NotNumeric)?;

    if value > MAX_BALANCE {
        return Err(InputRejection::TooLarge);
    }

    Ok(ParsedBalance {
        value,
        normalized,
        is_decimal,
    })
}

fn parse_integer_input(raw: &str) -> Result<ParsedBalance, InputRejection> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return Err(InputRejection::Empty);
    }

    let value: f64 = digits.parse().map_err(|_| InputRejection::NotNumeric)?;
    if value > MAX_BALANCE {
        return Err(InputRejection::TooLarge);
    }

    Ok(ParsedBalance {
        // Canonical form drops leading zeros.
        normalized: format!("{}", value),
        value,
        is_decimal: false,
    })
}

/// Digits only, or digits-dot-(zero to two digits) when a decimal entry.
///
/// Stray separators that survive normalization (a second comma, `,50` with
/// no integer part) fail here.
fn well_formed(normalized: &str, is_decimal: bool) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());

    if all_digits(normalized) {
        return true;
    }

    if !is_decimal {
        return false;
    }

    match normalized.split_once('.') {
        Some((int_part, frac_part)) => {
            all_digits(int_part)
                && frac_part.len() <= 2
                && frac_part.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(raw: &str) -> Result<ParsedBalance, InputRejection> {
        parse_balance_input(AccountKind::Decimal, raw)
    }

    fn integer(raw: &str) -> Result<ParsedBalance, InputRejection> {
        parse_balance_input(AccountKind::Integer, raw)
    }

    #[test]
    fn test_grouped_decimal_entry() {
        let parsed = decimal("1.234,56").unwrap();
        assert_eq!(parsed.value, 1234.56);
        assert_eq!(parsed.normalized, "1234.56");
        assert!(parsed.is_decimal);
    }

    #[test]
    fn test_comma_decimal() {
        let parsed = decimal("1,5").unwrap();
        assert_eq!(parsed.value, 1.5);
        assert_eq!(parsed.normalized, "1.5");
    }

    #[test]
    fn test_comma_with_three_digits_rejected() {
        assert_eq!(decimal("1,234"), Err(InputRejection::TooManyDecimals));
    }

    #[test]
    fn test_dot_decimal() {
        let parsed = decimal("12.34").unwrap();
        assert_eq!(parsed.value, 12.34);
        assert!(parsed.is_decimal);
    }

    #[test]
    fn test_dot_as_thousands_separator() {
        let parsed = decimal("1.250").unwrap();
        assert_eq!(parsed.value, 1250.0);
        assert!(!parsed.is_decimal);
    }

    #[test]
    fn test_multiple_thousands_groups() {
        let parsed = decimal("1.250.000").unwrap();
        assert_eq!(parsed.value, 1_250_000.0);
    }

    #[test]
    fn test_trailing_comma_is_open_decimal() {
        let parsed = decimal("123,").unwrap();
        assert_eq!(parsed.value, 123.0);
        assert!(parsed.is_decimal);
    }

    #[test]
    fn test_double_comma_rejected() {
        assert_eq!(decimal("1,2,3"), Err(InputRejection::NotNumeric));
    }

    #[test]
    fn test_bare_fraction_rejected() {
        assert_eq!(decimal(",50"), Err(InputRejection::NotNumeric));
    }

    #[test]
    fn test_no_digits_rejected() {
        assert_eq!(decimal(""), Err(InputRejection::Empty));
        assert_eq!(decimal("abc"), Err(InputRejection::Empty));
        assert_eq!(integer("-"), Err(InputRejection::Empty));
    }

    #[test]
    fn test_ceiling() {
        assert_eq!(decimal("999999999999").unwrap().value, MAX_BALANCE);
        assert_eq!(decimal("1000000000000"), Err(InputRejection::TooLarge));
        assert_eq!(integer("1000000000000"), Err(InputRejection::TooLarge));
    }

    #[test]
    fn test_currency_symbols_stripped() {
        let parsed = decimal("Rp 1.234,56").unwrap();
        assert_eq!(parsed.value, 1234.56);
    }

    #[test]
    fn test_integer_account_strips_everything_but_digits() {
        let parsed = integer("Rp 1.250,75").unwrap();
        assert_eq!(parsed.value, 125_075.0);
        assert_eq!(parsed.normalized, "125075");
        assert!(!parsed.is_decimal);
    }

    #[test]
    fn test_integer_leading_zeros_dropped() {
        assert_eq!(integer("007").unwrap().normalized, "7");
    }

    #[test]
    fn test_difference() {
        assert_eq!(difference(1000.0, 1200.0), 200.0);
        assert_eq!(difference(1200.0, 1000.0), -200.0);
        assert_eq!(difference(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_standing_difference() {
        let mut account = Account::new("Wallet", 1000.0);
        assert_eq!(standing_difference(&account), 0.0);

        account.balancing = 1150.0;
        assert_eq!(standing_difference(&account), 150.0);
    }

    #[test]
    fn test_reconcile_overwrites_balancing() {
        let mut account = Account::new("Wallet", 1000.0);
        let outcome = reconcile(&mut account, 1200.0);

        assert_eq!(outcome.new_balancing, 1200.0);
        assert_eq!(outcome.difference, 200.0);
        assert_eq!(account.balancing, 1200.0);

        let outcome = reconcile(&mut account, 900.0);
        assert_eq!(outcome.difference, -100.0);
        assert_eq!(account.balancing, 900.0);
    }
}
