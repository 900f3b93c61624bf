//! Range validation: the form-level gate in front of the range parser.
//!
//! A total predicate over the two accepted range grammars. Rejection is a
//! user-input error carrying one field-level message; it never aborts the
//! request and has no partial-validity state.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RangeError;

/// Anchored date-only range: `YYYY/MM/DD - YYYY/MM/DD`, hyphen with optional
/// single surrounding spaces.
static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[1-2][0-9]{3}/[0-1][0-9]/[0-3][0-9] ?- ?[1-2][0-9]{3}/[0-1][0-9]/[0-3][0-9]$")
        .unwrap()
});

/// Anchored date-time range: `YYYY/MM/DD HH:MM - YYYY/MM/DD HH:MM`.
static DATETIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[1-2][0-9]{3}/[0-1][0-9]/[0-3][0-9] [0-2][0-9]:[0-5][0-9] ?- ?[1-2][0-9]{3}/[0-1][0-9]/[0-3][0-9] [0-2][0-9]:[0-5][0-9]$",
    )
    .unwrap()
});

/// True iff the value matches the date-only or the date-time range grammar.
///
/// # Examples
///
/// ```
/// use gridrange::is_valid_range;
///
/// assert!(is_valid_range("2024/01/10 - 2024/01/12"));
/// assert!(is_valid_range("2024/01/10 08:30-2024/01/12 17:45"));
/// assert!(!is_valid_range("2024/01/10"));
/// ```
pub fn is_valid_range(value: &str) -> bool {
    DATE_RANGE.is_match(value) || DATETIME_RANGE.is_match(value)
}

/// The form-level check: accept, or reject with the single user-facing
/// message ([`RangeError::WrongDateFormat`]).
pub fn validate_range(value: &str) -> Result<(), RangeError> {
    if is_valid_range(value) {
        Ok(())
    } else {
        Err(RangeError::WrongDateFormat)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
