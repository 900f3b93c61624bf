//! Range parsing: free-text range string → pair of absolute instants.
//!
//! A range string holds two calendar-time tokens separated by a hyphen:
//!
//! - date-only: `2024/01/10 - 2024/01/12`
//! - date-time: `2024/01/10 08:30 - 2024/01/12 17:45`
//!
//! Tokens are interpreted as wall-clock time in the caller's timezone and
//! converted to epoch seconds. The start token is widened to the first second
//! it covers (`00:00:00` / `HH:MM:00`), the end token to the last
//! (`23:59:59` / `HH:MM:59`), so the resolved pair is an inclusive bound for
//! a timestamp column.
//!
//! Parsing never errors: input matching neither grammar yields an empty
//! range, and a side whose token is missing or cannot be resolved (invalid
//! calendar date, DST gap/fold) is left absent. Callers own the policy for
//! one-sided and inverted ranges.

use std::sync::LazyLock;

use chrono::{NaiveDateTime, TimeZone};
use regex::Regex;
use serde::Serialize;

use crate::context::TimeZoneContext;

/// A date-time token: `YYYY/MM/DD HH:MM`.
static DATETIME_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[1-2][0-9]{3}/[0-1][0-9]/[0-3][0-9] [0-2][0-9]:[0-5][0-9]").unwrap()
});

/// A date-only token: `YYYY/MM/DD`.
static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[1-2][0-9]{3}/[0-1][0-9]/[0-3][0-9]").unwrap());

/// A resolved `[start, end]` pair of epoch-second instants.
///
/// Either side may be absent (one-sided input), and `start <= end` is not
/// enforced — an inverted range is a valid, possibly-empty query bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedRange {
    /// First second covered by the range, or `None` if unresolved.
    pub start: Option<i64>,
    /// Last second covered by the range, or `None` if unresolved.
    pub end: Option<i64>,
}

impl ResolvedRange {
    /// True when neither side resolved ("no range").
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Parse a free-text range string into a [`ResolvedRange`].
///
/// The date-time grammar is tried first; if any date-time token is present
/// the date-only grammar is not consulted. Input matching neither grammar
/// returns an empty range — absent filter, not an error.
///
/// # Examples
///
/// ```
/// use gridrange::{parse_range, TimeZoneContext};
///
/// let tz = TimeZoneContext::utc();
/// let range = parse_range("2024/01/10 - 2024/01/12", &tz);
/// assert_eq!(range.start, Some(1704844800)); // 2024-01-10T00:00:00Z
/// assert_eq!(range.end, Some(1705103999));   // 2024-01-12T23:59:59Z
///
/// assert!(parse_range("not a date", &tz).is_empty());
/// ```
pub fn parse_range(text: &str, tz: &TimeZoneContext) -> ResolvedRange {
    let tokens: Vec<&str> = DATETIME_TOKEN.find_iter(text).map(|m| m.as_str()).collect();
    if !tokens.is_empty() {
        return ResolvedRange {
            start: tokens
                .first()
                .and_then(|t| resolve_local(&format!("{t}:00"), tz)),
            end: tokens
                .get(1)
                .and_then(|t| resolve_local(&format!("{t}:59"), tz)),
        };
    }

    let tokens: Vec<&str> = DATE_TOKEN.find_iter(text).map(|m| m.as_str()).collect();
    if !tokens.is_empty() {
        return ResolvedRange {
            start: tokens
                .first()
                .and_then(|t| resolve_local(&format!("{t} 00:00:00"), tz)),
            end: tokens
                .get(1)
                .and_then(|t| resolve_local(&format!("{t} 23:59:59"), tz)),
        };
    }

    ResolvedRange::default()
}

/// Resolve a `YYYY/MM/DD HH:MM:SS` wall-clock string in the given zone to
/// epoch seconds. `None` for invalid calendar dates and for local times that
/// do not map to a single instant (DST gap or fold).
fn resolve_local(local: &str, tz: &TimeZoneContext) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(local, "%Y/%m/%d %H:%M:%S").ok()?;
    tz.tz()
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.timestamp())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::is_valid_range;
    use proptest::prelude::*;

    fn utc() -> TimeZoneContext {
        TimeZoneContext::utc()
    }

    #[test]
    fn test_date_only_range_in_utc() {
        let range = parse_range("2024/01/10 - 2024/01/12", &utc());
        assert_eq!(range.start, Some(1704844800)); // 2024-01-10T00:00:00Z
        assert_eq!(range.end, Some(1705103999)); // 2024-01-12T23:59:59Z
    }

    #[test]
    fn test_date_only_hyphen_spacing_irrelevant_to_parser() {
        let spaced = parse_range("2024/01/10 - 2024/01/12", &utc());
        let tight = parse_range("2024/01/10-2024/01/12", &utc());
        assert_eq!(spaced, tight);
    }

    #[test]
    fn test_datetime_range_forces_seconds() {
        let range = parse_range("2024/01/10 08:30 - 2024/01/10 17:45", &utc());
        assert_eq!(range.start, Some(1704875400)); // 2024-01-10T08:30:00Z
        assert_eq!(range.end, Some(1704908759)); // 2024-01-10T17:45:59Z
    }

    #[test]
    fn test_datetime_grammar_takes_precedence() {
        // One date-time token present: the date-only scan must not run, so
        // the mixed string resolves one-sided off the date-time token.
        let range = parse_range("2024/01/10 - 2024/01/12 17:45", &utc());
        assert_eq!(range.start, Some(1705081500)); // 2024-01-12T17:45:00Z
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_one_sided_date_range() {
        let range = parse_range("2024/01/10 - soon", &utc());
        assert_eq!(range.start, Some(1704844800));
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_no_range_for_garbage() {
        assert!(parse_range("not a date", &utc()).is_empty());
        assert!(parse_range("", &utc()).is_empty());
    }

    #[test]
    fn test_inverted_range_not_rejected() {
        let range = parse_range("2024/01/12 - 2024/01/10", &utc());
        assert!(range.start.unwrap() > range.end.unwrap());
    }

    #[test]
    fn test_invalid_calendar_date_leaves_side_unset() {
        // 2024/02/31 passes the token grammar but is not a real date
        let range = parse_range("2024/01/10 - 2024/02/31", &utc());
        assert_eq!(range.start, Some(1704844800));
        assert_eq!(range.end, None);
    }

    #[test]
    fn test_timezone_sensitivity() {
        let tokyo = TimeZoneContext::new("Asia/Tokyo").unwrap();
        let in_utc = parse_range("2024/01/10 - 2024/01/12", &utc());
        let in_tokyo = parse_range("2024/01/10 - 2024/01/12", &tokyo);
        // Tokyo is UTC+9: local midnight comes nine hours earlier
        assert_eq!(in_tokyo.start, Some(1704844800 - 9 * 3600));
        assert_eq!(
            in_utc.start.unwrap() - in_tokyo.start.unwrap(),
            9 * 3600
        );
    }

    #[test]
    fn test_dst_gap_resolves_to_none() {
        // Chile springs forward at midnight: 2024-09-08 00:00 does not exist
        // in Santiago, so the start side cannot resolve.
        let santiago = TimeZoneContext::new("America/Santiago").unwrap();
        let range = parse_range("2024/09/08 - 2024/09/10", &santiago);
        assert_eq!(range.start, None);
        assert!(range.end.is_some());
    }

    #[test]
    fn test_epoch_boundary_dates() {
        let range = parse_range("1970/01/01 - 1970/01/01", &utc());
        assert_eq!(range.start, Some(0));
        assert_eq!(range.end, Some(86399));
    }

    // ── Properties ──────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_valid_date_only_range_resolves_both_sides(
            y1 in 1970i32..=2037, m1 in 1u32..=12, d1 in 1u32..=28,
            y2 in 1970i32..=2037, m2 in 1u32..=12, d2 in 1u32..=28,
        ) {
            let text = format!("{y1:04}/{m1:02}/{d1:02} - {y2:04}/{m2:02}/{d2:02}");
            prop_assert!(is_valid_range(&text));

            let range = parse_range(&text, &TimeZoneContext::utc());
            let start = range.start.unwrap();
            let end = range.end.unwrap();
            // In UTC a date-only range always spans local midnight to 23:59:59
            prop_assert_eq!(start.rem_euclid(86400), 0);
            prop_assert_eq!(end.rem_euclid(86400), 86399);
        }

        #[test]
        fn prop_garbage_without_tokens_is_empty(text in "[a-zA-Z ,.!]{0,40}") {
            prop_assert!(parse_range(&text, &TimeZoneContext::utc()).is_empty());
        }
    }
}
