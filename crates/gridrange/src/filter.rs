//! Filter query adapter: bound range string → discrete query bounds.
//!
//! The bridge between a grid column's filter input and the two inclusive
//! bounds a timestamp-column query needs. The timezone is always the acting
//! user's stored preference threaded in by the caller — never a
//! request-supplied value, so a user cannot spoof another zone's
//! interpretation of their own filter.
//!
//! An absent bound (`None`) means the side did not resolve; whether that
//! reads as "unbounded" or "filter matches nothing" is call-site policy.

use crate::context::TimeZoneContext;
use crate::range::parse_range;

/// Epoch seconds for the start of the range, or `None`.
///
/// # Examples
///
/// ```
/// use gridrange::{filter::range_start, TimeZoneContext};
///
/// let tz = TimeZoneContext::utc();
/// assert_eq!(range_start(Some("2024/01/10 - 2024/01/12"), &tz), Some(1704844800));
/// assert_eq!(range_start(None, &tz), None);
/// ```
pub fn range_start(dates: Option<&str>, tz: &TimeZoneContext) -> Option<i64> {
    dates.and_then(|text| parse_range(text, tz).start)
}

/// Epoch seconds for the end of the range, or `None`.
pub fn range_end(dates: Option<&str>, tz: &TimeZoneContext) -> Option<i64> {
    dates.and_then(|text| parse_range(text, tz).end)
}

/// Both bounds from a single parse, as `(start, end)`.
pub fn query_bounds(dates: Option<&str>, tz: &TimeZoneContext) -> (Option<i64>, Option<i64>) {
    match dates {
        Some(text) => {
            let range = parse_range(text, tz);
            (range.start, range.end)
        }
        None => (None, None),
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
