//! # gridrange
//!
//! Timezone-aware date-range filtering for grid views.
//!
//! A free-text range filter value (`2024/01/10 - 2024/01/12`) is validated,
//! parsed under the acting user's timezone into a pair of epoch-second query
//! bounds, and the configured date format is translated between the server,
//! ICU, and client-widget pattern notations so tooltips, validation, and the
//! picker widget all agree on one format.
//!
//! All computation is pure and per-request: contexts (timezone, display
//! language) are explicit caller-supplied values, never ambient state.
//!
//! ## Modules
//!
//! - [`context`] — Explicit timezone and locale contexts
//! - [`pattern`] — Date-format pattern translation between notations
//! - [`range`] — Range string → pair of absolute instants
//! - [`validate`] — Form-level accept/reject gate for range strings
//! - [`filter`] — Range string → discrete timestamp query bounds
//! - [`picker`] — JSON configuration for the client picker widgets
//! - [`error`] — Error types

pub mod context;
pub mod error;
pub mod filter;
pub mod pattern;
pub mod picker;
pub mod range;
pub mod validate;

pub use context::{LocaleContext, TimeZoneContext};
pub use error::RangeError;
pub use filter::{query_bounds, range_end, range_start};
pub use pattern::{
    datepicker_format, intl_to_datepicker, intl_to_moment, moment_format, resolve_named_format,
    source_to_intl,
};
pub use picker::{DatePickerConfig, PickerLocale, RangePickerConfig};
pub use range::{parse_range, ResolvedRange};
pub use validate::{is_valid_range, validate_range};
