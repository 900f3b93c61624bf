//! Caller-supplied timezone and locale contexts.
//!
//! Every function in this crate that depends on the acting user's timezone or
//! display language takes one of these values as an explicit argument. Nothing
//! is read from ambient state or the server's local zone — the caller threads
//! the user's stored preference in, which also means a request cannot spoof a
//! different zone's interpretation of its own filter.

use chrono_tz::Tz;

use crate::error::RangeError;

/// The IANA timezone a range string is interpreted in.
///
/// Constructed from the acting user's stored preference, never inferred from
/// the server environment.
///
/// # Examples
///
/// ```
/// use gridrange::TimeZoneContext;
///
/// let tz = TimeZoneContext::new("Europe/Warsaw").unwrap();
/// assert_eq!(tz.name(), "Europe/Warsaw");
///
/// assert!(TimeZoneContext::new("Not/AZone").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZoneContext {
    tz: Tz,
}

impl TimeZoneContext {
    /// Parse an IANA timezone identifier (e.g. `"America/New_York"`).
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidTimezone`] if the identifier is not a
    /// valid IANA timezone.
    pub fn new(identifier: &str) -> Result<Self, RangeError> {
        identifier
            .parse::<Tz>()
            .map(|tz| Self { tz })
            .map_err(|_| RangeError::InvalidTimezone(format!("'{identifier}'")))
    }

    /// The UTC context, useful as a default and in tests.
    pub fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    /// The underlying timezone.
    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// The canonical IANA name.
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }
}

impl From<Tz> for TimeZoneContext {
    fn from(tz: Tz) -> Self {
        Self { tz }
    }
}

/// The active display language, used only for short-format alias resolution.
///
/// Accepts BCP-47-style tags (`en`, `de-AT`, `pl_PL`); normalization is
/// lowercasing with `_` treated as `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleContext {
    tag: String,
}

impl LocaleContext {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.trim().to_lowercase().replace('_', "-"),
        }
    }

    /// The full normalized tag (e.g. `"de-at"`).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The primary language subtag (e.g. `"de"` for `"de-AT"`).
    pub fn language(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new("en")
    }
}
