//! Date-format pattern translation between three notations.
//!
//! A single configured date format has to stay consistent across three
//! consumers that each speak a different pattern language:
//!
//! - **Source** — the server-side formatter's single-letter tokens
//!   (e.g. `Y-m-d H:i:s`)
//! - **Intl** — ICU tokens (e.g. `yyyy-MM-dd`)
//! - **Display** — client widget tokens, in two dialects: the date-only
//!   picker's (e.g. `yyyy-mm-dd`) and the range picker's moment-style
//!   (e.g. `YYYY-MM-DD`)
//!
//! Translation is best-effort and never fails: unrecognized tokens and
//! patterns pass through unchanged. The range-picker conversion is a
//! whole-pattern lookup rather than a token remap because case carries
//! inverted meaning between ICU and moment (`MM` month vs. `mm` minute,
//! `dd` day vs. `DD` day-of-year) — an unknown combination is safer passed
//! through than silently misread.

use crate::context::LocaleContext;

/// Prefix marking a pattern written in the Source grammar rather than ICU.
pub const SOURCE_PREFIX: &str = "source:";

// ── Source → Intl ───────────────────────────────────────────────────────────

/// Translate a Source-grammar pattern to ICU, token by token.
///
/// Covers the token subset the server format layer emits; a backslash-escaped
/// character becomes an ICU quoted literal (`\T` → `'T'`); anything else
/// passes through unchanged.
///
/// # Examples
///
/// ```
/// use gridrange::pattern::source_to_intl;
///
/// assert_eq!(source_to_intl("Y-m-d H:i:s"), "yyyy-MM-dd HH:mm:ss");
/// assert_eq!(source_to_intl("d/m/Y"), "dd/MM/yyyy");
/// ```
pub fn source_to_intl(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            // Escaped character → ICU quoted literal
            match chars.next() {
                Some('\'') => out.push_str("''"),
                Some(lit) => {
                    out.push('\'');
                    out.push(lit);
                    out.push('\'');
                }
                None => out.push('\\'),
            }
            continue;
        }
        out.push_str(match ch {
            'Y' => "yyyy",
            'y' => "yy",
            'F' => "MMMM",
            'M' => "MMM",
            'm' => "MM",
            'n' => "M",
            'd' => "dd",
            'j' => "d",
            'l' => "eeee",
            'D' => "eee",
            'N' => "e",
            'H' => "HH",
            'G' => "H",
            'h' => "hh",
            'g' => "h",
            'i' => "mm",
            's' => "ss",
            'a' | 'A' => "a",
            'e' => "VV",
            'O' => "xx",
            'P' => "xxx",
            'T' => "zzz",
            _ => {
                out.push(ch);
                continue;
            }
        });
    }
    out
}

// ── Intl → Display (date-only picker dialect) ───────────────────────────────

/// The date-only picker's token remap: ICU token, picker token.
///
/// Ordered longest-first; scanning is a single left-to-right pass and the
/// output is never re-scanned, so `yyyy` cannot be re-read as two `yy`.
const DATEPICKER_TOKENS: &[(&str, &str)] = &[
    ("yyyy", "yyyy"),
    ("eeee", "DD"),
    ("MMMM", "MM"),
    ("MMM", "M"),
    ("eee", "D"),
    ("yy", "yy"),
    ("MM", "mm"),
    ("dd", "dd"),
    ("M", "m"),
    ("d", "d"),
];

/// Translate an ICU date pattern to the date-only picker's dialect.
///
/// Tokens outside the lookup table pass through unchanged.
///
/// # Examples
///
/// ```
/// use gridrange::pattern::intl_to_datepicker;
///
/// assert_eq!(intl_to_datepicker("yyyy-MM-dd"), "yyyy-mm-dd");
/// assert_eq!(intl_to_datepicker("eee, MMMM d"), "D, MM d");
/// ```
pub fn intl_to_datepicker(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    'outer: while !rest.is_empty() {
        for (icu, picker) in DATEPICKER_TOKENS {
            if let Some(after) = rest.strip_prefix(icu) {
                out.push_str(picker);
                rest = after;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }
    out
}

// ── Intl → Display (range picker / moment dialect) ──────────────────────────

/// Translate an ICU pattern to the range picker's moment-style dialect.
///
/// A whole-pattern exact lookup over the common real-world formats; anything
/// not in the table is returned unchanged. Extending coverage means adding a
/// table entry, not attempting per-token translation.
///
/// # Examples
///
/// ```
/// use gridrange::pattern::intl_to_moment;
///
/// assert_eq!(intl_to_moment("yyyy-MM-dd"), "YYYY-MM-DD");
/// assert_eq!(intl_to_moment("h:mm a"), "h:mm a"); // unknown → unchanged
/// ```
pub fn intl_to_moment(pattern: &str) -> String {
    match pattern {
        "yyyy-MM-dd'T'HH:mm:ssZZZZZ" => "YYYY-MM-DDTHH:mm:ssZZ", // 2014-05-14T13:55:01+02:00
        "yyyy-MM-dd" => "YYYY-MM-DD",                            // 2014-05-14
        "yyyy/MM/dd" => "YYYY/MM/DD",                            // 2014/05/14
        "yyyy.MM.dd" => "YYYY.MM.DD",                            // 2014.05.14
        "dd.MM.yyyy, HH:mm" => "DD.MM.YYYY, HH:mm",              // 14.05.2014, 13:55
        "MM.dd.yyyy, HH:mm" => "MM.DD.YYYY, HH:mm",              // 05.14.2014, 13:55
        "dd.MM.yyyy, HH:mm:ss" => "DD.MM.YYYY, HH:mm:ss",        // 14.05.2014, 13:55:01
        "MM.dd.yyyy, HH:mm:ss" => "MM.DD.YYYY, HH:mm:ss",        // 05.14.2014, 13:55:01
        "dd.MM.yyyy" => "DD.MM.YYYY",                            // 14.05.2014
        "MM.dd.yyyy" => "MM.DD.YYYY",                            // 05.14.2014
        "dd/MM/yyyy" => "DD/MM/YYYY",                            // 14/05/2014
        "MM/dd/yyyy" => "MM/DD/YYYY",                            // 05/14/2014
        "dd/MM/yyyy HH:mm" => "DD/MM/YYYY HH:mm",                // 14/05/2014 13:55
        "MM/dd/yyyy HH:mm" => "MM/DD/YYYY HH:mm",                // 05/14/2014 13:55
        "yyyy/MM/dd HH:mm" => "YYYY/MM/DD HH:mm",                // 2014/05/14 13:55
        "EE, dd/MM/yyyy HH:mm" => "ddd, DD/MM/YYYY HH:mm",       // Wed, 14/05/2014 13:55
        "EE, MM/dd/yyyy HH:mm" => "ddd, MM/DD/YYYY HH:mm",       // Wed, 05/14/2014 13:55
        "dd-MM-yyyy" => "DD-MM-YYYY",                            // 14-05-2014
        "MM-dd-yyyy" => "MM-DD-YYYY",                            // 05-14-2014
        "dd-MM-yyyy HH:mm" => "DD-MM-YYYY HH:mm",                // 14-05-2014 13:55
        "MM-dd-yyyy HH:mm" => "MM-DD-YYYY HH:mm",                // 05-14-2014 13:55
        "dd-MM-yyyy HH:mm:ss" => "DD-MM-YYYY HH:mm:ss",          // 14-05-2014 13:55:01
        "MM-dd-yyyy HH:mm:ss" => "MM-DD-YYYY HH:mm:ss",          // 05-14-2014 13:55:01
        "MMMM dd, yyyy" => "MMMM DD, YYYY",                      // May 14, 2014
        "MMM d, y" => "MMM D, YYYY",                             // May 14, 2014
        "yyyy-MM-dd HH:mm" => "YYYY-MM-DD HH:mm",                // 2014-05-14 13:55
        other => other,
    }
    .to_string()
}

// ── Short-format aliases ────────────────────────────────────────────────────

/// Locale date formats, length-specific: short, medium, long, full.
type LengthFormats = [&'static str; 4];

/// CLDR-derived date patterns for the display languages the application
/// ships. Unlisted locales fall back through the primary subtag to English.
fn locale_formats(tag: &str) -> Option<LengthFormats> {
    match tag {
        "en" | "en-us" => Some(["M/d/yy", "MMM d, y", "MMMM d, y", "EEEE, MMMM d, y"]),
        "en-gb" => Some(["dd/MM/y", "d MMM y", "d MMMM y", "EEEE d MMMM y"]),
        "de" => Some(["dd.MM.yy", "dd.MM.y", "d. MMMM y", "EEEE, d. MMMM y"]),
        "fr" => Some(["dd/MM/y", "d MMM y", "d MMMM y", "EEEE d MMMM y"]),
        "pl" => Some(["dd.MM.y", "d MMM y", "d MMMM y", "EEEE, d MMMM y"]),
        "ru" => Some(["dd.MM.y", "d MMM y 'г'.", "d MMMM y 'г'.", "EEEE, d MMMM y 'г'."]),
        _ => None,
    }
}

fn alias_index(name: &str) -> Option<usize> {
    match name {
        "short" => Some(0),
        "medium" => Some(1),
        "long" => Some(2),
        "full" => Some(3),
        _ => None,
    }
}

/// Resolve a short-format alias (`short`/`medium`/`long`/`full`) to the
/// locale- and length-specific ICU pattern. Any other pattern is returned
/// unchanged. This runs before grammar translation.
///
/// # Examples
///
/// ```
/// use gridrange::{pattern::resolve_named_format, LocaleContext};
///
/// let de = LocaleContext::new("de-AT");
/// assert_eq!(resolve_named_format("medium", &de), "dd.MM.y");
/// assert_eq!(resolve_named_format("yyyy-MM-dd", &de), "yyyy-MM-dd");
/// ```
pub fn resolve_named_format(pattern: &str, locale: &LocaleContext) -> String {
    let Some(idx) = alias_index(pattern) else {
        return pattern.to_string();
    };
    let formats = locale_formats(locale.tag())
        .or_else(|| locale_formats(locale.language()))
        .or_else(|| locale_formats("en"))
        .unwrap_or(["M/d/yy", "MMM d, y", "MMMM d, y", "EEEE, MMMM d, y"]);
    formats[idx].to_string()
}

// ── Widget pipelines ────────────────────────────────────────────────────────

/// Normalize a configured pattern to ICU: strip the `source:` prefix through
/// [`source_to_intl`], then resolve short-format aliases.
fn to_intl(pattern: &str, locale: &LocaleContext) -> String {
    let intl = match pattern.strip_prefix(SOURCE_PREFIX) {
        Some(source) => source_to_intl(source),
        None => pattern.to_string(),
    };
    resolve_named_format(&intl, locale)
}

/// The full range-picker pipeline: configured pattern → moment-dialect
/// display pattern.
pub fn moment_format(pattern: &str, locale: &LocaleContext) -> String {
    intl_to_moment(&to_intl(pattern, locale))
}

/// The full date-only picker pipeline: configured pattern → picker-dialect
/// display pattern.
pub fn datepicker_format(pattern: &str, locale: &LocaleContext) -> String {
    intl_to_datepicker(&to_intl(pattern, locale))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── source_to_intl ──────────────────────────────────────────────────

    #[test]
    fn test_source_datetime_pattern() {
        assert_eq!(source_to_intl("Y-m-d H:i:s"), "yyyy-MM-dd HH:mm:ss");
    }

    #[test]
    fn test_source_date_variants() {
        assert_eq!(source_to_intl("d/m/Y"), "dd/MM/yyyy");
        assert_eq!(source_to_intl("j.n.y"), "d.M.yy");
        assert_eq!(source_to_intl("l, F j"), "eeee, MMMM d");
    }

    #[test]
    fn test_source_escaped_literal() {
        assert_eq!(source_to_intl("Y-m-d\\TH:i:s"), "yyyy-MM-dd'T'HH:mm:ss");
    }

    #[test]
    fn test_source_unknown_tokens_pass_through() {
        assert_eq!(source_to_intl("Y?m"), "yyyy?MM");
    }

    // ── intl_to_datepicker ──────────────────────────────────────────────

    #[test]
    fn test_datepicker_iso_date() {
        assert_eq!(intl_to_datepicker("yyyy-MM-dd"), "yyyy-mm-dd");
    }

    #[test]
    fn test_datepicker_month_names() {
        assert_eq!(intl_to_datepicker("MMMM d, yyyy"), "MM d, yyyy");
        assert_eq!(intl_to_datepicker("MMM d"), "M d");
    }

    #[test]
    fn test_datepicker_weekday_tokens() {
        assert_eq!(intl_to_datepicker("eeee"), "DD");
        assert_eq!(intl_to_datepicker("eee"), "D");
    }

    #[test]
    fn test_datepicker_single_pass_no_rescan() {
        // MMMM → MM must not be re-read as a month-number token
        assert_eq!(intl_to_datepicker("MMMM"), "MM");
        // and two-digit year stays a two-digit year
        assert_eq!(intl_to_datepicker("yy"), "yy");
    }

    #[test]
    fn test_datepicker_unknown_pass_through() {
        assert_eq!(intl_to_datepicker("HH:mm"), "HH:mm");
    }

    // ── intl_to_moment ──────────────────────────────────────────────────

    #[test]
    fn test_moment_known_patterns_exact() {
        assert_eq!(intl_to_moment("yyyy-MM-dd"), "YYYY-MM-DD");
        assert_eq!(intl_to_moment("dd.MM.yyyy, HH:mm"), "DD.MM.YYYY, HH:mm");
        assert_eq!(intl_to_moment("MMM d, y"), "MMM D, YYYY");
        assert_eq!(
            intl_to_moment("yyyy-MM-dd'T'HH:mm:ssZZZZZ"),
            "YYYY-MM-DDTHH:mm:ssZZ"
        );
    }

    #[test]
    fn test_moment_identity_for_unknown_pattern() {
        assert_eq!(intl_to_moment("h:mm a"), "h:mm a");
        assert_eq!(intl_to_moment(""), "");
        // Near-miss of a table entry must not partially translate
        assert_eq!(intl_to_moment("yyyy-MM-dd "), "yyyy-MM-dd ");
    }

    // ── short-format aliases ────────────────────────────────────────────

    #[test]
    fn test_alias_resolution_per_locale() {
        let en = LocaleContext::new("en");
        let de = LocaleContext::new("de");
        assert_eq!(resolve_named_format("short", &en), "M/d/yy");
        assert_eq!(resolve_named_format("short", &de), "dd.MM.yy");
        assert_eq!(resolve_named_format("full", &en), "EEEE, MMMM d, y");
    }

    #[test]
    fn test_alias_falls_back_through_primary_subtag() {
        let de_at = LocaleContext::new("de_AT");
        assert_eq!(resolve_named_format("medium", &de_at), "dd.MM.y");
    }

    #[test]
    fn test_alias_unknown_locale_falls_back_to_english() {
        let xx = LocaleContext::new("xx-YY");
        assert_eq!(resolve_named_format("medium", &xx), "MMM d, y");
    }

    #[test]
    fn test_non_alias_pattern_unchanged() {
        let en = LocaleContext::new("en");
        assert_eq!(resolve_named_format("yyyy/MM/dd", &en), "yyyy/MM/dd");
    }

    // ── widget pipelines ────────────────────────────────────────────────

    #[test]
    fn test_moment_format_from_source_prefix() {
        let en = LocaleContext::new("en");
        assert_eq!(moment_format("source:Y-m-d", &en), "YYYY-MM-DD");
    }

    #[test]
    fn test_moment_format_resolves_alias_before_translation() {
        // en medium = "MMM d, y", which the moment table knows
        let en = LocaleContext::new("en");
        assert_eq!(moment_format("medium", &en), "MMM D, YYYY");
    }

    #[test]
    fn test_datepicker_format_pipeline() {
        let en = LocaleContext::new("en");
        assert_eq!(datepicker_format("source:Y-m-d", &en), "yyyy-mm-dd");
        // en long = "MMMM d, y"; the bare CLDR `y` is not a picker token
        assert_eq!(datepicker_format("long", &en), "MM d, y");
    }
}
