//! Client picker widget configuration.
//!
//! The output boundary to the client-rendering collaborator: a
//! JSON-serializable options object whose format fields carry Display-grammar
//! patterns produced by [`crate::pattern`]. Every other option is
//! pass-through — this module configures the widgets, it does not interpret
//! their options.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::context::LocaleContext;
use crate::pattern::{datepicker_format, moment_format};

/// Localized strings and display format for the range picker.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerLocale {
    /// Display-grammar pattern the widget formats selections with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Pass-through locale options (separator, button labels, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Options object for the range picker widget.
///
/// Serializes with the widget's camelCase option names; unset options are
/// omitted. Options this subsystem does not understand travel in `extra`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangePickerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drops: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_dropdowns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_week_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_picker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_picker_increment: Option<u32>,
    #[serde(rename = "timePicker24Hour", skip_serializing_if = "Option::is_none")]
    pub time_picker_24_hour: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_picker_seconds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_date_picker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_update_input: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_calendars: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_show_calendars: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<PickerLocale>,
    /// Pass-through options (ranges, dateLimit, buttonClasses, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RangePickerConfig {
    /// The options a grid date column installs on its filter input: a
    /// left-opening picker with year/month dropdowns, 24-hour time selection
    /// when `filter_time` is set, and no automatic input update (the filter
    /// round-trips through form submission instead).
    pub fn grid_filter(filter_time: bool) -> Self {
        let format = if filter_time {
            "yyyy/MM/dd HH:mm"
        } else {
            "yyyy/MM/dd"
        };
        Self {
            opens: Some("left".to_string()),
            time_picker: Some(filter_time),
            time_picker_24_hour: Some(true),
            show_dropdowns: Some(true),
            auto_update_input: Some(false),
            locale: Some(PickerLocale {
                format: Some(format.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Run the configured `locale.format` through the range-picker pattern
    /// pipeline (source prefix, short-format aliases, Intl → Display).
    /// Must happen before the config is handed to the client.
    pub fn resolve_formats(mut self, locale_ctx: &LocaleContext) -> Self {
        if let Some(locale) = self.locale.as_mut() {
            if let Some(format) = locale.format.take() {
                locale.format = Some(moment_format(&format, locale_ctx));
            }
        }
        self
    }
}

/// Options object for the date-only picker widget.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePickerConfig {
    /// Display-grammar pattern (date-picker dialect).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoclose: Option<bool>,
    /// Pass-through options.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DatePickerConfig {
    /// The widget's stock configuration: close on selection.
    pub fn new() -> Self {
        Self {
            autoclose: Some(true),
            ..Default::default()
        }
    }

    /// Run `format` through the date-only picker pattern pipeline.
    pub fn resolve_format(mut self, locale_ctx: &LocaleContext) -> Self {
        if let Some(format) = self.format.take() {
            self.format = Some(datepicker_format(&format, locale_ctx));
        }
        self
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
