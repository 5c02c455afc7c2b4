//! Template filters for Jalali rendering.
//!
//! ```tera
//! {{ action.action_time | jalali_datetime }}
//! ```

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, TimeZone};
use tera::{Result as TeraResult, Tera, Value};

use crate::jalali::JalaliDateTime;

pub const JALALI_DATETIME: &str = "jalali_datetime";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS` in the Jalali calendar.
/// An absent value renders as an empty string.
pub fn jalali_datetime<Tz: TimeZone>(value: Option<&DateTime<Tz>>) -> String {
    value
        .map(|dt| JalaliDateTime::from_datetime(dt).to_string())
        .unwrap_or_default()
}

/// Filter entry point for template values.
///
/// `null` and `""` give `""`. Strings holding an RFC 3339 or naive ISO
/// timestamp are converted. Anything else is handed back untouched so a
/// bad value never aborts a page render.
pub fn jalali_datetime_value(value: &Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        Value::String(s) if s.trim().is_empty() => Value::String(String::new()),
        Value::String(s) => match parse_timestamp(s) {
            Some(converted) => Value::String(converted.to_string()),
            None => {
                tracing::debug!(value = %s, "jalali_datetime could not convert value");
                value.clone()
            }
        },
        other => {
            tracing::debug!(value = %other, "jalali_datetime received a non-datetime value");
            other.clone()
        }
    }
}

/// Tera-compatible signature; never returns an error.
pub fn jalali_datetime_filter(value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
    Ok(jalali_datetime_value(value))
}

pub fn register(tera: &mut Tera) {
    tera.register_filter(JALALI_DATETIME, jalali_datetime_filter);
}

/// Jalali years that render as four digits.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

fn parse_timestamp(raw: &str) -> Option<JalaliDateTime> {
    let raw = raw.trim();
    let converted = match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => JalaliDateTime::from_datetime(&dt),
        Err(_) => NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(JalaliDateTime::from_naive)?,
    };
    YEAR_RANGE
        .contains(&converted.date().year())
        .then_some(converted)
}
