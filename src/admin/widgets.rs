use chrono::{DateTime, FixedOffset, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::jalali::{DateStyle, JalaliDate, JalaliDateTime, JalaliError};

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Enter a date.")]
    MissingDate,

    #[error("Enter a time.")]
    MissingTime,

    #[error("Enter a valid date: {0}")]
    InvalidDate(#[from] JalaliError),

    #[error("Enter a valid time: `{0}`")]
    InvalidTime(String),

    #[error("`{0}` does not exist in the display time zone")]
    NonexistentLocalTime(String),
}

/// Value of the split Jalali date/time widget: the date input
/// (`created_at_0`) and the time input (`created_at_1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SplitJalaliDateTime {
    /// `YYYY-MM-DD` or `YYYY/MM/DD`, Jalali calendar.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`.
    pub time: String,
}

impl SplitJalaliDateTime {
    pub fn new(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
        }
    }

    /// Initial widget values for `value` shown in the `offset` wall clock.
    pub fn from_datetime(value: &DateTime<Utc>, offset: FixedOffset) -> Self {
        let local = JalaliDateTime::from_datetime(&value.with_timezone(&offset));
        Self {
            date: local.date().format(DateStyle::Dash),
            time: local.time().format("%H:%M:%S").to_string(),
        }
    }

    /// Reads the two inputs as a wall-clock time in `offset`.
    pub fn parse(&self, offset: FixedOffset) -> Result<DateTime<Utc>, WidgetError> {
        let date = self.date.trim();
        let time = self.time.trim();
        if date.is_empty() {
            return Err(WidgetError::MissingDate);
        }
        if time.is_empty() {
            return Err(WidgetError::MissingTime);
        }

        let date: JalaliDate = date.parse()?;
        let time = TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(time, fmt).ok())
            .ok_or_else(|| WidgetError::InvalidTime(time.to_string()))?;

        let naive = JalaliDateTime::new(date, time).to_naive()?;
        offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| WidgetError::NonexistentLocalTime(naive.to_string()))
    }
}
