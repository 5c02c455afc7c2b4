//! Gregorian <-> Jalali (Solar Hijri) calendar conversion.
//!
//! Uses the 33-year arithmetic cycle. Every function here is pure so it can
//! be exercised without a database or a template engine.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Days before the first of each Gregorian month in a common year.
const GREGORIAN_DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JalaliError {
    #[error("invalid jalali date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("date is outside the supported range")]
    OutOfRange,

    #[error("cannot parse jalali date `{0}`")]
    Parse(String),
}

/// Separator used when a Jalali date is rendered without its time part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    #[default]
    Dash,
    /// `YYYY/MM/DD`
    Slash,
}

impl DateStyle {
    pub fn separator(self) -> char {
        match self {
            DateStyle::Dash => '-',
            DateStyle::Slash => '/',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    year: i32,
    month: u32,
    day: u32,
}

impl JalaliDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, JalaliError> {
        let invalid = JalaliError::InvalidDate { year, month, day };
        if year < 1 || !(1..=12).contains(&month) || day < 1 {
            return Err(invalid);
        }
        if day > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self { year, month, day })
    }

    pub fn from_gregorian(date: NaiveDate) -> Self {
        let (year, month, day) = gregorian_to_jalali(date.year(), date.month(), date.day());
        Self { year, month, day }
    }

    pub fn to_gregorian(self) -> Result<NaiveDate, JalaliError> {
        jalali_to_gregorian(self.year, self.month, self.day).ok_or(JalaliError::OutOfRange)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn format(&self, style: DateStyle) -> String {
        let sep = style.separator();
        format!("{:04}{sep}{:02}{sep}{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DateStyle::Dash))
    }
}

impl FromStr for JalaliDate {
    type Err = JalaliError;

    /// Accepts `YYYY-MM-DD` and `YYYY/MM/DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || JalaliError::Parse(s.to_string());
        let parts: Vec<&str> = s.trim().split(['-', '/']).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(parse_err());
        };
        if [year, month, day]
            .iter()
            .any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(parse_err());
        }
        let year = year.parse::<i32>().map_err(|_| parse_err())?;
        let month = month.parse::<u32>().map_err(|_| parse_err())?;
        let day = day.parse::<u32>().map_err(|_| parse_err())?;
        Self::new(year, month, day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDateTime {
    date: JalaliDate,
    time: NaiveTime,
}

impl JalaliDateTime {
    pub fn new(date: JalaliDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    pub fn from_naive(value: NaiveDateTime) -> Self {
        Self {
            date: JalaliDate::from_gregorian(value.date()),
            time: value.time(),
        }
    }

    /// Converts using the wall clock of the value's own offset.
    pub fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Self {
        Self::from_naive(value.naive_local())
    }

    pub fn date(&self) -> JalaliDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn to_naive(&self) -> Result<NaiveDateTime, JalaliError> {
        Ok(self.date.to_gregorian()?.and_time(self.time))
    }
}

impl fmt::Display for JalaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            self.date,
            self.time.hour(),
            self.time.minute(),
            self.time.second()
        )
    }
}

pub fn is_leap_year(year: i32) -> bool {
    // A year is leap when its 30th of Esfand survives a round trip.
    jalali_to_gregorian(year, 12, 30)
        .map(|g| gregorian_to_jalali(g.year(), g.month(), g.day()) == (year, 12, 30))
        .unwrap_or(false)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Gregorian (year, month 1..=12, day) to Jalali (year, month, day).
pub fn gregorian_to_jalali(gy: i32, gm: u32, gd: u32) -> (i32, u32, u32) {
    let gy = i64::from(gy);
    let month_index = (gm.clamp(1, 12) - 1) as usize;
    let gy2 = if gm > 2 { gy + 1 } else { gy };
    let mut days = 355_666 + 365 * gy + (gy2 + 3).div_euclid(4) - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        + i64::from(gd)
        + GREGORIAN_DAYS_BEFORE_MONTH[month_index];

    let mut jy = -1595 + 33 * days.div_euclid(12053);
    days = days.rem_euclid(12053);
    jy += 4 * days.div_euclid(1461);
    days = days.rem_euclid(1461);
    if days > 365 {
        jy += (days - 1).div_euclid(365);
        days = (days - 1).rem_euclid(365);
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    (jy as i32, jm as u32, jd as u32)
}

/// Jalali (year, month, day) to a Gregorian date. Does not validate the
/// Jalali day against the month length; use [`JalaliDate::new`] for that.
pub fn jalali_to_gregorian(jy: i32, jm: u32, jd: u32) -> Option<NaiveDate> {
    let jy = i64::from(jy) + 1595;
    let jm = i64::from(jm);
    let month_days = if jm < 7 {
        (jm - 1) * 31
    } else {
        (jm - 7) * 30 + 186
    };
    let mut days = -355_668 + 365 * jy + jy.div_euclid(33) * 8 + (jy.rem_euclid(33) + 3).div_euclid(4)
        + i64::from(jd)
        + month_days;

    let mut gy = 400 * days.div_euclid(146_097);
    days = days.rem_euclid(146_097);
    if days > 36524 {
        days -= 1;
        gy += 100 * days.div_euclid(36524);
        days = days.rem_euclid(36524);
        if days >= 365 {
            days += 1;
        }
    }
    gy += 4 * days.div_euclid(1461);
    days = days.rem_euclid(1461);
    if days > 365 {
        gy += (days - 1).div_euclid(365);
        days = (days - 1).rem_euclid(365);
    }

    let year = i32::try_from(gy).ok()?;
    let ordinal = u32::try_from(days + 1).ok()?;
    NaiveDate::from_yo_opt(year, ordinal)
}
