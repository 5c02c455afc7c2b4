//! Display-only changelist columns. These never touch stored data.

use chrono::{DateTime, TimeZone};

use crate::jalali::{DateStyle, JalaliDate};

pub const CURRENCY_SUFFIX: &str = "تومان";
pub const EMPTY_VALUE_DISPLAY: &str = "-";

/// Groups decimal digits in threes with commas: `1234567` -> `1,234,567`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `<strong>1,234,567 تومان</strong>`
pub fn toman_price(price: u32) -> String {
    format!(
        "<strong>{} {CURRENCY_SUFFIX}</strong>",
        group_digits(u64::from(price))
    )
}

/// Jalali calendar date of `created_at`, or `-` when it is unset.
pub fn jalali_date<Tz: TimeZone>(created_at: Option<&DateTime<Tz>>, style: DateStyle) -> String {
    match created_at {
        Some(dt) => JalaliDate::from_gregorian(dt.naive_local().date()).format(style),
        None => EMPTY_VALUE_DISPLAY.to_string(),
    }
}
