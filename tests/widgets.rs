use chrono::{FixedOffset, TimeZone, Utc};
use jalali_store_admin::{
    admin::widgets::{SplitJalaliDateTime, WidgetError},
    jalali::JalaliError,
};

fn tehran() -> FixedOffset {
    FixedOffset::east_opt(210 * 60).unwrap()
}

#[test]
fn parses_wall_clock_in_display_offset() {
    let widget = SplitJalaliDateTime::new("1403/01/01", "00:00");
    assert_eq!(
        widget.parse(tehran()),
        Ok(Utc.with_ymd_and_hms(2024, 3, 19, 20, 30, 0).unwrap())
    );

    let widget = SplitJalaliDateTime::new("1405-07-26", "15:30:45");
    assert_eq!(
        widget.parse(tehran()),
        Ok(Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 45).unwrap())
    );
}

#[test]
fn initial_values_round_trip() {
    let at = Utc.with_ymd_and_hms(2024, 3, 19, 20, 30, 0).unwrap();
    let widget = SplitJalaliDateTime::from_datetime(&at, tehran());
    assert_eq!(widget, SplitJalaliDateTime::new("1403-01-01", "00:00:00"));
    assert_eq!(widget.parse(tehran()), Ok(at));
}

#[test]
fn reports_missing_and_invalid_parts() {
    assert_eq!(
        SplitJalaliDateTime::new("", "10:00").parse(tehran()),
        Err(WidgetError::MissingDate)
    );
    assert_eq!(
        SplitJalaliDateTime::new("1403-01-01", " ").parse(tehran()),
        Err(WidgetError::MissingTime)
    );
    assert_eq!(
        SplitJalaliDateTime::new("1404-12-30", "10:00").parse(tehran()),
        Err(WidgetError::InvalidDate(JalaliError::InvalidDate {
            year: 1404,
            month: 12,
            day: 30
        }))
    );
    assert_eq!(
        SplitJalaliDateTime::new("1403-01-01", "25:00").parse(tehran()),
        Err(WidgetError::InvalidTime("25:00".into()))
    );
}
