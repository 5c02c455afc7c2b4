use chrono::FixedOffset;
use jalali_store_admin::config::{default_display_offset, parse_display_offset};

#[test]
fn default_offset_is_tehran() {
    assert_eq!(default_display_offset(), FixedOffset::east_opt(12_600).unwrap());
}

#[test]
fn parses_offsets_in_minutes() {
    assert_eq!(
        parse_display_offset(" 210 ").unwrap(),
        FixedOffset::east_opt(210 * 60).unwrap()
    );
    assert_eq!(
        parse_display_offset("-300").unwrap(),
        FixedOffset::west_opt(300 * 60).unwrap()
    );
    assert!(parse_display_offset("+03:30").is_err());
    assert!(parse_display_offset("2000").is_err());
}
