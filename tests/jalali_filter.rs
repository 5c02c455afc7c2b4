use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use jalali_store_admin::{
    templates::build_templates,
    templatetags::{self, jalali_datetime, jalali_datetime_filter, jalali_datetime_value},
};
use serde_json::{Value, json};
use tera::{Context, Tera};

fn is_jalali_datetime(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 19
        && s.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            10 => c == ' ',
            13 | 16 => c == ':',
            _ => c.is_ascii_digit(),
        })
}

#[test]
fn absent_value_renders_empty() {
    assert_eq!(jalali_datetime::<Utc>(None), "");
    assert_eq!(jalali_datetime_value(&Value::Null), json!(""));
    assert_eq!(jalali_datetime_value(&json!("")), json!(""));
    assert_eq!(jalali_datetime_value(&json!("   ")), json!(""));
}

#[test]
fn typed_datetime_is_converted() {
    let tehran = FixedOffset::east_opt(210 * 60).unwrap();
    let value = tehran.with_ymd_and_hms(2024, 3, 20, 10, 15, 30).unwrap();
    let rendered = jalali_datetime(Some(&value));
    assert_eq!(rendered, "1403-01-01 10:15:30");
    assert!(is_jalali_datetime(&rendered));
}

#[test]
fn timestamp_strings_are_converted() {
    assert_eq!(
        jalali_datetime_value(&json!("2024-03-20T10:15:30+03:30")),
        json!("1403-01-01 10:15:30")
    );
    assert_eq!(
        jalali_datetime_value(&json!("2024-03-19T22:00:00Z")),
        json!("1402-12-29 22:00:00")
    );
    assert_eq!(
        jalali_datetime_value(&json!("2024-03-20 08:05:09")),
        json!("1403-01-01 08:05:09")
    );
    assert_eq!(
        jalali_datetime_value(&json!("2024-03-20T08:05:09.123456")),
        json!("1403-01-01 08:05:09")
    );
}

#[test]
fn malformed_values_fall_back_unchanged() {
    for value in [
        json!("not a date"),
        json!("2024-13-40 10:00:00"),
        // Converts to a year before 1 in the Jalali calendar.
        json!("0001-01-01 00:00:00"),
        json!("0500-06-01T12:00:00+00:00"),
        json!(1_700_000_000),
        json!(true),
        json!([1, 2, 3]),
        json!({ "at": "2024-03-20" }),
    ] {
        assert_eq!(jalali_datetime_value(&value), value);
    }
}

#[test]
fn filter_never_errors() {
    let args = HashMap::new();
    assert_eq!(
        jalali_datetime_filter(&json!("garbage"), &args).expect("filter result"),
        json!("garbage")
    );
    assert_eq!(
        jalali_datetime_filter(&Value::Null, &args).expect("filter result"),
        json!("")
    );
}

#[test]
fn filter_is_usable_from_templates() {
    let mut tera = Tera::default();
    templatetags::register(&mut tera);
    tera.add_raw_template("t", "[{{ at | jalali_datetime }}]")
        .expect("template compiles");

    let at: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339("2026-10-18T15:30:00+03:30").unwrap();
    let mut context = Context::new();
    context.insert("at", &at.to_rfc3339());
    assert_eq!(tera.render("t", &context).unwrap(), "[1405-07-26 15:30:00]");

    let mut context = Context::new();
    context.insert("at", &Option::<String>::None);
    assert_eq!(tera.render("t", &context).unwrap(), "[]");

    let mut context = Context::new();
    context.insert("at", "yesterday");
    assert_eq!(tera.render("t", &context).unwrap(), "[yesterday]");
}

#[test]
fn bundled_templates_compile() {
    let tera = build_templates().expect("templates compile");
    assert!(tera.get_template_names().any(|name| name == "admin/product_changelist.html"));
}
