use chrono::{FixedOffset, TimeZone, Utc};
use jalali_store_admin::{
    admin::{
        AdminConfigError, ColumnKind, ListColumn, ModelAdmin, ModelField, WidgetKind,
        columns::{group_digits, jalali_date, toman_price},
        product::{DATE_COLUMN, NOW_FIX_SCRIPT, PRICE_COLUMN, ProductRow, product_admin},
    },
    jalali::DateStyle,
    models::Product,
};
use uuid::Uuid;

fn tehran() -> FixedOffset {
    FixedOffset::east_opt(210 * 60).unwrap()
}

fn sample_product() -> Product {
    Product {
        id: Uuid::new_v4(),
        name: "زعفران".into(),
        price: 1_234_567,
        created_at: Some(Utc.with_ymd_and_hms(2024, 3, 19, 21, 0, 0).unwrap()),
        is_active: true,
    }
}

#[test]
fn product_admin_is_consistent() {
    let admin = product_admin();
    assert_eq!(admin.validate(), Ok(()));

    let columns: Vec<&str> = admin.list_display.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(columns, ["name", PRICE_COLUMN, DATE_COLUMN, "is_active"]);
    assert_eq!(admin.list_filter, ["is_active", "created_at"]);
    assert_eq!(admin.search_fields, ["name"]);
    assert_eq!(admin.list_editable, ["is_active"]);
    assert_eq!(admin.fields, ["name", "price", "created_at", "is_active"]);
    assert_eq!(admin.ordering, ["-created_at"]);
    assert!(!admin.is_readonly("created_at"));
    assert_eq!(admin.widget_for("created_at"), Some(WidgetKind::SplitJalaliDateTime));
    assert_eq!(admin.media_js, [NOW_FIX_SCRIPT]);
    assert_eq!(admin.date_style, DateStyle::Dash);
    assert_eq!(admin.field_label("price"), Some("قیمت (تومان)"));
}

#[test]
fn computed_columns_sort_by_their_source_field() {
    let admin = product_admin();
    assert_eq!(admin.order_field_for(PRICE_COLUMN), Ok("price"));
    assert_eq!(admin.order_field_for(DATE_COLUMN), Ok("created_at"));
    assert_eq!(admin.order_field_for("name"), Ok("name"));
    assert_eq!(
        admin.order_field_for("missing"),
        Err(AdminConfigError::UnsortableColumn("missing".into()))
    );
    assert_eq!(
        admin.column(PRICE_COLUMN).map(|c| c.kind),
        Some(ColumnKind::Computed)
    );
}

#[test]
fn serialized_config_lists_every_option() {
    let value = serde_json::to_value(product_admin()).unwrap();
    assert_eq!(value["list_display"][1]["order_field"], "price");
    assert_eq!(value["list_editable"][0], "is_active");
    assert_eq!(value["widgets"][2]["widget"], "split_jalali_date_time");
    assert_eq!(value["date_style"], "dash");
}

fn minimal_admin() -> ModelAdmin {
    ModelAdmin::new("product")
        .with_model_fields(vec![
            ModelField::new("name", "name"),
            ModelField::new("is_active", "active"),
        ])
        .with_list_display(vec![
            ListColumn::field("name", "name"),
            ListColumn::field("is_active", "active"),
        ])
}

#[test]
fn validate_rejects_inconsistent_configs() {
    assert_eq!(minimal_admin().validate(), Ok(()));

    assert_eq!(
        minimal_admin().with_search_fields(vec!["sku"]).validate(),
        Err(AdminConfigError::UnknownField {
            option: "search_fields",
            field: "sku".into()
        })
    );
    assert_eq!(
        minimal_admin().with_list_editable(vec!["name"]).validate(),
        Err(AdminConfigError::EditableLinkColumn("name".into()))
    );
    assert_eq!(
        minimal_admin()
            .with_list_display(vec![ListColumn::field("name", "name")])
            .with_list_editable(vec!["is_active"])
            .validate(),
        Err(AdminConfigError::EditableNotDisplayed("is_active".into()))
    );
    assert_eq!(
        minimal_admin()
            .with_list_editable(vec!["is_active"])
            .with_readonly_fields(vec!["is_active"])
            .validate(),
        Err(AdminConfigError::ReadonlyEditable("is_active".into()))
    );
    assert!(minimal_admin().with_ordering(vec!["-created_at"]).validate().is_err());
}

#[test]
fn groups_digits_in_threes() {
    assert_eq!(group_digits(0), "0");
    assert_eq!(group_digits(999), "999");
    assert_eq!(group_digits(1000), "1,000");
    assert_eq!(group_digits(1_234_567), "1,234,567");
    assert_eq!(group_digits(u64::from(u32::MAX)), "4,294,967,295");
}

#[test]
fn toman_price_is_emphasized_with_suffix() {
    assert_eq!(toman_price(1_234_567), "<strong>1,234,567 تومان</strong>");
    assert_eq!(toman_price(0), "<strong>0 تومان</strong>");
}

#[test]
fn jalali_date_column_handles_both_styles_and_absence() {
    let at = tehran().with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap();
    assert_eq!(jalali_date(Some(&at), DateStyle::Dash), "1403-01-01");
    assert_eq!(jalali_date(Some(&at), DateStyle::Slash), "1403/01/01");
    assert_eq!(jalali_date::<FixedOffset>(None, DateStyle::Dash), "-");
}

#[test]
fn rows_render_in_the_display_offset() {
    let product = sample_product();
    let row = ProductRow::render(&product, DateStyle::Dash, tehran());
    assert_eq!(row.name, "زعفران");
    assert_eq!(row.price, 1_234_567);
    assert_eq!(row.price_display, "<strong>1,234,567 تومان</strong>");
    // 21:00 UTC is already the next day in Tehran.
    assert_eq!(row.created_at_display, "1403-01-01");
    assert!(row.is_active);

    let unsaved = Product {
        created_at: None,
        ..sample_product()
    };
    assert_eq!(
        ProductRow::render(&unsaved, DateStyle::Slash, tehran()).created_at_display,
        "-"
    );
}

#[test]
fn product_label_is_its_name() {
    assert_eq!(sample_product().to_string(), "زعفران");
}
