use chrono::FixedOffset;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{
    ListColumn, ModelAdmin, ModelField, WidgetKind,
    columns::{jalali_date, toman_price},
};
use crate::{jalali::DateStyle, models::Product};

pub const NOW_FIX_SCRIPT: &str = "admin/js/jalali_now_fix.js";

pub const PRICE_COLUMN: &str = "get_toman_price";
pub const DATE_COLUMN: &str = "get_jalali_date";

/// Admin registration for [`Product`].
///
/// `created_at` stays editable through the split Jalali widget and the
/// date column uses dashes.
pub fn product_admin() -> ModelAdmin {
    ModelAdmin::new("product")
        .with_verbose_names("محصول", "محصولات")
        .with_model_fields(vec![
            ModelField::new("name", "نام محصول"),
            ModelField::new("price", "قیمت (تومان)").with_help_text("قیمت را به تومان وارد کنید"),
            ModelField::new("created_at", "تاریخ ایجاد"),
            ModelField::new("is_active", "فعال"),
        ])
        .with_list_display(vec![
            ListColumn::field("name", "نام محصول"),
            ListColumn::computed(PRICE_COLUMN, "قیمت").order_by("price"),
            ListColumn::computed(DATE_COLUMN, "تاریخ ثبت").order_by("created_at"),
            ListColumn::field("is_active", "فعال"),
        ])
        .with_list_filter(vec!["is_active", "created_at"])
        .with_search_fields(vec!["name"])
        .with_list_editable(vec!["is_active"])
        .with_fields(vec!["name", "price", "created_at", "is_active"])
        .with_ordering(vec!["-created_at"])
        .with_widget("name", WidgetKind::TextInput)
        .with_widget("price", WidgetKind::NumberInput)
        .with_widget("created_at", WidgetKind::SplitJalaliDateTime)
        .with_widget("is_active", WidgetKind::CheckboxInput)
        .with_media_js(NOW_FIX_SCRIPT)
        .with_date_style(DateStyle::Dash)
}

/// One rendered changelist row.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub price: u32,
    pub price_display: String,
    pub created_at_display: String,
    pub is_active: bool,
}

impl ProductRow {
    pub fn render(product: &Product, style: DateStyle, offset: FixedOffset) -> Self {
        let local = product.created_at.map(|dt| dt.with_timezone(&offset));
        Self {
            id: product.id,
            name: product.to_string(),
            price: product.price,
            price_display: toman_price(product.price),
            created_at_display: jalali_date(local.as_ref(), style),
            is_active: product.is_active,
        }
    }
}
