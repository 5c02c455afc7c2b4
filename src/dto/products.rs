use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    admin::{product::ProductRow, widgets::SplitJalaliDateTime},
    models::{AdminLogEntry, Product},
};

pub const NAME_MAX_CHARS: usize = 200;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: u32,
    /// Defaults to true.
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<u32>,
    pub created_at: Option<SplitJalaliDateTime>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct ActiveFlagChange {
    pub id: Uuid,
    pub is_active: bool,
}

/// Inline edits submitted from the changelist.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkActiveUpdateRequest {
    pub items: Vec<ActiveFlagChange>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductChangeList {
    pub rows: Vec<ProductRow>,
}

/// A product plus the initial values of its form widgets.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    pub product: Product,
    pub created_at_widget: Option<SplitJalaliDateTime>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkUpdateResult {
    pub updated: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecentAction {
    pub entry: AdminLogEntry,
    /// Jalali `YYYY-MM-DD HH:MM:SS` in the display offset.
    pub action_time_display: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct RecentActionList {
    #[schema(value_type = Vec<RecentAction>)]
    pub items: Vec<RecentAction>,
}
