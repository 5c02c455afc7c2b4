use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    admin::{
        ColumnKind, ListColumn, ModelAdmin, ModelField, WidgetBinding, WidgetKind,
        product::ProductRow, widgets::SplitJalaliDateTime,
    },
    dto::products::{
        ActiveFlagChange, BulkActiveUpdateRequest, BulkUpdateResult, CreateProductRequest,
        ProductChangeList, ProductDetail, RecentAction, RecentActionList, UpdateProductRequest,
    },
    jalali::DateStyle,
    models::{AdminAction, AdminLogEntry, Product},
    response::{ApiResponse, Meta},
    routes::{admin, health, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        admin::product_admin_config,
        admin::list_products,
        admin::get_product,
        admin::create_product,
        admin::update_product,
        admin::bulk_update_active,
        admin::recent_actions,
    ),
    components(
        schemas(
            Product,
            AdminAction,
            AdminLogEntry,
            ModelAdmin,
            ModelField,
            ListColumn,
            ColumnKind,
            WidgetBinding,
            WidgetKind,
            DateStyle,
            ProductRow,
            SplitJalaliDateTime,
            CreateProductRequest,
            UpdateProductRequest,
            ActiveFlagChange,
            BulkActiveUpdateRequest,
            BulkUpdateResult,
            ProductChangeList,
            ProductDetail,
            RecentAction,
            RecentActionList,
            params::CreatedAtFilter,
            params::SortOrder,
            params::ProductSortBy,
            Meta,
            health::HealthData,
            ApiResponse<Product>,
            ApiResponse<ProductChangeList>,
            ApiResponse<ProductDetail>,
            ApiResponse<ModelAdmin>,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Admin", description = "Product admin endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
