use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    admin::ModelAdmin,
    dto::products::{
        BulkActiveUpdateRequest, BulkUpdateResult, CreateProductRequest, ProductChangeList,
        ProductDetail, RecentActionList, UpdateProductRequest,
    },
    error::AppResult,
    models::Product,
    response::ApiResponse,
    routes::params::{ProductChangeListQuery, RecentActionsQuery},
    services::{admin_service, product_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(list_products)
                .post(create_product)
                .patch(bulk_update_active),
        )
        .route("/products/config", get(product_admin_config))
        .route("/products/{id}", get(get_product).put(update_product))
        .route("/actions", get(recent_actions))
}

#[utoipa::path(
    get,
    path = "/api/admin/products/config",
    responses(
        (status = 200, description = "Product admin configuration", body = ApiResponse<ModelAdmin>)
    ),
    tag = "Admin"
)]
pub async fn product_admin_config(State(state): State<AppState>) -> Json<ApiResponse<ModelAdmin>> {
    Json(admin_service::product_admin_config(&state))
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    params(ProductChangeListQuery),
    responses(
        (status = 200, description = "Product changelist", body = ApiResponse<ProductChangeList>),
        (status = 400, description = "Unknown or unsortable ordering column"),
    ),
    tag = "Admin"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductChangeListQuery>,
) -> AppResult<Json<ApiResponse<ProductChangeList>>> {
    let resp = product_service::list_products(&state, &query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product with widget values", body = ApiResponse<ProductDetail>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Admin"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ProductDetail>>> {
    let resp = product_service::get_product(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Create product", body = ApiResponse<Product>),
        (status = 422, description = "Invalid name"),
    ),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let resp = product_service::create_product(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Invalid name or Jalali date/time"),
    ),
    tag = "Admin"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductRequest>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::update_product(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/products",
    request_body = BulkActiveUpdateRequest,
    responses(
        (status = 200, description = "Saved inline edits", body = ApiResponse<BulkUpdateResult>),
        (status = 404, description = "A product in the batch does not exist"),
    ),
    tag = "Admin"
)]
pub async fn bulk_update_active(
    State(state): State<AppState>,
    Json(payload): Json<BulkActiveUpdateRequest>,
) -> AppResult<Json<ApiResponse<BulkUpdateResult>>> {
    let resp = product_service::bulk_update_active(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/actions",
    params(RecentActionsQuery),
    responses(
        (status = 200, description = "Recent admin actions", body = ApiResponse<RecentActionList>)
    ),
    tag = "Admin"
)]
pub async fn recent_actions(
    State(state): State<AppState>,
    Query(query): Query<RecentActionsQuery>,
) -> AppResult<Json<ApiResponse<RecentActionList>>> {
    let resp = admin_service::recent_actions(&state, query.limit()).await?;
    Ok(Json(resp))
}
