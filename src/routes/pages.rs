use axum::{
    Router,
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::{
    admin::product::NOW_FIX_SCRIPT,
    error::AppResult,
    routes::params::ProductChangeListQuery,
    services::admin_service,
    state::AppState,
};

const NOW_FIX_JS: &str = include_str!("../../static/admin/js/jalali_now_fix.js");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/products", get(product_changelist))
        .route(&format!("/static/{NOW_FIX_SCRIPT}"), get(now_fix_script))
}

pub async fn product_changelist(
    State(state): State<AppState>,
    Query(query): Query<ProductChangeListQuery>,
) -> AppResult<Html<String>> {
    let page = admin_service::render_changelist(&state, &query).await?;
    Ok(Html(page))
}

pub async fn now_fix_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        NOW_FIX_JS,
    )
}
