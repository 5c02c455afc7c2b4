use chrono::SecondsFormat;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};
use serde::Serialize;

use crate::{
    admin::{ModelAdmin, product::ProductRow},
    dto::products::{RecentAction, RecentActionList},
    entity::admin_log_entries::{Column, Entity as AdminLogEntries},
    error::AppResult,
    models::AdminLogEntry,
    response::{ApiResponse, Meta},
    routes::params::ProductChangeListQuery,
    services::product_service,
    state::AppState,
    templatetags::jalali_datetime,
    templates::CHANGELIST_TEMPLATE,
};

const CHANGELIST_ACTIONS: u64 = 10;

pub fn product_admin_config(state: &AppState) -> ApiResponse<ModelAdmin> {
    ApiResponse::success("Product admin", state.admin.as_ref().clone(), None)
}

pub async fn recent_actions(state: &AppState, limit: u64) -> AppResult<ApiResponse<RecentActionList>> {
    let items = load_actions(state, limit)
        .await?
        .into_iter()
        .map(|entry| {
            let local = entry.action_time.with_timezone(&state.display_offset);
            RecentAction {
                action_time_display: jalali_datetime(Some(&local)),
                entry,
            }
        })
        .collect();

    Ok(ApiResponse::success(
        "Recent actions",
        RecentActionList { items },
        Some(Meta::empty()),
    ))
}

#[derive(Serialize)]
struct ChangeListPage<'a> {
    admin: &'a ModelAdmin,
    rows: Vec<ProductRow>,
    meta: Meta,
    q: &'a str,
    order: &'a str,
    filters: String,
    actions: Vec<ActionContext>,
}

#[derive(Serialize)]
struct ActionContext {
    object_repr: String,
    action: &'static str,
    change_message: String,
    /// RFC 3339 in the display offset; the template applies `jalali_datetime`.
    action_time: String,
}

/// Renders the HTML changelist.
pub async fn render_changelist(state: &AppState, query: &ProductChangeListQuery) -> AppResult<String> {
    let listing = product_service::list_products(state, query).await?;
    let actions = load_actions(state, CHANGELIST_ACTIONS)
        .await?
        .into_iter()
        .map(|entry| ActionContext {
            action_time: entry
                .action_time
                .with_timezone(&state.display_offset)
                .to_rfc3339_opts(SecondsFormat::Secs, false),
            action: entry.action.as_str(),
            object_repr: entry.object_repr,
            change_message: entry.change_message,
        })
        .collect();

    let page = ChangeListPage {
        admin: state.admin.as_ref(),
        rows: listing.data.map(|d| d.rows).unwrap_or_default(),
        meta: listing.meta.unwrap_or_else(Meta::empty),
        q: query.search_term().unwrap_or(""),
        order: query.o.as_deref().unwrap_or(""),
        filters: query.filter_params(),
        actions,
    };

    let context = tera::Context::from_serialize(&page)?;
    Ok(state.templates.render(CHANGELIST_TEMPLATE, &context)?)
}

async fn load_actions(state: &AppState, limit: u64) -> AppResult<Vec<AdminLogEntry>> {
    AdminLogEntries::find()
        .order_by_desc(Column::ActionTime)
        .limit(limit)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(AdminLogEntry::try_from)
        .collect()
}
