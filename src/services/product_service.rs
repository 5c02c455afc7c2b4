use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    admin::{product::ProductRow, widgets::SplitJalaliDateTime},
    audit::{change_message, log_admin_action},
    dto::products::{
        BulkActiveUpdateRequest, BulkUpdateResult, CreateProductRequest, NAME_MAX_CHARS,
        ProductChangeList, ProductDetail, UpdateProductRequest,
    },
    entity::products::{ActiveModel, Column, Entity as Products},
    error::{AppError, AppResult},
    models::{AdminAction, Product},
    response::{ApiResponse, Meta},
    routes::params::{CreatedAtFilter, ProductChangeListQuery, ProductSortBy, SortOrder},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    query: &ProductChangeListQuery,
) -> AppResult<ApiResponse<ProductChangeList>> {
    let admin = &state.admin;
    let (page, limit, offset) = query
        .pagination()
        .normalize(i64::try_from(admin.list_per_page).unwrap_or(100));
    let mut condition = Condition::all();

    if let Some(term) = query.search_term() {
        let pattern = format!("%{}%", escape_like(term));
        let mut any = Condition::any();
        for column in admin.search_fields.iter().filter_map(|f| search_column(f)) {
            any = any.add(Expr::col(column).ilike(pattern.clone()));
        }
        condition = condition.add(any);
    }

    if let Some(is_active) = query.is_active {
        condition = condition.add(Column::IsActive.eq(is_active));
    }

    if let Some(filter) = query.created_at {
        condition = match filter {
            CreatedAtFilter::HasDate => condition.add(Column::CreatedAt.is_not_null()),
            CreatedAtFilter::NoDate => condition.add(Column::CreatedAt.is_null()),
            _ => match filter.range(Utc::now(), state.display_offset)? {
                Some((start, end)) => condition
                    .add(Column::CreatedAt.gte(start))
                    .add(Column::CreatedAt.lt(end)),
                None => condition,
            },
        };
    }

    let ordering = query
        .ordering(admin)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let mut finder = Products::find().filter(condition);
    for (sort_by, order) in ordering {
        let column = sort_column(sort_by);
        finder = match order {
            SortOrder::Asc => finder.order_by_asc(column),
            SortOrder::Desc => finder.order_by_desc(column),
        };
    }
    // Stable pages when the sort key ties.
    finder = finder.order_by_asc(Column::Id);

    let total = finder.clone().count(&state.orm).await? as i64;

    let rows = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|model| {
            Product::try_from(model)
                .map(|p| ProductRow::render(&p, admin.date_style, state.display_offset))
        })
        .collect::<AppResult<Vec<_>>>()?;

    tracing::debug!(total, page, rows = rows.len(), "product changelist");

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Products", ProductChangeList { rows }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<ApiResponse<ProductDetail>> {
    let product = find_product(state, id).await?;
    let created_at_widget = product
        .created_at
        .as_ref()
        .map(|dt| SplitJalaliDateTime::from_datetime(dt, state.display_offset));
    Ok(ApiResponse::success(
        "Product",
        ProductDetail {
            product,
            created_at_widget,
        },
        None,
    ))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let name = validate_name(&payload.name)?;
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        price: Set(i64::from(payload.price)),
        created_at: NotSet,
        is_active: Set(payload.is_active.unwrap_or(true)),
    };
    let product = Product::try_from(active.insert(&state.orm).await?)?;

    tracing::info!(product_id = %product.id, "product created");
    record_action(state, &product, AdminAction::Addition, "Added.").await;

    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let existing = Products::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let mut changed: Vec<&str> = Vec::new();
    let mut active: ActiveModel = existing.clone().into();

    if let Some(name) = payload.name {
        let name = validate_name(&name)?;
        if name != existing.name {
            active.name = Set(name);
            changed.push("name");
        }
    }
    if let Some(price) = payload.price {
        let price = i64::from(price);
        if price != existing.price {
            active.price = Set(price);
            changed.push("price");
        }
    }
    if let Some(widget) = payload.created_at {
        if state.admin.is_readonly("created_at") {
            return Err(AppError::BadRequest("created_at is read-only".into()));
        }
        let created_at = widget.parse(state.display_offset)?;
        if created_at != existing.created_at {
            active.created_at = Set(created_at.with_timezone(&state.display_offset));
            changed.push("created_at");
        }
    }
    if let Some(is_active) = payload.is_active {
        if is_active != existing.is_active {
            active.is_active = Set(is_active);
            changed.push("is_active");
        }
    }

    let model = if changed.is_empty() {
        existing
    } else {
        active.update(&state.orm).await?
    };
    let product = Product::try_from(model)?;

    tracing::info!(product_id = %product.id, changed = ?changed, "product updated");
    record_action(state, &product, AdminAction::Change, &change_message(&changed)).await;

    Ok(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    ))
}

/// Saves the inline `is_active` edits of a changelist page atomically.
pub async fn bulk_update_active(
    state: &AppState,
    payload: BulkActiveUpdateRequest,
) -> AppResult<ApiResponse<BulkUpdateResult>> {
    if !state.admin.is_list_editable("is_active") {
        return Err(AppError::BadRequest("is_active is not list-editable".into()));
    }

    let txn = state.orm.begin().await?;
    let mut updated = Vec::new();
    for change in &payload.items {
        let existing = Products::find_by_id(change.id).one(&txn).await?;
        let Some(existing) = existing else {
            tracing::warn!(product_id = %change.id, "inline edit for missing product");
            return Err(AppError::NotFound);
        };
        if existing.is_active == change.is_active {
            continue;
        }
        let mut active: ActiveModel = existing.into();
        active.is_active = Set(change.is_active);
        updated.push(Product::try_from(active.update(&txn).await?)?);
    }
    txn.commit().await?;

    for product in &updated {
        record_action(state, product, AdminAction::Change, &change_message(&["is_active"])).await;
    }

    let updated = updated.len() as u64;
    tracing::info!(updated, submitted = payload.items.len(), "inline edits saved");
    Ok(ApiResponse::success(
        "Updated",
        BulkUpdateResult { updated },
        Some(Meta::empty()),
    ))
}

pub fn validate_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(AppError::Validation(format!(
            "name must be at most {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(name.to_string())
}

/// Escapes `%`, `_` and `\` for use inside an `ILIKE` pattern.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

async fn find_product(state: &AppState, id: Uuid) -> AppResult<Product> {
    match Products::find_by_id(id).one(&state.orm).await? {
        Some(model) => Product::try_from(model),
        None => Err(AppError::NotFound),
    }
}

async fn record_action(state: &AppState, product: &Product, action: AdminAction, message: &str) {
    if let Err(err) =
        log_admin_action(&state.orm, product.id, &product.to_string(), action, message).await
    {
        tracing::warn!(error = %err, product_id = %product.id, "admin log failed");
    }
}

fn search_column(field: &str) -> Option<Column> {
    match field {
        "name" => Some(Column::Name),
        _ => None,
    }
}

fn sort_column(sort_by: ProductSortBy) -> Column {
    match sort_by {
        ProductSortBy::CreatedAt => Column::CreatedAt,
        ProductSortBy::Price => Column::Price,
        ProductSortBy::Name => Column::Name,
        ProductSortBy::IsActive => Column::IsActive,
    }
}
