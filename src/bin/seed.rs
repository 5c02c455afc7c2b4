use jalali_store_admin::{
    config::AppConfig,
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
    entity::products::{ActiveModel, Column, Entity as Products},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const SAMPLE_PRODUCTS: [(&str, u32, bool); 4] = [
    ("چای ایرانی", 185_000, true),
    ("زعفران نیم مثقالی", 1_234_567, true),
    ("خرمای مضافتی", 96_000, true),
    ("گز اصفهان", 420_000, false),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm, MIGRATIONS_DIR).await?;

    let mut inserted = 0;
    for (name, price, is_active) in SAMPLE_PRODUCTS {
        if ensure_product(&orm, name, price, is_active).await? {
            inserted += 1;
        }
    }

    tracing::info!(inserted, "seed completed");
    Ok(())
}

/// Inserts the product unless one with the same name exists.
async fn ensure_product(
    orm: &DatabaseConnection,
    name: &str,
    price: u32,
    is_active: bool,
) -> anyhow::Result<bool> {
    let existing = Products::find()
        .filter(Column::Name.eq(name))
        .one(orm)
        .await?;
    if existing.is_some() {
        tracing::debug!(name, "product already present");
        return Ok(false);
    }

    ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        price: Set(i64::from(price)),
        created_at: NotSet,
        is_active: Set(is_active),
    }
    .insert(orm)
    .await?;

    tracing::info!(name, price, "product seeded");
    Ok(true)
}
