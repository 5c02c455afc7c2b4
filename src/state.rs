use std::sync::Arc;

use chrono::FixedOffset;
use sea_orm::DatabaseConnection;
use tera::Tera;

use crate::{
    admin::{ModelAdmin, product::product_admin},
    templates::build_templates,
};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub admin: Arc<ModelAdmin>,
    pub templates: Arc<Tera>,
    pub display_offset: FixedOffset,
}

impl AppState {
    /// Validates the product admin and compiles the templates.
    pub fn new(orm: DatabaseConnection, display_offset: FixedOffset) -> anyhow::Result<Self> {
        let admin = product_admin();
        admin.validate()?;
        let templates = build_templates()?;
        Ok(Self {
            orm,
            admin: Arc::new(admin),
            templates: Arc::new(templates),
            display_offset,
        })
    }
}
