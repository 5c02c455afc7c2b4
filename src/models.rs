use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    entity::{admin_log_entries, products},
    error::AppError,
};

/// A catalog product. `price` is in Toman.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<products::Model> for Product {
    type Error = AppError;

    fn try_from(model: products::Model) -> Result<Self, Self::Error> {
        let price = u32::try_from(model.price).map_err(|_| {
            AppError::Internal(anyhow::anyhow!(
                "product {} has an out of range price {}",
                model.id,
                model.price
            ))
        })?;
        Ok(Product {
            id: model.id,
            name: model.name,
            price,
            created_at: Some(model.created_at.with_timezone(&Utc)),
            is_active: model.is_active,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    Addition,
    Change,
}

impl AdminAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminAction::Addition => "addition",
            AdminAction::Change => "change",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "addition" => Some(AdminAction::Addition),
            "change" => Some(AdminAction::Change),
            _ => None,
        }
    }
}

/// One entry in the admin action history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminLogEntry {
    pub id: Uuid,
    pub product_id: Option<Uuid>,
    pub object_repr: String,
    pub action: AdminAction,
    pub change_message: String,
    pub action_time: DateTime<Utc>,
}

impl TryFrom<admin_log_entries::Model> for AdminLogEntry {
    type Error = AppError;

    fn try_from(model: admin_log_entries::Model) -> Result<Self, Self::Error> {
        let action = AdminAction::parse(&model.action).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("unknown admin action `{}`", model.action))
        })?;
        Ok(AdminLogEntry {
            id: model.id,
            product_id: model.product_id,
            object_repr: model.object_repr,
            action,
            change_message: model.change_message,
            action_time: model.action_time.with_timezone(&Utc),
        })
    }
}
