use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, Set};
use uuid::Uuid;

use crate::{entity::admin_log_entries::ActiveModel, error::AppResult, models::AdminAction};

/// Appends an entry to the admin action history.
pub async fn log_admin_action<C: ConnectionTrait>(
    conn: &C,
    product_id: Uuid,
    object_repr: &str,
    action: AdminAction,
    change_message: &str,
) -> AppResult<()> {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(Some(product_id)),
        object_repr: Set(object_repr.to_string()),
        action: Set(action.as_str().to_string()),
        change_message: Set(change_message.to_string()),
        action_time: NotSet,
    }
    .insert(conn)
    .await?;

    Ok(())
}

/// Django-style change message: `Changed name and price.`
pub fn change_message(changed: &[&str]) -> String {
    match changed {
        [] => "No fields changed.".to_string(),
        [only] => format!("Changed {only}."),
        [init @ .., last] => format!("Changed {} and {last}.", init.join(", ")),
    }
}
