use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub created_at: DateTimeWithTimeZone,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::admin_log_entries::Entity")]
    AdminLogEntries,
}

impl Related<super::admin_log_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminLogEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
