use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    /// Local naive datetime, `%Y-%m-%dT%H:%M:%S`. Doubles as the alarm time.
    pub due_datetime: Option<String>,
    pub is_repeating: bool,
    /// Stored form of [`crate::model::AlarmInterval`]; `Some` iff `is_repeating`.
    pub alarm_interval: Option<String>,
    pub category_uuid: Option<Uuid>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryUuid",
        to = "super::category::Column::Uuid",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
