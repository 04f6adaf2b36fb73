//! Todo database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::user;
use crate::domain::{Todo, UserProfile};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
    pub weather: String,
    /// Nullable at the storage level; a missing owner is an integrity failure
    pub owner_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub modified_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Owner,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a todo row joined with its (optional) owner to the domain entity
impl From<(Model, Option<user::Model>)> for Todo {
    fn from((model, owner): (Model, Option<user::Model>)) -> Self {
        Todo {
            id: model.id,
            title: model.title,
            contents: model.contents,
            weather: model.weather,
            owner: owner.map(UserProfile::from),
            created_at: model.created_at,
            modified_at: model.modified_at,
        }
    }
}
