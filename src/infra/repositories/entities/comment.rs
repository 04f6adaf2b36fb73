//! Comment database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::user;
use crate::domain::{Comment, UserProfile};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub contents: String,
    pub user_id: Uuid,
    pub todo_id: Uuid,
    pub created_at: DateTimeUtc,
    pub modified_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::todo::Entity",
        from = "Column::TodoId",
        to = "super::todo::Column::Id",
        on_delete = "Cascade"
    )]
    Todo,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::todo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Todo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a comment row joined with its author to the domain entity
impl From<(Model, user::Model)> for Comment {
    fn from((model, author): (Model, user::Model)) -> Self {
        Comment {
            id: model.id,
            contents: model.contents,
            todo_id: model.todo_id,
            author: UserProfile::from(author),
            created_at: model.created_at,
        }
    }
}
