//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{User, UserProfile, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        let role = model.role.parse::<UserRole>().unwrap_or_else(|_| {
            tracing::warn!(user_id = %model.id, role = %model.role, "Unknown stored role, treating as USER");
            UserRole::User
        });

        User {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Model> for UserProfile {
    fn from(model: Model) -> Self {
        UserProfile {
            id: model.id,
            email: model.email,
        }
    }
}
