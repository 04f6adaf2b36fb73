//! Manager assignment repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::manager::{self, ActiveModel, Entity as ManagerEntity};
use super::entities::user::{self, Entity as UserEntity};
use crate::domain::{Manager, UserProfile};
use crate::errors::{messages, AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Manager repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ManagerRepository: Send + Sync {
    /// Record `user` as a manager of the todo
    async fn create(&self, todo_id: Uuid, user: UserProfile) -> AppResult<Manager>;

    /// Find manager assignment by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Manager>>;

    /// All managers of a todo in insertion order, each with its user
    async fn find_by_todo_id_with_user(&self, todo_id: Uuid) -> AppResult<Vec<Manager>>;

    /// Remove a manager assignment
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ManagerRepository
pub struct ManagerStore {
    db: DatabaseConnection,
}

impl ManagerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Rows whose user has vanished are dropped from results.
fn joined(rows: Vec<(manager::Model, Option<user::Model>)>) -> Vec<Manager> {
    rows.into_iter()
        .filter_map(|(model, user)| match user {
            Some(user) => Some(Manager::from((model, user))),
            None => {
                tracing::warn!(manager_id = %model.id, "Manager row without user");
                None
            }
        })
        .collect()
}

#[async_trait]
impl ManagerRepository for ManagerStore {
    async fn create(&self, todo_id: Uuid, user: UserProfile) -> AppResult<Manager> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.id),
            todo_id: Set(todo_id),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Manager {
            id: model.id,
            todo_id: model.todo_id,
            user,
            created_at: model.created_at,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Manager>> {
        let result = ManagerEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.and_then(|row| joined(vec![row]).pop()))
    }

    async fn find_by_todo_id_with_user(&self, todo_id: Uuid) -> AppResult<Vec<Manager>> {
        let rows = ManagerEntity::find()
            .filter(manager::Column::TodoId.eq(todo_id))
            .find_also_related(UserEntity)
            .order_by_asc(manager::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(joined(rows))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ManagerEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(messages::MANAGER_NOT_FOUND));
        }

        Ok(())
    }
}
