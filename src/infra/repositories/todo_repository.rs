//! Todo repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::todo::{self, ActiveModel, Entity as TodoEntity};
use super::entities::user::Entity as UserEntity;
use crate::config::MAX_PAGE_SIZE;
use crate::domain::{NewTodo, Todo};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Todo repository trait for dependency injection.
///
/// Reads always join the owner; a todo whose owner row is gone comes back
/// with `owner: None`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persist a new todo and return it with its assigned id
    async fn create(&self, new_todo: NewTodo) -> AppResult<Todo>;

    /// Find todo by ID, owner included
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Todo>>;

    /// One page of todos, most recently modified first, with the total count.
    ///
    /// `page` is 1-based. `size` is clamped to `1..=MAX_PAGE_SIZE`.
    async fn find_page(&self, page: u64, size: u64) -> AppResult<(Vec<Todo>, u64)>;
}

/// Concrete implementation of TodoRepository
pub struct TodoStore {
    db: DatabaseConnection,
}

impl TodoStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TodoRepository for TodoStore {
    async fn create(&self, new_todo: NewTodo) -> AppResult<Todo> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(new_todo.title),
            contents: Set(new_todo.contents),
            weather: Set(new_todo.weather),
            owner_id: Set(Some(new_todo.owner.id)),
            created_at: Set(now),
            modified_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Todo {
            id: model.id,
            title: model.title,
            contents: model.contents,
            weather: model.weather,
            owner: Some(new_todo.owner),
            created_at: model.created_at,
            modified_at: model.modified_at,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Todo>> {
        let result = TodoEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Todo::from))
    }

    async fn find_page(&self, page: u64, size: u64) -> AppResult<(Vec<Todo>, u64)> {
        let size = size.clamp(1, MAX_PAGE_SIZE);
        let paginator = TodoEntity::find()
            .find_also_related(UserEntity)
            .order_by_desc(todo::Column::ModifiedAt)
            .order_by_desc(todo::Column::CreatedAt)
            .paginate(&self.db, size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((rows.into_iter().map(Todo::from).collect(), total))
    }
}
