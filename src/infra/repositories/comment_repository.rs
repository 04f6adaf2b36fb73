//! Comment repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
use super::entities::user::Entity as UserEntity;
use crate::domain::{Comment, NewComment};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment and return it with its assigned id
    async fn create(&self, new_comment: NewComment) -> AppResult<Comment>;

    /// All comments on a todo in insertion order, each with its author
    async fn find_by_todo_id_with_user(&self, todo_id: Uuid) -> AppResult<Vec<Comment>>;
}

/// Concrete implementation of CommentRepository
pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn create(&self, new_comment: NewComment) -> AppResult<Comment> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            contents: Set(new_comment.contents),
            user_id: Set(new_comment.author.id),
            todo_id: Set(new_comment.todo_id),
            created_at: Set(now),
            modified_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Comment {
            id: model.id,
            contents: model.contents,
            todo_id: model.todo_id,
            author: new_comment.author,
            created_at: model.created_at,
        })
    }

    async fn find_by_todo_id_with_user(&self, todo_id: Uuid) -> AppResult<Vec<Comment>> {
        let rows = CommentEntity::find()
            .filter(comment::Column::TodoId.eq(todo_id))
            .find_also_related(UserEntity)
            .order_by_asc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .filter_map(|(model, author)| author.map(|author| Comment::from((model, author))))
            .collect())
    }
}
