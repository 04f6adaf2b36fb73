//! Comment service - Comments on todos.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{AuthUser, Comment, NewComment, UserProfile};
use crate::errors::{messages, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// A comment with its author's public fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    #[schema(example = "Looks good")]
    pub contents: String,
    pub user: UserProfile,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            contents: comment.contents,
            user: comment.author,
        }
    }
}

/// Comment service trait for dependency injection.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Add a comment authored by the caller to an existing todo
    async fn save_comment(
        &self,
        caller: &AuthUser,
        todo_id: Uuid,
        contents: String,
    ) -> AppResult<CommentResponse>;

    /// Comments on a todo. An unknown todo yields an empty list.
    async fn get_comments(&self, todo_id: Uuid) -> AppResult<Vec<CommentResponse>>;
}

/// Concrete implementation of CommentService using Unit of Work.
pub struct CommentBoard<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CommentBoard<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CommentService for CommentBoard<U> {
    async fn save_comment(
        &self,
        caller: &AuthUser,
        todo_id: Uuid,
        contents: String,
    ) -> AppResult<CommentResponse> {
        let todo = self
            .uow
            .todos()
            .find_by_id(todo_id)
            .await?
            .ok_or_not_found(messages::TODO_NOT_FOUND)?;

        let comment = self
            .uow
            .comments()
            .create(NewComment {
                contents,
                todo_id: todo.id,
                author: caller.profile(),
            })
            .await?;

        tracing::info!(comment_id = %comment.id, todo_id = %todo.id, "Comment saved");

        Ok(CommentResponse::from(comment))
    }

    async fn get_comments(&self, todo_id: Uuid) -> AppResult<Vec<CommentResponse>> {
        let comments = self.uow.comments().find_by_todo_id_with_user(todo_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }
}
