//! Todo service - Creation with a weather snapshot, listing and lookup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::MAX_PAGE_SIZE;
use crate::domain::{AuthUser, NewTodo, Todo, UserProfile};
use crate::errors::{messages, AppResult, OptionExt};
use crate::infra::{UnitOfWork, WeatherSource};
use crate::types::Paginated;

/// Response for a newly created todo
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveTodoResponse {
    pub id: Uuid,
    #[schema(example = "Write report")]
    pub title: String,
    pub contents: String,
    #[schema(example = "Sunny")]
    pub weather: String,
    pub user: UserProfile,
}

/// Full todo projection including its owner
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    pub id: Uuid,
    pub title: String,
    pub contents: String,
    pub weather: String,
    /// Absent only when the stored owner reference is broken
    pub user: Option<UserProfile>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            contents: todo.contents,
            weather: todo.weather,
            user: todo.owner,
            created_at: todo.created_at,
            modified_at: todo.modified_at,
        }
    }
}

/// Todo service trait for dependency injection.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Create a todo owned by the caller, stamped with today's weather
    async fn save_todo(
        &self,
        caller: &AuthUser,
        title: String,
        contents: String,
    ) -> AppResult<SaveTodoResponse>;

    /// One page of todos, most recently modified first (`page` is 1-based)
    async fn get_todos(&self, page: u64, size: u64) -> AppResult<Paginated<TodoResponse>>;

    /// A single todo with its owner
    async fn get_todo(&self, id: Uuid) -> AppResult<TodoResponse>;
}

/// Concrete implementation of TodoService using Unit of Work.
pub struct TodoRegistry<U: UnitOfWork> {
    uow: Arc<U>,
    weather: Arc<dyn WeatherSource>,
}

impl<U: UnitOfWork> TodoRegistry<U> {
    pub fn new(uow: Arc<U>, weather: Arc<dyn WeatherSource>) -> Self {
        Self { uow, weather }
    }
}

#[async_trait]
impl<U: UnitOfWork> TodoService for TodoRegistry<U> {
    async fn save_todo(
        &self,
        caller: &AuthUser,
        title: String,
        contents: String,
    ) -> AppResult<SaveTodoResponse> {
        let weather = self.weather.today_weather().await?;

        let todo = self
            .uow
            .todos()
            .create(NewTodo {
                title,
                contents,
                weather,
                owner: caller.profile(),
            })
            .await?;

        tracing::info!(todo_id = %todo.id, user_id = %caller.id, "Todo created");

        Ok(SaveTodoResponse {
            id: todo.id,
            title: todo.title,
            contents: todo.contents,
            weather: todo.weather,
            user: caller.profile(),
        })
    }

    async fn get_todos(&self, page: u64, size: u64) -> AppResult<Paginated<TodoResponse>> {
        let (todos, total) = self.uow.todos().find_page(page, size).await?;
        let data = todos.into_iter().map(TodoResponse::from).collect();

        Ok(Paginated::new(
            data,
            page.max(1),
            size.clamp(1, MAX_PAGE_SIZE),
            total,
        ))
    }

    async fn get_todo(&self, id: Uuid) -> AppResult<TodoResponse> {
        self.uow
            .todos()
            .find_by_id(id)
            .await?
            .map(TodoResponse::from)
            .ok_or_not_found(messages::TODO_NOT_FOUND)
    }
}
