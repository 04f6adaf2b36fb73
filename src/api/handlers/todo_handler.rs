//! Todo handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::AuthUser;
use crate::errors::AppResult;
use crate::services::{SaveTodoResponse, TodoResponse};
use crate::types::{Created, Paginated, PaginationParams};

/// Todo creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveTodoRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Write report")]
    pub title: String,
    #[validate(length(min = 1, message = "Contents are required"))]
    #[schema(example = "Quarterly numbers")]
    pub contents: String,
}

/// Create todo routes (all require authentication)
pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_todos).post(save_todo))
        .route("/:todo_id", get(get_todo))
}

/// Create a todo owned by the caller
#[utoipa::path(
    post,
    path = "/todos",
    tag = "Todos",
    request_body = SaveTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = SaveTodoResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 502, description = "Weather source unavailable")
    ),
    security(("bearer_auth" = []))
)]
pub async fn save_todo(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<SaveTodoRequest>,
) -> AppResult<Created<SaveTodoResponse>> {
    let todo = state
        .todo_service
        .save_todo(&caller, payload.title, payload.contents)
        .await?;

    Ok(Created(todo))
}

/// List todos, most recently modified first
#[utoipa::path(
    get,
    path = "/todos",
    tag = "Todos",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of todos", body = TodoPage),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_todos(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Paginated<TodoResponse>>> {
    let page = state
        .todo_service
        .get_todos(params.page, params.size)
        .await?;

    Ok(Json(page))
}

/// Get a single todo with its owner
#[utoipa::path(
    get,
    path = "/todos/{todo_id}",
    tag = "Todos",
    params(("todo_id" = Uuid, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo found", body = TodoResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Todo not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> AppResult<Json<TodoResponse>> {
    let todo = state.todo_service.get_todo(todo_id).await?;
    Ok(Json(todo))
}
