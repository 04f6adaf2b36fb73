//! Manager assignment handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get},
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
use crate::services::ManagerResponse;
use crate::types::{Created, NoContent};

/// Manager assignment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveManagerRequest {
    /// User to assign as manager
    pub manager_user_id: Uuid,
}

/// Create manager routes, nested under `/todos/:todo_id/managers`
pub fn manager_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_managers).post(save_manager))
        .route("/:manager_id", delete(delete_manager))
}

/// Assign a manager to a todo
#[utoipa::path(
    post,
    path = "/todos/{todo_id}/managers",
    tag = "Managers",
    params(("todo_id" = Uuid, Path, description = "Todo ID")),
    request_body = SaveManagerRequest,
    responses(
        (status = 201, description = "Manager assigned", body = ManagerResponse),
        (status = 400, description = "Owner cannot manage own todo"),
        (status = 404, description = "Todo or user not found"),
        (status = 409, description = "Todo has no valid owner")
    ),
    security(("bearer_auth" = []))
)]
pub async fn save_manager(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(todo_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<SaveManagerRequest>,
) -> AppResult<Created<ManagerResponse>> {
    let manager = state
        .manager_service
        .save_manager(&caller, todo_id, payload.manager_user_id)
        .await?;

    Ok(Created(manager))
}

/// List the managers of a todo
#[utoipa::path(
    get,
    path = "/todos/{todo_id}/managers",
    tag = "Managers",
    params(("todo_id" = Uuid, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Managers of the todo", body = [ManagerResponse]),
        (status = 404, description = "Todo not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_managers(
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> AppResult<Json<Vec<ManagerResponse>>> {
    let managers = state.manager_service.get_managers(todo_id).await?;
    Ok(Json(managers))
}

/// Remove a manager from a todo (todo owner only)
#[utoipa::path(
    delete,
    path = "/todos/{todo_id}/managers/{manager_id}",
    tag = "Managers",
    params(
        ("todo_id" = Uuid, Path, description = "Todo ID"),
        ("manager_id" = Uuid, Path, description = "Manager ID")
    ),
    responses(
        (status = 204, description = "Manager removed"),
        (status = 400, description = "Manager belongs to another todo"),
        (status = 403, description = "Caller does not own the todo"),
        (status = 404, description = "User, todo or manager not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_manager(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path((todo_id, manager_id)): Path<(Uuid, Uuid)>,
) -> AppResult<NoContent> {
    state
        .manager_service
        .delete_manager(caller.id, todo_id, manager_id)
        .await?;

    Ok(NoContent)
}
