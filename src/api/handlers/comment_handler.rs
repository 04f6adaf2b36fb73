//! Comment handlers.

use axum::{
    extract::{Path, State},
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
use crate::services::CommentResponse;
use crate::types::Created;

/// Comment creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveCommentRequest {
    #[validate(length(min = 1, message = "Contents are required"))]
    #[schema(example = "Looks good")]
    pub contents: String,
}

/// Create comment routes, nested under `/todos/:todo_id/comments`
pub fn comment_routes() -> Router<AppState> {
    Router::new().route("/", get(get_comments).post(save_comment))
}

/// Comment on a todo
#[utoipa::path(
    post,
    path = "/todos/{todo_id}/comments",
    tag = "Comments",
    params(("todo_id" = Uuid, Path, description = "Todo ID")),
    request_body = SaveCommentRequest,
    responses(
        (status = 201, description = "Comment saved", body = CommentResponse),
        (status = 404, description = "Todo not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn save_comment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(todo_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<SaveCommentRequest>,
) -> AppResult<Created<CommentResponse>> {
    let comment = state
        .comment_service
        .save_comment(&caller, todo_id, payload.contents)
        .await?;

    Ok(Created(comment))
}

/// List comments on a todo
#[utoipa::path(
    get,
    path = "/todos/{todo_id}/comments",
    tag = "Comments",
    params(("todo_id" = Uuid, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Comments on the todo", body = [CommentResponse])
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    let comments = state.comment_service.get_comments(todo_id).await?;
    Ok(Json(comments))
}
