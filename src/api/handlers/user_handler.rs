//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, put},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{AuthUser, UserProfile};
use crate::errors::AppResult;
use crate::types::NoContent;

/// Password change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordRequest {
    /// Current password
    #[validate(length(min = 1, message = "Old password is required"))]
    pub old_password: String,
    /// New password (8+ characters, one digit, one uppercase letter)
    #[validate(length(min = 1, message = "New password is required"))]
    #[schema(example = "NewPassword1")]
    pub new_password: String,
}

/// Create user routes (all require authentication)
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", put(change_password))
        .route("/:user_id", get(get_user))
}

/// Get a user's public profile
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "Users",
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserProfile),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<UserProfile>> {
    let profile = state.user_service.get_user(user_id).await?;
    Ok(Json(profile))
}

/// Change the caller's password
#[utoipa::path(
    put,
    path = "/users",
    tag = "Users",
    request_body = ChangePasswordRequest,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Policy violation or unchanged password"),
        (status = 401, description = "Not authenticated or wrong old password"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn change_password(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> AppResult<NoContent> {
    state
        .user_service
        .change_password(caller.id, payload.old_password, payload.new_password)
        .await?;

    Ok(NoContent)
}
