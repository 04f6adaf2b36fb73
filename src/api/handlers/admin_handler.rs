//! Administrative handlers.

use axum::{
    extract::{Path, State},
    routing::patch,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::types::NoContent;

/// Role change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ChangeUserRoleRequest {
    /// New role name (USER or ADMIN, case-insensitive)
    #[validate(length(min = 1, message = "Role is required"))]
    #[schema(example = "ADMIN")]
    pub role: String,
}

/// Create admin routes (require authentication and the ADMIN role)
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id", patch(change_user_role))
}

/// Change a user's role
#[utoipa::path(
    patch,
    path = "/admin/users/{user_id}",
    tag = "Admin",
    params(("user_id" = Uuid, Path, description = "User ID")),
    request_body = ChangeUserRoleRequest,
    responses(
        (status = 204, description = "Role changed"),
        (status = 400, description = "Unknown role"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin access required"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn change_user_role(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ChangeUserRoleRequest>,
) -> AppResult<NoContent> {
    state
        .user_service
        .change_user_role(user_id, payload.role)
        .await?;

    Ok(NoContent)
}
