//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::infra::TokenResponse;
use crate::types::Created;

/// User signup request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "Abcdefgh1!")]
    pub password: String,
    /// Requested role name (USER or ADMIN, case-insensitive)
    #[validate(length(min = 1, message = "Role is required"))]
    #[schema(example = "USER")]
    pub user_role: String,
}

/// User signin request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SigninRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "Abcdefgh1!")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

/// Register a new user and get a JWT token
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User registered", body = TokenResponse),
        (status = 400, description = "Validation error or unknown role"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<Created<TokenResponse>> {
    let token = state
        .auth_service
        .signup(payload.email, payload.password, payload.user_role)
        .await?;

    Ok(Created(token))
}

/// Sign in and get a JWT token
#[utoipa::path(
    post,
    path = "/auth/signin",
    tag = "Authentication",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Signin successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Wrong password"),
        (status = 404, description = "Email not registered")
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SigninRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .signin(payload.email, payload.password)
        .await?;

    Ok(Json(token))
}
