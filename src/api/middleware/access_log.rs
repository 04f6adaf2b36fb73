//! Access log for administrative endpoints.

use axum::{
    extract::{OriginalUri, Request},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::domain::AuthUser;

/// Log who called an admin endpoint, when and at which URL.
///
/// Runs after authentication so the caller id is available.
pub async fn admin_access_log(request: Request, next: Next) -> Response {
    let user_id = request.extensions().get::<AuthUser>().map(|caller| caller.id);
    // Nested routers see a stripped path; log the one the client sent
    let url = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| original.0.to_string())
        .unwrap_or_else(|| request.uri().to_string());

    tracing::info!(
        user_id = ?user_id,
        requested_at = %Utc::now().to_rfc3339(),
        url = %url,
        "Admin API access"
    );

    next.run(request).await
}
