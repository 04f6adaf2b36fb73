//! API middleware.

mod access_log;
mod auth;

pub use access_log::admin_access_log;
pub use auth::{admin_middleware, auth_middleware, require_admin};
