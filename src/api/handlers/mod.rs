//! HTTP request handlers.

pub mod admin_handler;
pub mod auth_handler;
pub mod comment_handler;
pub mod manager_handler;
pub mod todo_handler;
pub mod user_handler;

pub use admin_handler::admin_routes;
pub use auth_handler::auth_routes;
pub use comment_handler::comment_routes;
pub use manager_handler::manager_routes;
pub use todo_handler::todo_routes;
pub use user_handler::user_routes;
