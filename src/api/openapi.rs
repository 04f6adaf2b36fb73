//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    admin_handler, auth_handler, comment_handler, manager_handler, todo_handler, user_handler,
};
use crate::domain::{UserProfile, UserRole};
use crate::infra::TokenResponse;
use crate::services::{CommentResponse, ManagerResponse, SaveTodoResponse, TodoResponse};
use crate::types::{PaginationMeta, TodoPage};

/// OpenAPI documentation for the todo API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo Expert API",
        version = "0.1.0",
        description = "Todos with weather snapshots, manager assignment and comments",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::signup,
        auth_handler::signin,
        // User endpoints
        user_handler::get_user,
        user_handler::change_password,
        // Admin endpoints
        admin_handler::change_user_role,
        // Todo endpoints
        todo_handler::save_todo,
        todo_handler::get_todos,
        todo_handler::get_todo,
        // Manager endpoints
        manager_handler::save_manager,
        manager_handler::get_managers,
        manager_handler::delete_manager,
        // Comment endpoints
        comment_handler::save_comment,
        comment_handler::get_comments,
    ),
    components(
        schemas(
            UserRole,
            UserProfile,
            TokenResponse,
            SaveTodoResponse,
            TodoResponse,
            TodoPage,
            PaginationMeta,
            ManagerResponse,
            CommentResponse,
            auth_handler::SignupRequest,
            auth_handler::SigninRequest,
            user_handler::ChangePasswordRequest,
            admin_handler::ChangeUserRoleRequest,
            todo_handler::SaveTodoRequest,
            manager_handler::SaveManagerRequest,
            comment_handler::SaveCommentRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Signup and signin"),
        (name = "Users", description = "Profiles and password changes"),
        (name = "Admin", description = "Role management (ADMIN only)"),
        (name = "Todos", description = "Todo creation and lookup"),
        (name = "Managers", description = "Manager assignment on todos"),
        (name = "Comments", description = "Comments on todos")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/signin"))
                        .build(),
                ),
            );
        }
    }
}
