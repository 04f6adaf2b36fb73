//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and take the caller's identity as an explicit
//! argument wherever an operation acts on someone's behalf.

mod auth_service;
mod comment_service;
pub mod container;
mod manager_service;
mod todo_service;
mod user_service;

#[cfg(test)]
pub(crate) mod testing;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use comment_service::{CommentBoard, CommentResponse, CommentService};
pub use manager_service::{ManagerAssigner, ManagerResponse, ManagerService};
pub use todo_service::{SaveTodoResponse, TodoRegistry, TodoResponse, TodoService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
