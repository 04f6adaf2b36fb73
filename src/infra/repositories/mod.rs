//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod comment_repository;
pub(crate) mod entities;
mod manager_repository;
mod todo_repository;
mod user_repository;

pub use comment_repository::{CommentRepository, CommentStore};
pub use manager_repository::{ManagerRepository, ManagerStore};
pub use todo_repository::{TodoRepository, TodoStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use manager_repository::MockManagerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use todo_repository::MockTodoRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
