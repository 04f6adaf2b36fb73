//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod comment;
pub mod manager;
pub mod password;
pub mod todo;
pub mod user;

pub use comment::{Comment, NewComment};
pub use manager::Manager;
pub use password::{validate_new_password, Argon2Encoder, Password, PasswordEncoder};
pub use todo::{NewTodo, Todo};
pub use user::{AuthUser, NewUser, User, UserProfile, UserRole};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordEncoder;
