//! Todo Expert - todo backend with manager assignment and comments.
//!
//! Users sign up and sign in with JWTs, create todos stamped with the
//! day's weather, assign other users as managers and comment on todos.
//! The rules for who may do what live in the service layer.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and the password policy
//! - **services**: Application use cases and their rules
//! - **infra**: Infrastructure concerns (database, tokens, weather feed)
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{AuthUser, User, UserRole};
pub use errors::{AppError, AppResult};
