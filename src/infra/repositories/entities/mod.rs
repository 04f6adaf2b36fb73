//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod comment;
pub mod manager;
pub mod todo;
pub mod user;
