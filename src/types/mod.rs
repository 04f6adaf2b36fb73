//! Shared types for handlers and services.

mod pagination;
mod response;

pub use pagination::{Paginated, PaginationMeta, PaginationParams, TodoPage};
pub use response::{Created, MessageResponse, NoContent};
