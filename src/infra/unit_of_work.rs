//! Unit of Work pattern implementation.
//!
//! Centralizes access to every store so services depend on one
//! abstraction instead of four.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    CommentRepository, CommentStore, ManagerRepository, ManagerStore, TodoRepository, TodoStore,
    UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
///
/// Services are generic over this trait; tests substitute an
/// implementation backed by repository mocks.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get todo repository
    fn todos(&self) -> Arc<dyn TodoRepository>;

    /// Get manager repository
    fn managers(&self) -> Arc<dyn ManagerRepository>;

    /// Get comment repository
    fn comments(&self) -> Arc<dyn CommentRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    todo_repo: Arc<TodoStore>,
    manager_repo: Arc<ManagerStore>,
    comment_repo: Arc<CommentStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            todo_repo: Arc::new(TodoStore::new(db.clone())),
            manager_repo: Arc::new(ManagerStore::new(db.clone())),
            comment_repo: Arc::new(CommentStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn todos(&self) -> Arc<dyn TodoRepository> {
        self.todo_repo.clone()
    }

    fn managers(&self) -> Arc<dyn ManagerRepository> {
        self.manager_repo.clone()
    }

    fn comments(&self) -> Arc<dyn CommentRepository> {
        self.comment_repo.clone()
    }
}
