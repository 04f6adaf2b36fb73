//! Service Container - Centralized service access.
//!
//! Wires the stores, the password encoder, the token provider and the
//! weather source into every service once, at startup.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CommentBoard, CommentService, ManagerAssigner, ManagerService,
    TodoRegistry, TodoService, UserManager, UserService,
};
use crate::config::Config;
use crate::domain::{Argon2Encoder, PasswordEncoder};
use crate::infra::{JwtProvider, Persistence, TokenProvider, WeatherSource};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get todo service
    fn todos(&self) -> Arc<dyn TodoService>;

    /// Get manager service
    fn managers(&self) -> Arc<dyn ManagerService>;

    /// Get comment service
    fn comments(&self) -> Arc<dyn CommentService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    todo_service: Arc<dyn TodoService>,
    manager_service: Arc<dyn ManagerService>,
    comment_service: Arc<dyn CommentService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        todo_service: Arc<dyn TodoService>,
        manager_service: Arc<dyn ManagerService>,
        comment_service: Arc<dyn CommentService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            todo_service,
            manager_service,
            comment_service,
        }
    }

    /// Create service container from database connection and config.
    ///
    /// Passwords are hashed with Argon2 and tokens signed with the
    /// configured JWT secret.
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        config: &Config,
        weather: Arc<dyn WeatherSource>,
    ) -> Self {
        let encoder: Arc<dyn PasswordEncoder> = Arc::new(Argon2Encoder);
        let tokens: Arc<dyn TokenProvider> = Arc::new(JwtProvider::new(config));
        Self::with_collaborators(db, encoder, tokens, weather)
    }

    /// Create service container with explicit collaborators
    pub fn with_collaborators(
        db: sea_orm::DatabaseConnection,
        encoder: Arc<dyn PasswordEncoder>,
        tokens: Arc<dyn TokenProvider>,
        weather: Arc<dyn WeatherSource>,
    ) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), encoder.clone(), tokens)),
            user_service: Arc::new(UserManager::new(uow.clone(), encoder)),
            todo_service: Arc::new(TodoRegistry::new(uow.clone(), weather)),
            manager_service: Arc::new(ManagerAssigner::new(uow.clone())),
            comment_service: Arc::new(CommentBoard::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn todos(&self) -> Arc<dyn TodoService> {
        self.todo_service.clone()
    }

    fn managers(&self) -> Arc<dyn ManagerService> {
        self.manager_service.clone()
    }

    fn comments(&self) -> Arc<dyn CommentService> {
        self.comment_service.clone()
    }
}
