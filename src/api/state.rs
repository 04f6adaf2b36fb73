//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, WeatherSource};
use crate::services::{
    AuthService, CommentService, ManagerService, ServiceContainer, Services, TodoService,
    UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Todo service
    pub todo_service: Arc<dyn TodoService>,
    /// Manager assignment service
    pub manager_service: Arc<dyn ManagerService>,
    /// Comment service
    pub comment_service: Arc<dyn CommentService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(
        database: Arc<Database>,
        config: &Config,
        weather: Arc<dyn WeatherSource>,
    ) -> Self {
        let container = Services::from_connection(database.get_connection(), config, weather);
        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            todo_service: container.todos(),
            manager_service: container.managers(),
            comment_service: container.comments(),
            database,
        }
    }
}
