//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - Token signing and verification
//! - The weather feed client
//! - Unit of Work for store access

pub mod db;
pub mod jwt;
pub mod repositories;
pub mod unit_of_work;
pub mod weather;

pub use db::{Database, Migrator};
pub use jwt::{Claims, JwtProvider, TokenProvider, TokenResponse};
pub use repositories::{
    CommentRepository, CommentStore, ManagerRepository, ManagerStore, TodoRepository, TodoStore,
    UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};
pub use weather::{find_today_weather, WeatherClient, WeatherEntry, WeatherSource};

#[cfg(any(test, feature = "test-utils"))]
pub use jwt::MockTokenProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCommentRepository, MockManagerRepository, MockTodoRepository, MockUserRepository,
};
#[cfg(any(test, feature = "test-utils"))]
pub use weather::MockWeatherSource;
