//! User service - Profile lookup, password change and role change.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{validate_new_password, PasswordEncoder, UserProfile, UserRole};
use crate::errors::{messages, AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Public projection of a user
    async fn get_user(&self, id: Uuid) -> AppResult<UserProfile>;

    /// Replace the user's password after checking policy and the old password
    async fn change_password(
        &self,
        id: Uuid,
        old_password: String,
        new_password: String,
    ) -> AppResult<()>;

    /// Set the user's role by name. Callers must already be authorized.
    async fn change_user_role(&self, id: Uuid, role: String) -> AppResult<()>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { uow, encoder }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_user(&self, id: Uuid) -> AppResult<UserProfile> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .map(UserProfile::from)
            .ok_or_not_found(messages::USER_NOT_FOUND)
    }

    async fn change_password(
        &self,
        id: Uuid,
        old_password: String,
        new_password: String,
    ) -> AppResult<()> {
        let mut user = self
            .uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found(messages::USER_NOT_FOUND)?;

        validate_new_password(&new_password)?;

        if self.encoder.matches(&new_password, &user.password_hash) {
            return Err(AppError::SameAsCurrent);
        }

        if !self.encoder.matches(&old_password, &user.password_hash) {
            return Err(AppError::InvalidCredentials);
        }

        let password_hash = self.encoder.encode(&new_password)?;
        user.change_password(password_hash);
        self.uow.users().update(user).await?;

        tracing::info!(user_id = %id, "Password changed");
        Ok(())
    }

    async fn change_user_role(&self, id: Uuid, role: String) -> AppResult<()> {
        let mut user = self
            .uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found(messages::USER_NOT_FOUND)?;

        let role: UserRole = role.parse()?;
        user.update_role(role);
        self.uow.users().update(user).await?;

        tracing::info!(user_id = %id, role = %role, "User role changed");
        Ok(())
    }
}
