//! Authentication service - Signup, signin and token verification.
//!
//! Hashing goes through the `PasswordEncoder` seam and tokens through
//! `TokenProvider`, so the rules here can be exercised with mocks.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{AuthUser, NewUser, PasswordEncoder, UserRole};
use crate::errors::{messages, AppError, AppResult, OptionExt};
use crate::infra::{TokenProvider, TokenResponse, UnitOfWork};

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user with the requested role and return a token
    async fn signup(
        &self,
        email: String,
        password: String,
        user_role: String,
    ) -> AppResult<TokenResponse>;

    /// Check credentials and return a token
    async fn signin(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a token and recover the caller identity
    fn verify_token(&self, token: &str) -> AppResult<AuthUser>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    encoder: Arc<dyn PasswordEncoder>,
    tokens: Arc<dyn TokenProvider>,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(
        uow: Arc<U>,
        encoder: Arc<dyn PasswordEncoder>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            uow,
            encoder,
            tokens,
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn signup(
        &self,
        email: String,
        password: String,
        user_role: String,
    ) -> AppResult<TokenResponse> {
        // Nothing is hashed for an email that is already taken
        if self.uow.users().exists_by_email(&email).await? {
            return Err(AppError::DuplicateEmail);
        }

        let role: UserRole = user_role.parse()?;
        let password_hash = self.encoder.encode(&password)?;

        let user = self
            .uow
            .users()
            .create(NewUser {
                email,
                password_hash,
                role,
            })
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, "User signed up");

        self.tokens.issue(user.id, &user.email, user.role)
    }

    async fn signin(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user = self
            .uow
            .users()
            .find_by_email(&email)
            .await?
            .ok_or_not_found(messages::UNREGISTERED_USER)?;

        if !self.encoder.matches(&password, &user.password_hash) {
            tracing::debug!(user_id = %user.id, "Signin rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        self.tokens.issue(user.id, &user.email, user.role)
    }

    fn verify_token(&self, token: &str) -> AppResult<AuthUser> {
        self.tokens.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockPasswordEncoder;
    use crate::infra::MockTokenProvider;
    use crate::services::testing::{user, MockStores};
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn token() -> TokenResponse {
        TokenResponse {
            access_token: "jwt".to_string(),
            token_type: "Bearer".to_string(),
            expires_in: 3600,
        }
    }

    fn service(
        stores: MockStores,
        encoder: MockPasswordEncoder,
        tokens: MockTokenProvider,
    ) -> Authenticator<crate::services::testing::TestUnitOfWork> {
        Authenticator::new(stores.into_uow(), Arc::new(encoder), Arc::new(tokens))
    }

    #[tokio::test]
    async fn test_signup_issues_token_for_new_user() {
        let mut stores = MockStores::default();
        stores
            .users
            .expect_exists_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(|_| Ok(false));
        stores
            .users
            .expect_create()
            .withf(|new_user| {
                new_user.email == "a@x.com"
                    && new_user.password_hash == "hashed"
                    && new_user.role == UserRole::Admin
            })
            .times(1)
            .returning(|new_user| {
                let mut created = user(Uuid::new_v4(), &new_user.email, &new_user.password_hash);
                created.role = new_user.role;
                Ok(created)
            });

        let mut encoder = MockPasswordEncoder::new();
        encoder
            .expect_encode()
            .times(1)
            .returning(|_| Ok("hashed".to_string()));

        let mut tokens = MockTokenProvider::new();
        tokens
            .expect_issue()
            .withf(|_, email, role| email == "a@x.com" && *role == UserRole::Admin)
            .times(1)
            .returning(|_, _, _| Ok(token()));

        let result = service(stores, encoder, tokens)
            .signup("a@x.com".into(), "Abcdefgh1!".into(), "admin".into())
            .await;

        assert_eq!(result.unwrap(), token());
    }

    #[tokio::test]
    async fn test_signup_duplicate_email_never_hashes() {
        let mut stores = MockStores::default();
        stores
            .users
            .expect_exists_by_email()
            .returning(|_| Ok(true));
        stores.users.expect_create().never();

        let mut encoder = MockPasswordEncoder::new();
        encoder.expect_encode().never();

        let mut tokens = MockTokenProvider::new();
        tokens.expect_issue().never();

        let err = service(stores, encoder, tokens)
            .signup("a@x.com".into(), "Abcdefgh1!".into(), "USER".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DuplicateEmail));
        assert_eq!(err.to_string(), "이미 존재하는 이메일입니다.");
    }

    #[tokio::test]
    async fn test_signup_unknown_role_rejected_before_hashing() {
        let mut stores = MockStores::default();
        stores
            .users
            .expect_exists_by_email()
            .returning(|_| Ok(false));
        stores.users.expect_create().never();

        let mut encoder = MockPasswordEncoder::new();
        encoder.expect_encode().never();

        let err = service(stores, encoder, MockTokenProvider::new())
            .signup("a@x.com".into(), "Abcdefgh1!".into(), "ROOT".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref m) if m == messages::INVALID_ROLE));
    }

    #[tokio::test]
    async fn test_signin_unknown_email() {
        let mut stores = MockStores::default();
        stores
            .users
            .expect_find_by_email()
            .returning(|_| Ok(None));

        let mut encoder = MockPasswordEncoder::new();
        encoder.expect_matches().never();

        let err = service(stores, encoder, MockTokenProvider::new())
            .signin("nobody@x.com".into(), "Abcdefgh1!".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == "가입되지 않은 유저입니다."));
    }

    #[tokio::test]
    async fn test_signin_wrong_password() {
        let mut stores = MockStores::default();
        stores
            .users
            .expect_find_by_email()
            .returning(|email| Ok(Some(user(Uuid::new_v4(), email, "stored"))));

        let mut encoder = MockPasswordEncoder::new();
        encoder
            .expect_matches()
            .withf(|raw, encoded| raw == "wrong" && encoded == "stored")
            .returning(|_, _| false);

        let mut tokens = MockTokenProvider::new();
        tokens.expect_issue().never();

        let err = service(stores, encoder, tokens)
            .signin("a@x.com".into(), "wrong".into())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(err.to_string(), "잘못된 비밀번호입니다.");
    }

    #[tokio::test]
    async fn test_signin_success_uses_stored_identity() {
        let user_id = Uuid::new_v4();
        let mut stores = MockStores::default();
        stores
            .users
            .expect_find_by_email()
            .returning(move |email| Ok(Some(user(user_id, email, "stored"))));

        let mut encoder = MockPasswordEncoder::new();
        encoder.expect_matches().returning(|_, _| true);

        let mut tokens = MockTokenProvider::new();
        tokens
            .expect_issue()
            .withf(move |id, email, role| {
                *id == user_id && email == "a@x.com" && *role == UserRole::User
            })
            .times(1)
            .returning(|_, _, _| Ok(token()));

        let result = service(stores, encoder, tokens)
            .signin("a@x.com".into(), "Abcdefgh1!".into())
            .await;

        assert!(result.is_ok());
    }
}
