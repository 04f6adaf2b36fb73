//! JWT issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{AuthUser, UserRole};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 3600)]
    pub expires_in: i64,
}

/// Issues and verifies access tokens.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait TokenProvider: Send + Sync {
    /// Issue a token carrying the user's id, email and role
    fn issue(&self, id: Uuid, email: &str, role: UserRole) -> AppResult<TokenResponse>;

    /// Verify a token and recover the caller identity
    fn verify(&self, token: &str) -> AppResult<AuthUser>;
}

/// HS256 token provider keyed by the configured secret.
pub struct JwtProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl JwtProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret_bytes()),
            expiration_hours: config.jwt_expiration_hours,
        }
    }
}

impl TokenProvider for JwtProvider {
    fn issue(&self, id: Uuid, email: &str, role: UserRole) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = Duration::try_hours(self.expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| AppError::internal("Token lifetime out of range"))?;
        let expires_in = self
            .expiration_hours
            .checked_mul(SECONDS_PER_HOUR)
            .ok_or_else(|| AppError::internal("Token lifetime out of range"))?;

        let claims = Claims {
            sub: id,
            email: email.to_string(),
            role: role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        })
    }

    fn verify(&self, token: &str) -> AppResult<AuthUser> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        let claims = token_data.claims;

        // A token carrying a role we no longer know is not trusted
        let role = claims
            .role
            .parse::<UserRole>()
            .map_err(|_| AppError::Unauthorized)?;

        Ok(AuthUser::new(claims.sub, claims.email, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> JwtProvider {
        let config = Config::new(
            "sqlite::memory:",
            "test-secret-key-that-is-at-least-32-characters-long",
        )
        .unwrap();
        JwtProvider::new(&config)
    }

    #[test]
    fn test_issue_and_verify() {
        let provider = provider();
        let id = Uuid::new_v4();

        let token = provider.issue(id, "a@x.com", UserRole::Admin).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);

        let caller = provider.verify(&token.access_token).unwrap();
        assert_eq!(caller, AuthUser::new(id, "a@x.com", UserRole::Admin));
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        let mut provider = provider();
        provider.expiration_hours = 10_000_000_000_000_000;

        let result = provider.issue(Uuid::new_v4(), "a@x.com", UserRole::User);
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let provider = provider();
        let token = provider
            .issue(Uuid::new_v4(), "a@x.com", UserRole::User)
            .unwrap();

        let tampered = format!("{}x", token.access_token);
        assert!(matches!(provider.verify(&tampered), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let other = JwtProvider::new(
            &Config::new(
                "sqlite::memory:",
                "another-secret-key-that-is-also-32-characters",
            )
            .unwrap(),
        );
        let token = other.issue(Uuid::new_v4(), "a@x.com", UserRole::User).unwrap();

        assert!(provider().verify(&token.access_token).is_err());
    }
}
