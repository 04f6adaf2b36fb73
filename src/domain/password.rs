//! Password value object and credential verification.
//!
//! `Password` owns the Argon2 configuration; `PasswordEncoder` is the seam
//! services depend on so hashing can be replaced in tests.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{messages, AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("valid digit regex"));
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("valid uppercase regex"));

/// Check a new password against the password policy.
///
/// A valid password has at least [`MIN_PASSWORD_LENGTH`] characters, one
/// digit and one uppercase letter.
pub fn validate_new_password(new_password: &str) -> AppResult<()> {
    if new_password.chars().count() < MIN_PASSWORD_LENGTH
        || !DIGIT.is_match(new_password)
        || !UPPERCASE.is_match(new_password)
    {
        return Err(AppError::PolicyViolation(messages::PASSWORD_POLICY.to_string()));
    }
    Ok(())
}

/// Hashes and verifies raw passwords.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordEncoder: Send + Sync {
    /// Hash a raw password for storage
    fn encode(&self, raw: &str) -> AppResult<String>;

    /// Check a raw password against a stored hash
    fn matches(&self, raw: &str, encoded: &str) -> bool;
}

/// Argon2-backed encoder used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Encoder;

impl PasswordEncoder for Argon2Encoder {
    fn encode(&self, raw: &str) -> AppResult<String> {
        Ok(Password::new(raw)?.into_string())
    }

    fn matches(&self, raw: &str, encoded: &str) -> bool {
        Password::from_hash(encoded.to_string()).verify(raw)
    }
}

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// A malformed stored hash never verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_accepts_valid_password() {
        assert!(validate_new_password("Abcdefgh1@").is_ok());
        assert!(validate_new_password("PASSWORD1").is_ok());
    }

    #[test]
    fn test_policy_rejects_short_password() {
        let err = validate_new_password("short").unwrap_err();
        assert_eq!(
            err.to_string(),
            "새 비밀번호는 8자 이상이어야 하고, 숫자와 대문자를 포함해야 합니다."
        );
        assert!(matches!(err, AppError::PolicyViolation(_)));
    }

    #[test]
    fn test_policy_requires_digit_and_uppercase() {
        assert!(validate_new_password("Abcdefghij").is_err());
        assert!(validate_new_password("abcdefgh12").is_err());
        assert!(validate_new_password("Abcdef1").is_err());
    }

    #[test]
    fn test_policy_counts_characters_not_bytes() {
        // 7 characters, more than 8 bytes
        assert!(validate_new_password("Ab1가나다라").is_err());
        assert!(validate_new_password("Ab1가나다라마").is_ok());
    }

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_encoder_round_trip() {
        let encoder = Argon2Encoder;
        let encoded = encoder.encode("Abcdefgh1!").unwrap();

        assert_ne!(encoded, "Abcdefgh1!");
        assert!(encoder.matches("Abcdefgh1!", &encoded));
        assert!(!encoder.matches("Abcdefgh1@", &encoded));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        assert!(!Argon2Encoder.matches("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::from_hash("secret-hash".to_string());
        assert!(!format!("{:?}", password).contains("secret-hash"));
    }
}
