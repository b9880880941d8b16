//! JWT token generation and validation.
//!
//! A single access token carries identity and role; there is no refresh
//! token and no server-side revocation list. Expiry is the only
//! termination event for a token.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::Claims;

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token expiration in hours.
    pub token_expires_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            token_expires_hours: 24,
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,

    /// Token could not be parsed or its signature did not validate.
    #[error("invalid token: {0}")]
    Malformed(String),
}

/// JWT service for token operations.
///
/// The signing secret is read-only after construction; validation is a pure
/// function of the token and the current time.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issues an access token for a user.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn issue_token(
        &self,
        user_id: Uuid,
        account_number: &str,
        role: &str,
    ) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::hours(self.config.token_expires_hours);
        let claims = Claims::new(user_id, account_number, role, expires_at);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates and decodes a token.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` if the token has expired.
    /// Returns `JwtError::Malformed` if it cannot be parsed or the
    /// signature does not validate.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::default();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Malformed(e.to_string()),
            })
    }

    /// Returns the access token expiration in seconds.
    #[must_use]
    pub const fn token_expires_in(&self) -> i64 {
        self.config.token_expires_hours * 3600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            token_expires_hours: 24,
        })
    }

    #[test]
    fn test_issue_token() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue_token(user_id, "1000200030", "employee").unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_validate_token() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue_token(user_id, "1000200030", "employee").unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.account_number(), "1000200030");
        assert_eq!(claims.role, "employee");
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_expired_token() {
        let service = JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            token_expires_hours: -1,
        });
        let token = service
            .issue_token(Uuid::new_v4(), "1000200030", "user")
            .unwrap();

        let result = create_test_service().validate_token(&token);
        assert!(matches!(result, Err(JwtError::Expired)));
    }

    #[test]
    fn test_wrong_secret_is_malformed() {
        let service = create_test_service();
        let token = service.issue_token(Uuid::new_v4(), "1000200030", "user").unwrap();

        let other = JwtService::new(JwtConfig {
            secret: "a-different-secret".to_string(),
            token_expires_hours: 24,
        });
        assert!(matches!(
            other.validate_token(&token),
            Err(JwtError::Malformed(_))
        ));
    }
}
