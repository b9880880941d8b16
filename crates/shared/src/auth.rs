//! Authentication types for access tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for access tokens.
///
/// The server never stores an issued token; the claims are the full
/// server-side view of the bearer. `role` always reflects the role on the
/// stored user record at issuance time, never the flag the client sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Account number of the subject.
    pub acct: String,
    /// Role recorded on the user at login ("user" or "employee").
    pub role: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user.
    #[must_use]
    pub fn new(user_id: Uuid, account_number: &str, role: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            acct: account_number.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the account number from claims.
    #[must_use]
    pub fn account_number(&self) -> &str {
        &self.acct
    }
}

/// Login request payload.
///
/// `identifier` may be either a username or an account number. The
/// `isEmployee` flag only selects which eligibility check runs at login;
/// the issued role claim always comes from the stored record.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Username or account number.
    pub identifier: String,
    /// Plaintext password, compared against the stored hash.
    pub password: String,
    /// Whether the caller is attempting an employee login.
    #[serde(rename = "isEmployee", default)]
    pub is_employee: bool,
}

/// Login response payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed access token (bearer credential).
    pub token: String,
    /// Role embedded in the token.
    pub role: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    /// User ID.
    pub user_id: Uuid,
    /// Username.
    pub username: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Account number.
    pub account_number: String,
}
