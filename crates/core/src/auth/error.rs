//! Authentication and authorization error types.

use thiserror::Error;

/// Errors that can occur during authentication or authorization.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Identifier unknown or password did not match the stored hash.
    #[error("Invalid identifier or password")]
    InvalidCredentials,

    /// Employee login requested for a user who is not currently employed.
    #[error("Not authorized as an employee")]
    NotAuthorizedAsEmployee,

    /// The caller's role does not satisfy the required role for the request.
    #[error("Access denied")]
    Forbidden,
}

impl AuthError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials => 401,
            Self::NotAuthorizedAsEmployee | Self::Forbidden => 403,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::NotAuthorizedAsEmployee => "not_authorized_as_employee",
            Self::Forbidden => "forbidden",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::NotAuthorizedAsEmployee.status_code(), 403);
        assert_eq!(AuthError::Forbidden.status_code(), 403);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.error_code(),
            "invalid_credentials"
        );
        assert_eq!(
            AuthError::NotAuthorizedAsEmployee.error_code(),
            "not_authorized_as_employee"
        );
        assert_eq!(AuthError::Forbidden.error_code(), "forbidden");
    }
}
