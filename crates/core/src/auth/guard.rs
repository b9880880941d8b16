//! Role-based authorization guard.
//!
//! Every handler that reads another identity's data or mutates transaction
//! status must pass verified claims through [`authorize`] before touching
//! the store.

use payguard_shared::Claims;
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// User roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular banking customer.
    User,
    /// Bank employee reviewing transactions.
    Employee,
}

impl Role {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Employee => "employee",
        }
    }

    /// Parses a role from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Self::User),
            "employee" => Some(Self::Employee),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role requirement for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRole<'a> {
    /// Any verified token is sufficient.
    AnyAuthenticated,
    /// Only employees may pass.
    EmployeeOnly,
    /// The subject may act on their own records; employees on anyone's.
    SelfOrEmployee {
        /// The account number the request targets.
        account_number: &'a str,
    },
}

/// Checks verified claims against a role requirement.
///
/// # Errors
///
/// Returns `AuthError::Forbidden` when the role claim does not satisfy the
/// requirement, or when it does not parse to a known role at all.
pub fn authorize(claims: &Claims, required: RequiredRole<'_>) -> Result<(), AuthError> {
    let role = Role::parse(&claims.role).ok_or(AuthError::Forbidden)?;

    match required {
        RequiredRole::AnyAuthenticated => Ok(()),
        RequiredRole::EmployeeOnly => {
            if role == Role::Employee {
                Ok(())
            } else {
                Err(AuthError::Forbidden)
            }
        }
        RequiredRole::SelfOrEmployee { account_number } => {
            if role == Role::Employee || claims.account_number() == account_number {
                Ok(())
            } else {
                Err(AuthError::Forbidden)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rstest::rstest;
    use uuid::Uuid;

    fn claims(role: &str, account_number: &str) -> Claims {
        Claims::new(
            Uuid::new_v4(),
            account_number,
            role,
            Utc::now() + Duration::hours(1),
        )
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("Employee"), Some(Role::Employee));
        assert_eq!(Role::parse(Role::Employee.as_str()), Some(Role::Employee));
        assert_eq!(Role::parse("admin"), None);
    }

    #[rstest]
    #[case("user")]
    #[case("employee")]
    fn test_any_authenticated_accepts_both_roles(#[case] role: &str) {
        assert!(authorize(&claims(role, "111"), RequiredRole::AnyAuthenticated).is_ok());
    }

    #[test]
    fn test_employee_only_rejects_user_role() {
        let result = authorize(&claims("user", "111"), RequiredRole::EmployeeOnly);
        assert!(matches!(result, Err(AuthError::Forbidden)));
    }

    #[test]
    fn test_employee_only_accepts_employee_role() {
        assert!(authorize(&claims("employee", "111"), RequiredRole::EmployeeOnly).is_ok());
    }

    #[test]
    fn test_unknown_role_claim_is_forbidden() {
        let result = authorize(&claims("superuser", "111"), RequiredRole::AnyAuthenticated);
        assert!(matches!(result, Err(AuthError::Forbidden)));
    }

    #[rstest]
    #[case("user", "111", "111", true)]
    #[case("user", "111", "222", false)]
    #[case("employee", "111", "222", true)]
    fn test_self_or_employee(
        #[case] role: &str,
        #[case] own_account: &str,
        #[case] target_account: &str,
        #[case] allowed: bool,
    ) {
        let result = authorize(
            &claims(role, own_account),
            RequiredRole::SelfOrEmployee {
                account_number: target_account,
            },
        );
        assert_eq!(result.is_ok(), allowed);
    }
}
