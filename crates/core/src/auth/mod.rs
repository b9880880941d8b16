//! Authentication and authorization.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification
//! - User role definitions and the authorization guard

mod error;
mod guard;
mod password;

pub use error::AuthError;
pub use guard::{RequiredRole, Role, authorize};
pub use password::{PasswordError, hash_password, verify_password};
