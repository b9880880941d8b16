//! Shared types for PayGuard.
//!
//! This crate provides the types used across all other crates:
//! - Access token claims and login payloads
//! - JWT signing and validation
//! - Configuration management

pub mod auth;
pub mod config;
pub mod jwt;

pub use auth::Claims;
pub use config::AppConfig;
pub use jwt::{JwtConfig, JwtError, JwtService};
