//! Core business logic for PayGuard.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types and validation rules live here.
//!
//! # Modules
//!
//! - `auth` - Password verification and the role-based authorization guard
//! - `lifecycle` - The transaction status state machine
pub mod auth;
pub mod lifecycle;
