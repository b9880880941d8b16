//! Transaction lifecycle state machine.
//!
//! A transaction starts `Pending` and moves to `Approved` or `Rejected`
//! exactly once. The decision logic here is pure; the atomic conditional
//! write that serializes racing reviewers lives in the repository layer.

mod error;
mod service;
mod types;

#[cfg(test)]
mod service_props;

pub use error::LifecycleError;
pub use service::LifecycleService;
pub use types::TransactionStatus;
