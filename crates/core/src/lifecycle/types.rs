//! Transaction status type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction status in the review lifecycle.
///
/// The valid transitions are:
/// - Pending → Approved (employee approves)
/// - Pending → Rejected (employee rejects)
///
/// Both target states are terminal; a finalized transaction is immutable.
/// Serialized values are capitalized (`"Pending"`), which is the contract
/// the reviewing client consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Awaiting employee review.
    Pending,
    /// Reviewed and approved (immutable).
    Approved,
    /// Reviewed and rejected (immutable).
    Rejected,
}

impl TransactionStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Parses a status from a string, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true if no further transition is permitted from this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_as_str() {
        assert_eq!(TransactionStatus::Pending.as_str(), "Pending");
        assert_eq!(TransactionStatus::Approved.as_str(), "Approved");
        assert_eq!(TransactionStatus::Rejected.as_str(), "Rejected");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            TransactionStatus::parse("Pending"),
            Some(TransactionStatus::Pending)
        );
        assert_eq!(
            TransactionStatus::parse("approved"),
            Some(TransactionStatus::Approved)
        );
        assert_eq!(
            TransactionStatus::parse("REJECTED"),
            Some(TransactionStatus::Rejected)
        );
        assert_eq!(TransactionStatus::parse("Cancelled"), None);
        assert_eq!(TransactionStatus::parse(""), None);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!TransactionStatus::Pending.is_terminal());
        assert!(TransactionStatus::Approved.is_terminal());
        assert!(TransactionStatus::Rejected.is_terminal());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(format!("{}", TransactionStatus::Pending), "Pending");
        assert_eq!(format!("{}", TransactionStatus::Rejected), "Rejected");
    }
}
