//! Active enum definitions for PostgreSQL enum columns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role stored on a user record.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
pub enum UserRole {
    /// Regular banking customer.
    #[sea_orm(string_value = "user")]
    User,
    /// Bank employee.
    #[sea_orm(string_value = "employee")]
    Employee,
}

/// Employment status of a user.
///
/// Only `Employed` users may log in as employees, checked at login time.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "employment_status")]
pub enum EmploymentStatus {
    /// Currently employed by the bank.
    #[sea_orm(string_value = "employed")]
    Employed,
    /// Not employed.
    #[sea_orm(string_value = "unemployed")]
    Unemployed,
}

impl EmploymentStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employed => "employed",
            Self::Unemployed => "unemployed",
        }
    }
}

/// Transaction review status.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_status")]
pub enum TransactionStatus {
    /// Awaiting employee review.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Approved (terminal).
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Rejected (terminal).
    #[sea_orm(string_value = "rejected")]
    Rejected,
}
