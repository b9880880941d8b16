//! `SeaORM` entity for the users table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{EmploymentStatus, UserRole};

/// A registered user of the portal.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Unique username.
    #[sea_orm(unique)]
    pub username: String,
    /// Unique account number.
    #[sea_orm(unique)]
    pub account_number: String,
    /// Password hash in PHC string format.
    pub password_hash: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Role honored for issued tokens.
    pub role: UserRole,
    /// Employment status, checked for employee logins.
    pub employment_status: EmploymentStatus,
    /// Created at timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Updated at timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
