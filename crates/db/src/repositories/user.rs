//! User repository for database operations.
//!
//! Users are owned by account-management flows outside this service; the
//! repository only reads them.

use sea_orm::{ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::users;

/// User repository for lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by username or account number.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Username.eq(identifier))
                    .add(users::Column::AccountNumber.eq(identifier)),
            )
            .one(&self.db)
            .await
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id).one(&self.db).await
    }
}
