//! Transaction repository for database operations.
//!
//! All status mutation goes through [`TransactionRepository::validate_transaction`],
//! which writes the new status with a conditional update so that racing
//! reviewers cannot both finalize the same transaction.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, sea_query::Expr,
};
use tracing::warn;
use uuid::Uuid;

use payguard_core::lifecycle::{LifecycleError, LifecycleService};

use crate::entities::{sea_orm_active_enums::TransactionStatus, transactions};

/// Input for creating a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    /// Payee the funds go to.
    pub recipient: String,
    /// Amount, non-negative.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Account number the transaction is submitted from.
    pub account_number: String,
    /// Payment rail, e.g. "SWIFT".
    pub transaction_type: String,
}

/// Transaction repository for CRUD and lifecycle operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new transaction in `Pending` status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateTransactionInput,
    ) -> Result<transactions::Model, DbErr> {
        let now = Utc::now().into();
        let transaction = transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            recipient: Set(input.recipient),
            amount: Set(input.amount),
            currency: Set(input.currency),
            account_number: Set(input.account_number),
            transaction_type: Set(input.transaction_type),
            date: Set(now),
            status: Set(TransactionStatus::Pending),
            reviewed_by: Set(None),
            reviewed_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        transaction.insert(&self.db).await
    }

    /// Finds a transaction by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<transactions::Model>, DbErr> {
        transactions::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists all transactions ordered by creation date descending.
    ///
    /// Partitioning into pending and verified views is a read-side
    /// projection done by the client, not a stored split.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<transactions::Model>, DbErr> {
        transactions::Entity::find()
            .order_by_desc(transactions::Column::Date)
            .all(&self.db)
            .await
    }

    /// Lists transactions for one account, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_account(
        &self,
        account_number: &str,
    ) -> Result<Vec<transactions::Model>, DbErr> {
        transactions::Entity::find()
            .filter(transactions::Column::AccountNumber.eq(account_number))
            .order_by_desc(transactions::Column::Date)
            .all(&self.db)
            .await
    }

    /// Finalizes a pending transaction as `Approved` or `Rejected`.
    ///
    /// The write is a compare-and-swap: the status column is updated only
    /// where it still reads `pending`. When two reviewers race, exactly one
    /// update affects a row; the loser re-reads the record and reports the
    /// terminal status the winner installed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Transaction is not found
    /// - Transaction already left `Pending` (`AlreadyFinalized`)
    /// - The requested status is not a legal decision (`InvalidStatus`)
    /// - Database operation fails
    pub async fn validate_transaction(
        &self,
        transaction_id: Uuid,
        requested_status: &str,
        reviewed_by: Uuid,
    ) -> Result<transactions::Model, LifecycleError> {
        // Fetch transaction
        let transaction = transactions::Entity::find_by_id(transaction_id)
            .one(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::NotFound(transaction_id))?;

        // Validate the decision against the snapshot
        let new_status = LifecycleService::decide(
            db_status_to_core(&transaction.status),
            requested_status,
        )?;

        // Conditional write: only transitions a row still in pending.
        // A plain read-then-write here would race concurrent reviewers.
        let now = Utc::now();
        let result = transactions::Entity::update_many()
            .col_expr(
                transactions::Column::Status,
                core_status_to_db(new_status).as_enum(),
            )
            .col_expr(transactions::Column::ReviewedBy, Expr::value(reviewed_by))
            .col_expr(transactions::Column::ReviewedAt, Expr::value(now))
            .col_expr(transactions::Column::UpdatedAt, Expr::value(now))
            .filter(transactions::Column::Id.eq(transaction_id))
            .filter(transactions::Column::Status.eq(TransactionStatus::Pending))
            .exec(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?;

        let updated = transactions::Entity::find_by_id(transaction_id)
            .one(&self.db)
            .await
            .map_err(|e| LifecycleError::Database(e.to_string()))?
            .ok_or(LifecycleError::NotFound(transaction_id))?;

        if result.rows_affected == 0 {
            // A concurrent reviewer finalized between our read and write
            warn!(
                transaction_id = %transaction_id,
                "Lost validation race, transaction already finalized"
            );
            return Err(LifecycleError::AlreadyFinalized {
                status: db_status_to_core(&updated.status),
            });
        }

        Ok(updated)
    }
}

/// Converts a DB status to the core lifecycle status.
#[must_use]
pub fn db_status_to_core(
    status: &TransactionStatus,
) -> payguard_core::lifecycle::TransactionStatus {
    match status {
        TransactionStatus::Pending => payguard_core::lifecycle::TransactionStatus::Pending,
        TransactionStatus::Approved => payguard_core::lifecycle::TransactionStatus::Approved,
        TransactionStatus::Rejected => payguard_core::lifecycle::TransactionStatus::Rejected,
    }
}

/// Converts a core lifecycle status to the DB status.
#[must_use]
pub fn core_status_to_db(
    status: payguard_core::lifecycle::TransactionStatus,
) -> TransactionStatus {
    match status {
        payguard_core::lifecycle::TransactionStatus::Pending => TransactionStatus::Pending,
        payguard_core::lifecycle::TransactionStatus::Approved => TransactionStatus::Approved,
        payguard_core::lifecycle::TransactionStatus::Rejected => TransactionStatus::Rejected,
    }
}
