//! `SeaORM` entity for the transactions table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::TransactionStatus;

/// A payment transaction submitted for employee review.
///
/// `status` is always present on the record; a terminal state is never
/// inferred from an absent value.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Transaction ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Payee the funds go to.
    pub recipient: String,
    /// Amount, non-negative.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Account number the transaction was submitted from.
    pub account_number: String,
    /// Payment rail, e.g. "SWIFT".
    pub transaction_type: String,
    /// Creation date; list views order by this, newest first.
    pub date: DateTimeWithTimeZone,
    /// Review status.
    pub status: TransactionStatus,
    /// Employee who finalized the transaction, if any.
    pub reviewed_by: Option<Uuid>,
    /// When the transaction was finalized, if it was.
    pub reviewed_at: Option<DateTimeWithTimeZone>,
    /// Created at timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Updated at timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
