//! Transaction submission, listing, and review routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use tracing::{error, info};
use uuid::Uuid;

use crate::{AppState, middleware::AuthUser};
use payguard_core::auth::{AuthError, RequiredRole, authorize};
use payguard_core::lifecycle::LifecycleError;
use payguard_db::entities::transactions;
use payguard_db::repositories::transaction::{
    CreateTransactionInput, TransactionRepository, db_status_to_core,
};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions", post(create_transaction))
        .route("/transactions/{id}/validate", patch(validate_transaction))
        .route(
            "/accounts/{account_number}/transactions",
            get(list_account_transactions),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for submitting a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Payee the funds go to.
    pub recipient: String,
    /// Amount as a decimal string.
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Payment rail, e.g. "SWIFT".
    #[serde(rename = "type")]
    pub transaction_type: String,
}

/// Request body for validating a transaction.
#[derive(Debug, Deserialize)]
pub struct ValidateTransactionRequest {
    /// Requested terminal status: "Approved" or "Rejected".
    pub status: String,
}

/// Response for a transaction record.
///
/// Field names are the external contract consumed by the reviewing client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: Uuid,
    /// Payee.
    pub recipient: String,
    /// Creation date (RFC 3339).
    pub date: String,
    /// Amount.
    pub amount: String,
    /// Currency code.
    pub currency: String,
    /// Account number.
    pub account_number: String,
    /// Review status: "Pending", "Approved" or "Rejected".
    pub status: String,
    /// Payment rail.
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// Employee who finalized the transaction, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<Uuid>,
    /// When the transaction was finalized, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<String>,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(t: transactions::Model) -> Self {
        Self {
            id: t.id,
            recipient: t.recipient,
            date: t.date.to_rfc3339(),
            amount: t.amount.to_string(),
            currency: t.currency,
            account_number: t.account_number,
            status: db_status_to_core(&t.status).as_str().to_string(),
            transaction_type: t.transaction_type,
            reviewed_by: t.reviewed_by,
            reviewed_at: t.reviewed_at.map(|at| at.to_rfc3339()),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /transactions - Full review list, employee-only.
///
/// Returns all transactions ordered by creation date descending. Splitting
/// into pending and verified views is done by the client.
async fn list_transactions(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = authorize(auth.claims(), RequiredRole::EmployeeOnly) {
        return auth_error_response(&e);
    }

    let tx_repo = TransactionRepository::new((*state.db).clone());

    match tx_repo.list_all().await {
        Ok(transactions) => {
            let items: Vec<TransactionResponse> =
                transactions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list transactions");
            internal_error()
        }
    }
}

/// GET /accounts/{account_number}/transactions - Statement view.
///
/// A user may read their own account; employees may read anyone's.
async fn list_account_transactions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(account_number): Path<String>,
) -> impl IntoResponse {
    if let Err(e) = authorize(
        auth.claims(),
        RequiredRole::SelfOrEmployee {
            account_number: &account_number,
        },
    ) {
        return auth_error_response(&e);
    }

    let tx_repo = TransactionRepository::new((*state.db).clone());

    match tx_repo.list_for_account(&account_number).await {
        Ok(transactions) => {
            let items: Vec<TransactionResponse> =
                transactions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list account transactions");
            internal_error()
        }
    }
}

/// POST /transactions - Submit a payment for review.
///
/// The transaction lands on the caller's own account (taken from the
/// claims, never from the body) and always starts in `Pending`.
async fn create_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateTransactionRequest>,
) -> impl IntoResponse {
    if let Err(e) = authorize(auth.claims(), RequiredRole::AnyAuthenticated) {
        return auth_error_response(&e);
    }

    if payload.recipient.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_recipient",
                "message": "Recipient must not be empty"
            })),
        )
            .into_response();
    }

    let amount = match Decimal::from_str(&payload.amount) {
        Ok(a) if a >= Decimal::ZERO => a,
        Ok(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_amount",
                    "message": "Amount must be non-negative"
                })),
            )
                .into_response();
        }
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_amount",
                    "message": "Invalid amount format"
                })),
            )
                .into_response();
        }
    };

    if payload.currency.len() != 3 || !payload.currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_currency",
                "message": "Currency must be a 3-letter ISO 4217 code"
            })),
        )
            .into_response();
    }

    let tx_repo = TransactionRepository::new((*state.db).clone());

    let input = CreateTransactionInput {
        recipient: payload.recipient,
        amount,
        currency: payload.currency.to_ascii_uppercase(),
        account_number: auth.account_number().to_string(),
        transaction_type: payload.transaction_type,
    };

    match tx_repo.create(input).await {
        Ok(transaction) => {
            info!(
                transaction_id = %transaction.id,
                account = %transaction.account_number,
                "Transaction submitted"
            );
            (
                StatusCode::CREATED,
                Json(TransactionResponse::from(transaction)),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create transaction");
            internal_error()
        }
    }
}

/// PATCH /transactions/{id}/validate - Finalize a pending transaction.
///
/// Employee-only. Exactly one reviewer can move a transaction out of
/// `Pending`; everyone else gets a 409.
async fn validate_transaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ValidateTransactionRequest>,
) -> impl IntoResponse {
    if let Err(e) = authorize(auth.claims(), RequiredRole::EmployeeOnly) {
        return auth_error_response(&e);
    }

    let tx_repo = TransactionRepository::new((*state.db).clone());

    match tx_repo
        .validate_transaction(id, &payload.status, auth.user_id())
        .await
    {
        Ok(transaction) => {
            info!(
                transaction_id = %id,
                status = %payload.status,
                reviewed_by = %auth.user_id(),
                "Transaction finalized"
            );
            (StatusCode::OK, Json(TransactionResponse::from(transaction))).into_response()
        }
        Err(e) => match e {
            LifecycleError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "not_found",
                    "message": "Transaction not found"
                })),
            )
                .into_response(),
            LifecycleError::InvalidStatus(s) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid_status",
                    "message": format!("Invalid status {s:?}: must be Approved or Rejected")
                })),
            )
                .into_response(),
            LifecycleError::AlreadyFinalized { status } => (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "already_finalized",
                    "message": format!("Transaction already finalized as {status}")
                })),
            )
                .into_response(),
            LifecycleError::Database(err) => {
                error!(error = %err, "Failed to validate transaction");
                internal_error()
            }
        },
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn auth_error_response(e: &AuthError) -> Response {
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::FORBIDDEN);
    (
        status,
        Json(json!({
            "error": e.error_code(),
            "message": e.to_string()
        })),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "internal_error",
            "message": "An error occurred"
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use payguard_db::entities::sea_orm_active_enums::TransactionStatus;
    use rust_decimal_macros::dec;

    fn sample_model(status: TransactionStatus) -> transactions::Model {
        let now = Utc::now().into();
        transactions::Model {
            id: Uuid::new_v4(),
            recipient: "Acme Corp".to_string(),
            amount: dec!(1250.50),
            currency: "USD".to_string(),
            account_number: "1000200030".to_string(),
            transaction_type: "SWIFT".to_string(),
            date: now,
            status,
            reviewed_by: None,
            reviewed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_response_field_names_match_client_contract() {
        let response = TransactionResponse::from(sample_model(TransactionStatus::Pending));
        let value = serde_json::to_value(&response).unwrap();

        let object = value.as_object().unwrap();
        for field in [
            "id",
            "recipient",
            "date",
            "amount",
            "currency",
            "accountNumber",
            "status",
            "type",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["amount"], "1250.50");
        assert_eq!(value["type"], "SWIFT");
    }

    #[test]
    fn test_response_status_is_capitalized() {
        let response = TransactionResponse::from(sample_model(TransactionStatus::Approved));
        assert_eq!(response.status, "Approved");
    }

    #[test]
    fn test_login_flag_defaults_to_false() {
        let request: payguard_shared::auth::LoginRequest =
            serde_json::from_str(r#"{"identifier": "alice", "password": "pw"}"#).unwrap();
        assert!(!request.is_employee);

        let request: payguard_shared::auth::LoginRequest = serde_json::from_str(
            r#"{"identifier": "alice", "password": "pw", "isEmployee": true}"#,
        )
        .unwrap();
        assert!(request.is_employee);
    }
}
