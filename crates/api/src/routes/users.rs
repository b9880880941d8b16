//! Public user lookup routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tracing::error;

use crate::AppState;
use payguard_db::UserRepository;

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/employmentStatus/{identifier}", get(employment_status))
}

/// GET /employmentStatus/{identifier} - Employment status lookup.
///
/// Public: the login flow consults this before offering an employee login.
async fn employment_status(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> impl IntoResponse {
    let user_repo = UserRepository::new((*state.db).clone());

    match user_repo.find_by_identifier(&identifier).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(json!({
                "employmentStatus": user.employment_status.as_str()
            })),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": "User not found"
            })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Database error looking up employment status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "internal_error",
                    "message": "An error occurred"
                })),
            )
                .into_response()
        }
    }
}
