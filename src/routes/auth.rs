//! Auth routes: email + password login and signup against the account
//! directory.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use site_client::net::types::{Credentials, ErrorBody, SessionRecord, SignupData};

use crate::services::accounts::AccountError;
use crate::state::AppState;

/// Failure of an auth request, rendered as `{ "error": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody { status: rejection.status(), message: rejection.body_text() }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Account(AccountError::EmailTaken) => StatusCode::CONFLICT,
            Self::Account(AccountError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::InvalidBody { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/login`: open a session for a registered email.
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<SessionRecord>, ApiError> {
    let Json(credentials) = body?;
    let record = state.accounts.read().await.sign_in(&credentials).inspect_err(|e| {
        tracing::info!(error = %e, "login rejected");
    })?;
    tracing::info!(user_id = %record.user.id, "login");
    Ok(Json(record))
}

/// `POST /api/auth/signup`: register an account and open a session.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupData>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionRecord>), ApiError> {
    let Json(data) = body?;
    let record = state.accounts.write().await.register(&data).inspect_err(|e| {
        tracing::info!(error = %e, "signup rejected");
    })?;
    tracing::info!(user_id = %record.user.id, role = %record.user.role, "signup");
    Ok((StatusCode::CREATED, Json(record)))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
