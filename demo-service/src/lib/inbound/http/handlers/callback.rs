use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;
use serde::Serialize;

use super::required;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Verify the response the frame posts back after authentication.
pub async fn callback(
    State(state): State<AppState>,
    Form(form): Form<CallbackForm>,
) -> Result<ApiSuccess<CallbackResponseData>, ApiError> {
    let sig_response = required(form.sig_response, "Missing signature form data: sig_response")?;

    let username = state
        .duo
        .verify_response(state.duo_config.keys(), &sig_response)
        .map_err(|e| {
            tracing::warn!(error = %e, "Authentication response rejected");
            ApiError::from(e)
        })?;

    tracing::info!(username = %username, "Authentication verified");

    Ok(ApiSuccess::new(StatusCode::OK, CallbackResponseData { username }))
}

/// Verify the response the frame posts back after enrollment.
pub async fn enroll_callback(
    State(state): State<AppState>,
    Form(form): Form<CallbackForm>,
) -> Result<ApiSuccess<CallbackResponseData>, ApiError> {
    let sig_response = required(form.sig_response, "Missing signature form data: sig_response")?;

    let username = state
        .duo
        .verify_enroll_response(state.duo_config.keys(), &sig_response)
        .map_err(|e| {
            tracing::warn!(error = %e, "Enrollment response rejected");
            ApiError::from(e)
        })?;

    tracing::info!(username = %username, "Enrollment verified");

    Ok(ApiSuccess::new(StatusCode::OK, CallbackResponseData { username }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallbackForm {
    sig_response: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackResponseData {
    pub username: String,
}
