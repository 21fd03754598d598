use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::required;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Sign a standard authentication challenge for the frame.
pub async fn prompt(
    State(state): State<AppState>,
    Query(query): Query<PromptQuery>,
) -> Result<ApiSuccess<PromptResponseData>, ApiError> {
    let username = required(query.user, "Missing query parameter: user")?;
    let sig_request = state.duo.sign_request(state.duo_config.keys(), &username);

    tracing::info!(username = %username, "Authentication challenge issued");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        PromptResponseData {
            host: state.duo_config.api_hostname.clone(),
            sig_request,
        },
    ))
}

/// Sign an enrollment challenge for the frame.
pub async fn enroll_prompt(
    State(state): State<AppState>,
    Query(query): Query<PromptQuery>,
) -> Result<ApiSuccess<PromptResponseData>, ApiError> {
    let username = required(query.user, "Missing query parameter: user")?;
    let sig_request = state
        .duo
        .sign_enroll_request(state.duo_config.keys(), &username);

    tracing::info!(username = %username, "Enrollment challenge issued");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        PromptResponseData {
            host: state.duo_config.api_hostname.clone(),
            sig_request,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PromptQuery {
    user: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptResponseData {
    pub host: String,
    pub sig_request: String,
}
