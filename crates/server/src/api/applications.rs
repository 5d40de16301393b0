//! Application submission endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::applications::ApplicationInput;
use crate::state::AppState;

use super::{api_error, ApiError, ErrorResponse};

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: Uuid,
    pub status: &'static str,
}

pub async fn submit_application(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ApplicationInput>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let Some(forwarder) = &state.applications else {
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "application submission is not configured",
        ));
    };

    let application = input.validate().map_err(|problems| {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "invalid application".to_string(),
                details: problems,
            }),
        )
    })?;

    forwarder.forward(&application).await.map_err(|e| {
        tracing::error!(error = %e, application_id = %application.id, "application forwarding failed");
        api_error(StatusCode::BAD_GATEWAY, "application could not be delivered")
    })?;

    Ok((
        StatusCode::ACCEPTED,
        Json(SubmitResponse {
            id: application.id,
            status: "forwarded",
        }),
    ))
}
