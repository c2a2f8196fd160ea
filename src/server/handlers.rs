use super::types::{ErrorResponse, HealthResponse, PromptRequest};
use crate::{Error, forwarder::PromptForwarder};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<dyn PromptForwarder>,
    pub reject_missing_input: bool,
}

/// `POST /api/prompts`: relays the prompt downstream.
///
/// A present result is returned as the bare downstream JSON. Every
/// forwarding failure, and an empty downstream answer, becomes a 404 with
/// no body.
pub async fn prompts(
    State(state): State<AppState>,
    Json(request): Json<PromptRequest>,
) -> Response {
    let request_id = Uuid::new_v4();

    if request.input.is_none() && state.reject_missing_input {
        warn!("Rejecting prompt request {}: input is missing", request_id);
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: Error::MissingInput.to_string(),
            }),
        )
            .into_response();
    }

    info!(
        "Received prompt request {} ({} chars)",
        request_id,
        request.input.as_deref().map_or(0, |p| p.chars().count())
    );

    match state.forwarder.forward(request.input.as_deref()).await {
        Ok(Some(payload)) => {
            info!("Relaying downstream result for request {}", request_id);
            (StatusCode::OK, Json(payload)).into_response()
        }
        Ok(None) => {
            info!("Downstream returned no result for request {}", request_id);
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            warn!(
                kind = e.kind(),
                "Forwarding failed for request {}: {}", request_id, e
            );
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
