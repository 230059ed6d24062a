// HTTP request handlers
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::domain::render::PanelRender;
use crate::infrastructure::wire::{WireEvent, decode_event};
use crate::presentation::app_state::AppState;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current render instructions for the rendering collaborator
pub async fn get_panel(State(state): State<Arc<AppState>>) -> Json<PanelRender> {
    Json(state.render.borrow().clone())
}

/// Inbound event channel for the fitness backend
pub async fn ingest_event(
    State(state): State<Arc<AppState>>,
    Json(wire): Json<WireEvent>,
) -> impl IntoResponse {
    let event = match decode_event(wire) {
        Ok(event) => event,
        Err(err) => {
            tracing::warn!(error = %err, "rejecting backend event");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    if state.events.send(event).await.is_err() {
        tracing::error!("panel event loop is gone, dropping event");
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    StatusCode::ACCEPTED.into_response()
}
