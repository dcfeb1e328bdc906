//! Chat relay route.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use wire::{ChatRequest, ChatResponse};

use crate::state::AppState;
use crate::upstream::UpstreamError;

/// Handle `POST /chat`: forward one turn to the upstream conversational
/// backend.
///
/// The widget treats every failure uniformly, so all upstream error
/// variants collapse to `502 Bad Gateway` here.
pub async fn relay_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, StatusCode> {
    let response = state
        .upstream
        .chat(&body)
        .await
        .map_err(upstream_error_to_status)?;

    Ok(Json(response))
}

fn upstream_error_to_status(error: UpstreamError) -> StatusCode {
    tracing::warn!(error = %error, "chat relay failed");
    StatusCode::BAD_GATEWAY
}
