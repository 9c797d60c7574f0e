//! Send and pull handlers.
//!
//! Thin marshalling: decode the JSON body, call the chat service, encode
//! the result. Defaults for pull are applied by the service, not here.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use pairchat_types::chat::SendRequest;
use pairchat_types::page::{Page, PullRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// Empty acknowledgement for a successful send.
#[derive(Debug, Serialize)]
pub struct SendResponse {}

/// POST /api/send - Append a message to a two-party chat.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<SendRequest>,
) -> Result<Json<SendResponse>, AppError> {
    state.chat_service.send(&body).await?;
    Ok(Json(SendResponse {}))
}

/// GET|POST /api/pull - Pull one page of a chat.
///
/// The request is a JSON body even on GET.
pub async fn pull_messages(
    State(state): State<AppState>,
    Json(body): Json<PullRequest>,
) -> Result<Json<Page>, AppError> {
    let page = state.chat_service.pull(&body).await?;
    Ok(Json(page))
}
