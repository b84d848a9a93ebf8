//! `POST /chat`: triage one free-text message.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::triage::{TriageError, TriageOutcome};

#[derive(Deserialize)]
pub struct ChatRequest {
    /// Missing is treated like empty.
    #[serde(default)]
    pub message: String,
}

pub async fn send(
    State(ctx): State<ApiContext>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<TriageOutcome>, ApiError> {
    let Json(req) = payload?;

    // Padding does not count; blank input falls through to EmptyInput.
    if req.message.trim().chars().count() > ctx.max_message_chars {
        return Err(ApiError::BadRequest(format!(
            "Message too long (max {} chars)",
            ctx.max_message_chars
        )));
    }

    let engine = ctx.engine.clone();
    let outcome = run_isolated(move || engine.triage(&req.message)).await?;

    Ok(Json(outcome))
}

/// Run triage on a blocking thread. A panic inside it becomes
/// `ApiError::Internal` with no partial result. Relies on the unwind
/// panic strategy (see `[profile.release]`).
pub(crate) async fn run_isolated<F>(triage: F) -> Result<TriageOutcome, ApiError>
where
    F: FnOnce() -> Result<TriageOutcome, TriageError> + Send + 'static,
{
    let outcome = tokio::task::spawn_blocking(triage)
        .await
        .map_err(|e| ApiError::Internal(format!("Triage task failed: {e}")))??;
    Ok(outcome)
}
