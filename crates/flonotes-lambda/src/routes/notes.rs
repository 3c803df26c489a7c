use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use flonotes_core::models::note::{GenerateNoteRequest, GenerateNoteResponse, GeneratedNote};
use flonotes_core::models::session::SessionInput;
use flonotes_prompt::build_prompt;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionNoteResponse {
    prompt: String,
    generated_note: String,
}

#[derive(Deserialize)]
pub struct SaveNoteRequest {
    pub narrative: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveNoteResponse {
    note_id: String,
}

/// Generate a narrative from an already compiled prompt.
pub async fn generate_note(
    State(state): State<AppState>,
    payload: Result<Json<GenerateNoteRequest>, JsonRejection>,
) -> Result<Json<GenerateNoteResponse>, ApiError> {
    let Json(req) = payload?;
    let note = run_generation(&state, &req.prompt).await?;
    Ok(Json(note.into()))
}

/// Validate and compile a session, then generate its narrative.
pub async fn generate_from_session(
    State(state): State<AppState>,
    payload: Result<Json<SessionInput>, JsonRejection>,
) -> Result<Json<SessionNoteResponse>, ApiError> {
    let Json(input) = payload?;
    input.ensure_valid()?;

    let prompt = build_prompt(&input);
    let note = run_generation(&state, &prompt).await?;

    Ok(Json(SessionNoteResponse {
        prompt,
        generated_note: note.narrative,
    }))
}

/// Save a generated narrative. Not supported by the demo.
pub async fn save_note(
    State(state): State<AppState>,
    payload: Result<Json<SaveNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveNoteResponse>), ApiError> {
    let Json(req) = payload?;
    let id = state.store.save(&req.narrative)?;
    Ok((
        StatusCode::CREATED,
        Json(SaveNoteResponse {
            note_id: id.to_string(),
        }),
    ))
}

async fn run_generation(state: &AppState, prompt: &str) -> Result<GeneratedNote, ApiError> {
    if prompt.trim().is_empty() {
        return Err(ApiError::BadRequest("prompt must not be empty".to_string()));
    }

    let request = state.generator.generate(prompt);
    match state.generation_timeout {
        Some(limit) => tokio::time::timeout(limit, request)
            .await
            .map_err(|_| timed_out(limit))?
            .map_err(ApiError::from),
        None => request.await.map_err(ApiError::from),
    }
}

fn timed_out(limit: Duration) -> ApiError {
    ApiError::GatewayTimeout(format!(
        "note generation timed out after {}s",
        limit.as_secs()
    ))
}
