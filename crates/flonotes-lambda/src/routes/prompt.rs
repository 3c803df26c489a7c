use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;

use flonotes_core::models::session::SessionInput;
use flonotes_prompt::{annotate, compile, AnnotatedSession};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct PromptResponse {
    prompt: String,
    annotated: AnnotatedSession,
}

/// The form's reset state.
pub async fn default_session() -> Json<SessionInput> {
    Json(SessionInput::default())
}

/// Preview the prompt a session would produce, without generating a note.
pub async fn compile_prompt(
    payload: Result<Json<SessionInput>, JsonRejection>,
) -> Result<Json<PromptResponse>, ApiError> {
    let Json(input) = payload?;
    input.ensure_valid()?;

    let annotated = annotate(&input);
    let prompt = compile(&annotated);

    Ok(Json(PromptResponse { prompt, annotated }))
}
