use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::token_count::TokenUsage;

/// Body of a note-generation request. The compiled prompt is the only
/// payload field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GenerateNoteRequest {
    pub prompt: String,
}

/// Successful note-generation response.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GenerateNoteResponse {
    pub generated_note: String,
}

/// A narrative returned by the note-generation model, before anything is
/// done with it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GeneratedNote {
    pub id: Uuid,
    pub narrative: String,
    pub model_id: String,
    pub usage: TokenUsage,
    pub created_at: jiff::Timestamp,
}

impl From<GeneratedNote> for GenerateNoteResponse {
    fn from(note: GeneratedNote) -> Self {
        Self {
            generated_note: note.narrative,
        }
    }
}
