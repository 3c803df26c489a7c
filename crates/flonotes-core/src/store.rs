//! Persistence seam for generated notes.
//!
//! Saving a note is not part of the demo. The trait exists so callers have
//! a stable place to plug storage in; the only implementation refuses.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("saving notes is not implemented")]
    Unimplemented,
}

pub trait NoteStore: Send + Sync {
    fn save(&self, narrative: &str) -> Result<NoteId, StoreError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedNoteStore;

impl NoteStore for UnimplementedNoteStore {
    fn save(&self, narrative: &str) -> Result<NoteId, StoreError> {
        tracing::warn!(narrative_len = narrative.len(), "note save requested but not implemented");
        Err(StoreError::Unimplemented)
    }
}
