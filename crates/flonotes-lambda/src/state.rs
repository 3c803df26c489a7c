use std::sync::Arc;
use std::time::Duration;

use flonotes_bedrock::generate::NoteGenerator;
use flonotes_core::store::NoteStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn NoteGenerator>,
    pub store: Arc<dyn NoteStore>,
    /// Upper bound on a single generation request. `None` waits indefinitely.
    pub generation_timeout: Option<Duration>,
}
