//! The demo's submit flow: validate, compile, generate.
//!
//! At most one request is outstanding per [`NoteSubmitter`]. While it is
//! in flight the submitter reports [`SubmissionState::Submitting`] and
//! rejects further submissions. Nothing is retried. The in-flight flag is
//! cleared however the request ends, including a caller-imposed timeout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use flonotes_core::error::CoreError;
use flonotes_core::models::note::GeneratedNote;
use flonotes_core::models::session::SessionInput;
use flonotes_prompt::build_prompt;

use crate::error::BedrockError;
use crate::generate::NoteGenerator;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a note is already being generated")]
    AlreadySubmitting,

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("note generation failed: {0}")]
    Generation(#[from] BedrockError),

    #[error("note generation timed out after {0:?}")]
    TimedOut(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// A completed submission: the prompt that was sent and what came back.
#[derive(Debug, Clone)]
pub struct Submission {
    pub prompt: String,
    pub note: GeneratedNote,
}

pub struct NoteSubmitter<G> {
    generator: G,
    timeout: Option<Duration>,
    in_flight: AtomicBool,
}

impl<G: NoteGenerator> NoteSubmitter<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            timeout: None,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Give up on a request that has not resolved within `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn state(&self) -> SubmissionState {
        if self.in_flight.load(Ordering::Acquire) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    /// Validate `input`, compile its prompt, and generate a note.
    ///
    /// Invalid input is rejected before anything is sent. A second call
    /// made while one is outstanding fails with
    /// [`SubmitError::AlreadySubmitting`] without touching the first.
    pub async fn submit(&self, input: &SessionInput) -> Result<Submission, SubmitError> {
        input.ensure_valid()?;
        let _guard = self.begin()?;

        let prompt = build_prompt(input);
        let request = self.generator.generate(&prompt);
        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, request).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(timeout = ?limit, "note generation timed out");
                    return Err(SubmitError::TimedOut(limit));
                }
            },
            None => request.await,
        };

        let note = outcome.inspect_err(|e| warn!(error = %e, "note generation failed"))?;
        info!(generation_id = %note.id, "submission complete");

        Ok(Submission { prompt, note })
    }

    fn begin(&self) -> Result<InFlight<'_>, SubmitError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SubmitError::AlreadySubmitting)?;
        Ok(InFlight(&self.in_flight))
    }
}

/// Clears the in-flight flag when the submission ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
