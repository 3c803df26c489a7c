//! flonotes-prompt
//!
//! Turns a structured [`SessionInput`] into the natural-language prompt sent
//! to the note-generation model. Pure and deterministic: no I/O, no
//! randomness, and the input is never mutated.
//!
//! The pipeline has two steps. [`annotate`](annotate::annotate) derives a
//! qualitative descriptor for every numeric score, and
//! [`compile`](compile::compile) assembles the labelled sections in a fixed
//! order. [`build_prompt`] runs both.

pub mod annotate;
pub mod compile;
pub mod descriptor;
pub mod flags;

use flonotes_core::models::session::SessionInput;

pub use annotate::{annotate, AnnotatedSession};
pub use compile::compile;
pub use descriptor::{score_to_descriptor, Descriptor};

/// Annotate and compile a session in one step.
pub fn build_prompt(input: &SessionInput) -> String {
    compile(&annotate(input))
}
