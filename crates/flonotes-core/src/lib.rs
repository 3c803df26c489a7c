//! flonotes-core
//!
//! Pure domain types for the FloNotes demo: the structured session input,
//! its closed label sets, score validation, and the note-generation wire
//! types. No AWS dependency. This is the shared vocabulary of the system.

pub mod error;
pub mod models;
pub mod store;
pub mod validate;
