//! flonotes-bedrock
//!
//! Note generation through the Bedrock Converse API, and the submission
//! controller the demo uses to send one compiled prompt at a time.

pub mod error;
pub mod generate;
pub mod submission;
pub mod tokens;
