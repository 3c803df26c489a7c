use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Qualitative band for a 1–10 score. Prompts use these instead of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Descriptor {
    Mild,
    Moderate,
    Severe,
    /// The score was outside 1–10.
    Unknown,
}

impl Descriptor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Descriptor::Mild => "mild",
            Descriptor::Moderate => "moderate",
            Descriptor::Severe => "severe",
            Descriptor::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a score to its descriptor: 1–3 mild, 4–6 moderate, 7–10 severe.
///
/// Total over `i32`. Anything outside 1–10 maps to [`Descriptor::Unknown`]
/// rather than failing.
pub fn score_to_descriptor(score: i32) -> Descriptor {
    match score {
        1..=3 => Descriptor::Mild,
        4..=6 => Descriptor::Moderate,
        7..=10 => Descriptor::Severe,
        _ => Descriptor::Unknown,
    }
}
