//! Boundary validation for [`SessionInput`].
//!
//! Label fields are closed enums and are checked by deserialization; this
//! module covers the numeric scores, which the compiler would otherwise
//! render as `unknown`.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::session::SessionInput;

/// Valid range for every intensity, engagement, interaction, and
/// effectiveness score.
pub const SCORE_RANGE: RangeInclusive<i32> = 1..=10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{field}: score {value} is outside range [1, 10]")]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `mood.intensity`.
    pub field: String,
    pub value: i32,
}

impl SessionInput {
    /// Report every score that falls outside [`SCORE_RANGE`].
    ///
    /// Conditional scores are only checked when they are meaningful: the
    /// secondary intensity when a secondary mood is set, engagement when the
    /// activity was attended, effectiveness when an incident occurred.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut check = |field: String, value: i32| {
            if !SCORE_RANGE.contains(&value) {
                errors.push(ValidationError { field, value });
            }
        };

        check("mood.intensity".to_string(), self.mood.intensity);
        if self.mood.has_secondary {
            check(
                "mood.secondaryIntensity".to_string(),
                self.mood.secondary_intensity,
            );
        }
        for (name, participation) in &self.activities {
            if participation.participated {
                check(
                    format!("activities.{name}.engagement"),
                    participation.engagement,
                );
            }
        }
        check(
            "social.overallInteraction".to_string(),
            self.social.overall_interaction,
        );
        if self.incidents.occurred {
            check(
                "incidents.effectiveness".to_string(),
                self.incidents.effectiveness,
            );
        }

        errors
    }

    /// Fail with the first validation error, if any.
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        match self.validate().into_iter().next() {
            Some(err) => Err(CoreError::Validation(err)),
            None => Ok(()),
        }
    }
}
