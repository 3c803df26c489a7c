use std::collections::BTreeMap;

use flonotes_core::models::labels::ActivityName;
use flonotes_core::models::session::{
    Behaviors, Health, Incidents, Mood, Participation, SessionInput, Social,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::descriptor::{score_to_descriptor, Descriptor};

/// A [`SessionInput`] with a qualitative descriptor alongside every score.
///
/// The input field groups are carried unchanged; descriptors are added
/// next to them and serialize flattened into the same objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnnotatedSession {
    pub mood: AnnotatedMood,
    pub behaviors: Behaviors,
    pub activities: BTreeMap<ActivityName, AnnotatedParticipation>,
    pub social: AnnotatedSocial,
    pub health: Health,
    pub incidents: AnnotatedIncidents,
    pub additional_notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnnotatedMood {
    #[serde(flatten)]
    pub mood: Mood,
    pub intensity_descriptor: Descriptor,
    /// `None` unless a secondary mood was recorded.
    pub secondary_intensity_descriptor: Option<Descriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnnotatedParticipation {
    #[serde(flatten)]
    pub participation: Participation,
    pub engagement_descriptor: Descriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnnotatedSocial {
    #[serde(flatten)]
    pub social: Social,
    pub overall_interaction_descriptor: Descriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnnotatedIncidents {
    #[serde(flatten)]
    pub incidents: Incidents,
    pub effectiveness_descriptor: Descriptor,
}

/// Derive descriptors for every score in `input`, leaving it untouched.
pub fn annotate(input: &SessionInput) -> AnnotatedSession {
    let mood = &input.mood;

    AnnotatedSession {
        mood: AnnotatedMood {
            mood: mood.clone(),
            intensity_descriptor: score_to_descriptor(mood.intensity),
            secondary_intensity_descriptor: mood
                .has_secondary
                .then(|| score_to_descriptor(mood.secondary_intensity)),
        },
        behaviors: input.behaviors.clone(),
        activities: input
            .activities
            .iter()
            .map(|(name, participation)| {
                (
                    *name,
                    AnnotatedParticipation {
                        participation: *participation,
                        engagement_descriptor: score_to_descriptor(participation.engagement),
                    },
                )
            })
            .collect(),
        social: AnnotatedSocial {
            social: input.social.clone(),
            overall_interaction_descriptor: score_to_descriptor(
                input.social.overall_interaction,
            ),
        },
        health: input.health.clone(),
        incidents: AnnotatedIncidents {
            incidents: input.incidents.clone(),
            effectiveness_descriptor: score_to_descriptor(input.incidents.effectiveness),
        },
        additional_notes: input.additional_notes.clone(),
    }
}
