//! Closed label sets offered by the demo form's select controls.
//!
//! Each enum serializes as its display label (e.g. `"Boundaries Issues"`),
//! so an unknown label is rejected when the session input is deserialized.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MoodLabel {
    Stable,
    Depressed,
    Anxious,
    Irritable,
    Withdrawn,
    Agitated,
    Happy,
    Sad,
    Joyful,
    Content,
    Optimistic,
    Energetic,
    Grateful,
}

impl MoodLabel {
    pub const ALL: [MoodLabel; 13] = [
        MoodLabel::Stable,
        MoodLabel::Depressed,
        MoodLabel::Anxious,
        MoodLabel::Irritable,
        MoodLabel::Withdrawn,
        MoodLabel::Agitated,
        MoodLabel::Happy,
        MoodLabel::Sad,
        MoodLabel::Joyful,
        MoodLabel::Content,
        MoodLabel::Optimistic,
        MoodLabel::Energetic,
        MoodLabel::Grateful,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MoodLabel::Stable => "Stable",
            MoodLabel::Depressed => "Depressed",
            MoodLabel::Anxious => "Anxious",
            MoodLabel::Irritable => "Irritable",
            MoodLabel::Withdrawn => "Withdrawn",
            MoodLabel::Agitated => "Agitated",
            MoodLabel::Happy => "Happy",
            MoodLabel::Sad => "Sad",
            MoodLabel::Joyful => "Joyful",
            MoodLabel::Content => "Content",
            MoodLabel::Optimistic => "Optimistic",
            MoodLabel::Energetic => "Energetic",
            MoodLabel::Grateful => "Grateful",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the client related to peers during the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PeerInteraction {
    Appropriate,
    Inappropriate,
    Mixed,
    Isolated,
    #[serde(rename = "Boundaries Issues")]
    BoundariesIssues,
    #[serde(rename = "No Peer Contact")]
    NoPeerContact,
}

impl PeerInteraction {
    pub const ALL: [PeerInteraction; 6] = [
        PeerInteraction::Appropriate,
        PeerInteraction::Inappropriate,
        PeerInteraction::Mixed,
        PeerInteraction::Isolated,
        PeerInteraction::BoundariesIssues,
        PeerInteraction::NoPeerContact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PeerInteraction::Appropriate => "Appropriate",
            PeerInteraction::Inappropriate => "Inappropriate",
            PeerInteraction::Mixed => "Mixed",
            PeerInteraction::Isolated => "Isolated",
            PeerInteraction::BoundariesIssues => "Boundaries Issues",
            PeerInteraction::NoPeerContact => "No Peer Contact",
        }
    }
}

impl fmt::Display for PeerInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the client related to staff during the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StaffInteraction {
    Appropriate,
    Inappropriate,
    Mixed,
    Avoidant,
    Oppositional,
    Seeking,
}

impl StaffInteraction {
    pub const ALL: [StaffInteraction; 6] = [
        StaffInteraction::Appropriate,
        StaffInteraction::Inappropriate,
        StaffInteraction::Mixed,
        StaffInteraction::Avoidant,
        StaffInteraction::Oppositional,
        StaffInteraction::Seeking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StaffInteraction::Appropriate => "Appropriate",
            StaffInteraction::Inappropriate => "Inappropriate",
            StaffInteraction::Mixed => "Mixed",
            StaffInteraction::Avoidant => "Avoidant",
            StaffInteraction::Oppositional => "Oppositional",
            StaffInteraction::Seeking => "Seeking",
        }
    }
}

impl fmt::Display for StaffInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed activity catalog. Variant order is the order activities appear in
/// the compiled prompt, so `Ord` is derived from declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum ActivityName {
    #[serde(rename = "Group Therapy")]
    GroupTherapy,
    #[serde(rename = "Individual Therapy")]
    IndividualTherapy,
    #[serde(rename = "Recreational Activities")]
    RecreationalActivities,
    #[serde(rename = "Skill Building Groups")]
    SkillBuildingGroups,
}

impl ActivityName {
    pub const ALL: [ActivityName; 4] = [
        ActivityName::GroupTherapy,
        ActivityName::IndividualTherapy,
        ActivityName::RecreationalActivities,
        ActivityName::SkillBuildingGroups,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityName::GroupTherapy => "Group Therapy",
            ActivityName::IndividualTherapy => "Individual Therapy",
            ActivityName::RecreationalActivities => "Recreational Activities",
            ActivityName::SkillBuildingGroups => "Skill Building Groups",
        }
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
