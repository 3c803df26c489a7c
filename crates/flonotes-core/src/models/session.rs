use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::labels::{ActivityName, MoodLabel, PeerInteraction, StaffInteraction};

/// Score every slider starts at when the demo form is reset.
pub const DEFAULT_SCORE: i32 = 5;

/// The structured description of one clinical session, as collected by the
/// demo form. Immutable input to the prompt compiler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionInput {
    pub mood: Mood,
    pub behaviors: Behaviors,
    pub activities: BTreeMap<ActivityName, Participation>,
    pub social: Social,
    pub health: Health,
    pub incidents: Incidents,
    #[serde(default)]
    pub additional_notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Mood {
    pub primary: MoodLabel,
    pub intensity: i32,
    #[serde(default)]
    pub has_secondary: bool,
    /// Only sent when `has_secondary` is set; falls back to the reset state.
    #[serde(default = "default_secondary_mood")]
    pub secondary: MoodLabel,
    #[serde(default = "default_score")]
    pub secondary_intensity: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Behaviors {
    pub cooperative: bool,
    pub following_rules: bool,
    pub respectful: bool,
    pub disruptive: bool,
    pub withdrawn: bool,
    pub aggressive: bool,
    pub impulsive: bool,
    pub other: bool,
    pub other_description: String,
}

/// Whether the client took part in an activity, and how engaged they were.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Participation {
    pub participated: bool,
    pub engagement: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Social {
    pub peer: PeerInteraction,
    pub staff: StaffInteraction,
    pub overall_interaction: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Health {
    pub medications_taken: bool,
    pub sleep_issues: bool,
    pub appetite_issues: bool,
    pub physical_complaints: bool,
    pub hygiene_issues: bool,
    pub safety_concerns: bool,
    pub health_description: String,
}

impl Health {
    /// Whether any concern is flagged. The description alone does not count.
    pub fn any_flagged(&self) -> bool {
        self.medications_taken
            || self.sleep_issues
            || self.appetite_issues
            || self.physical_complaints
            || self.hygiene_issues
            || self.safety_concerns
    }
}

/// Everything but `occurred` may be left out when no incident occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Incidents {
    pub occurred: bool,
    pub description: String,
    pub coping_skills_used: CopingSkills,
    pub other_coping_skill_description: String,
    pub effectiveness: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CopingSkills {
    pub deep_breathing: bool,
    pub mindfulness: bool,
    pub distraction: bool,
    pub journaling: bool,
    pub physical_activity: bool,
    pub talking_to_staff: bool,
    pub other: bool,
}

impl Default for SessionInput {
    /// The demo form's reset state.
    fn default() -> Self {
        Self {
            mood: Mood::default(),
            behaviors: Behaviors::default(),
            activities: ActivityName::ALL
                .into_iter()
                .map(|name| (name, Participation::default()))
                .collect(),
            social: Social::default(),
            health: Health::default(),
            incidents: Incidents::default(),
            additional_notes: String::new(),
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self {
            primary: MoodLabel::Stable,
            intensity: DEFAULT_SCORE,
            has_secondary: false,
            secondary: default_secondary_mood(),
            secondary_intensity: DEFAULT_SCORE,
        }
    }
}

impl Default for Participation {
    fn default() -> Self {
        Self {
            participated: false,
            engagement: DEFAULT_SCORE,
        }
    }
}

impl Default for Social {
    fn default() -> Self {
        Self {
            peer: PeerInteraction::Appropriate,
            staff: StaffInteraction::Appropriate,
            overall_interaction: DEFAULT_SCORE,
        }
    }
}

impl Default for Incidents {
    fn default() -> Self {
        Self {
            occurred: false,
            description: String::new(),
            coping_skills_used: CopingSkills::default(),
            other_coping_skill_description: String::new(),
            effectiveness: DEFAULT_SCORE,
        }
    }
}

fn default_secondary_mood() -> MoodLabel {
    MoodLabel::Anxious
}

fn default_score() -> i32 {
    DEFAULT_SCORE
}
