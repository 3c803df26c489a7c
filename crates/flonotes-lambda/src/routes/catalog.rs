use axum::Json;
use serde::Serialize;

use flonotes_core::models::labels::{ActivityName, MoodLabel, PeerInteraction, StaffInteraction};
use flonotes_prompt::flags::{behavior_flags, coping_skill_flags, health_flags, Flag};

#[derive(Serialize)]
pub struct FlagSummary {
    key: &'static str,
    label: String,
}

/// Everything the demo form needs to render its controls.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    moods: Vec<&'static str>,
    peer_interactions: Vec<&'static str>,
    staff_interactions: Vec<&'static str>,
    activities: Vec<&'static str>,
    behaviors: Vec<FlagSummary>,
    health: Vec<FlagSummary>,
    coping_skills: Vec<FlagSummary>,
}

fn summarize<T>(catalog: &[Flag<T>]) -> Vec<FlagSummary> {
    catalog
        .iter()
        .map(|f| FlagSummary {
            key: f.key,
            label: f.label.clone(),
        })
        .collect()
}

pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        moods: MoodLabel::ALL.iter().map(|m| m.label()).collect(),
        peer_interactions: PeerInteraction::ALL.iter().map(|p| p.label()).collect(),
        staff_interactions: StaffInteraction::ALL.iter().map(|s| s.label()).collect(),
        activities: ActivityName::ALL.iter().map(|a| a.label()).collect(),
        behaviors: summarize(behavior_flags()),
        health: summarize(health_flags()),
        coping_skills: summarize(coping_skill_flags()),
    })
}
