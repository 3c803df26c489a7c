//! Prompt assembly.
//!
//! Sections are emitted in a fixed order and joined by a blank line. Mood,
//! social interactions, and the framing text around them are always
//! present; the rest only appear when there is something to report.

use crate::annotate::{AnnotatedIncidents, AnnotatedMood, AnnotatedSession, AnnotatedSocial};
use crate::flags::{behavior_flags, coping_skill_flags, health_flags, set_labels};

pub const PREAMBLE: &str = "The following information was collected from a mental health session:";

pub const CLOSING_INSTRUCTION: &str = "\
Please synthesize the above information into a single, cohesive paragraph \
approximately 150-200 words. Focus on the most clinically significant \
observations and conclude with one key clinical insight or recommendation. \
Avoid using numerical scores; instead, use qualitative descriptors to \
describe intensity and engagement levels.";

const SECTION_SEPARATOR: &str = "\n\n";

/// Build the prompt for an annotated session.
pub fn compile(session: &AnnotatedSession) -> String {
    let mut sections = vec![PREAMBLE.to_string(), mood_section(&session.mood)];
    sections.extend(behaviors_section(session));
    sections.extend(activities_section(session));
    sections.push(social_section(&session.social));
    sections.extend(health_section(session));
    sections.extend(incident_section(&session.incidents));
    if !is_blank(&session.additional_notes) {
        sections.push(format!("Additional Notes: {}", session.additional_notes));
    }
    sections.push(CLOSING_INSTRUCTION.to_string());

    sections.join(SECTION_SEPARATOR)
}

fn mood_section(annotated: &AnnotatedMood) -> String {
    let mood = &annotated.mood;
    let mut section = format!(
        "Mood: {} (Intensity: {}).",
        mood.primary, annotated.intensity_descriptor
    );
    if let Some(secondary) = annotated.secondary_intensity_descriptor {
        section.push_str(&format!(
            " Also noted: {} (Intensity: {secondary}).",
            mood.secondary
        ));
    }
    section
}

fn behaviors_section(session: &AnnotatedSession) -> Option<String> {
    let behaviors = &session.behaviors;
    let observed = set_labels(behavior_flags(), behaviors);
    let detail = (behaviors.other && !is_blank(&behaviors.other_description))
        .then_some(behaviors.other_description.as_str());

    if observed.is_empty() && detail.is_none() {
        return None;
    }

    let mut section = String::from("Observed Behaviors:");
    if !observed.is_empty() {
        section.push_str(&format!(" {}.", observed.join(", ")));
    }
    if let Some(detail) = detail {
        section.push_str(&format!(" Additional detail: {detail}."));
    }
    Some(section)
}

fn activities_section(session: &AnnotatedSession) -> Option<String> {
    // BTreeMap iteration follows the activity catalog order.
    let attended: Vec<String> = session
        .activities
        .iter()
        .filter(|(_, a)| a.participation.participated)
        .map(|(name, a)| format!("{name} ({})", a.engagement_descriptor))
        .collect();

    if attended.is_empty() {
        return None;
    }
    Some(format!("Activities & Engagement: {}.", attended.join("; ")))
}

fn social_section(annotated: &AnnotatedSocial) -> String {
    format!(
        "Social Interactions: Peer - {}, Staff - {}, Overall Interaction Level - {}.",
        annotated.social.peer, annotated.social.staff, annotated.overall_interaction_descriptor
    )
}

fn health_section(session: &AnnotatedSession) -> Option<String> {
    let health = &session.health;
    if !health.any_flagged() {
        return None;
    }

    let concerns = set_labels(health_flags(), health);

    let mut section = format!("Health & Safety Concerns: {}.", concerns.join(", "));
    if !is_blank(&health.health_description) {
        section.push_str(&format!(" Details: {}.", health.health_description));
    }
    Some(section)
}

fn incident_section(annotated: &AnnotatedIncidents) -> Option<String> {
    let incidents = &annotated.incidents;
    if !incidents.occurred {
        return None;
    }

    let skills = &incidents.coping_skills_used;
    let mut used = set_labels(coping_skill_flags(), skills).join(", ");
    if skills.other && !is_blank(&incidents.other_coping_skill_description) {
        if !used.is_empty() {
            used.push_str(", ");
        }
        used.push_str("Other: ");
        used.push_str(&incidents.other_coping_skill_description);
    }
    // No named skill and no "other" description: say so instead of leaving the list empty.
    if used.is_empty() {
        used.push_str("none");
    }

    Some(format!(
        "Incident: {}. Coping Skills Used: {used}. Effectiveness: {}.",
        incidents.description, annotated.effectiveness_descriptor
    ))
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
