//! Ordered catalogs of the boolean flags in each flag group.
//!
//! The order of each catalog is the order flags are listed in the compiled
//! prompt. The free-text `other` flags are not part of any catalog; they
//! carry a description and are rendered separately.

use std::sync::LazyLock;

use flonotes_core::models::session::{Behaviors, CopingSkills, Health};

/// One named boolean flag within a group of type `T`.
pub struct Flag<T> {
    /// camelCase key as it appears on the wire, e.g. `followingRules`.
    pub key: &'static str,
    /// Text used for the flag in the prompt.
    pub label: String,
    is_set: fn(&T) -> bool,
}

impl<T> Flag<T> {
    /// A flag labelled by splitting its key into words.
    fn split(key: &'static str, is_set: fn(&T) -> bool) -> Self {
        Self {
            key,
            label: split_camel_case(key),
            is_set,
        }
    }

    fn labelled(key: &'static str, label: &str, is_set: fn(&T) -> bool) -> Self {
        Self {
            key,
            label: label.to_string(),
            is_set,
        }
    }

    pub fn is_set(&self, group: &T) -> bool {
        (self.is_set)(group)
    }
}

/// Labels of every set flag in `catalog`, in catalog order.
pub fn set_labels<'a, T>(catalog: &'a [Flag<T>], group: &T) -> Vec<&'a str> {
    catalog
        .iter()
        .filter(|flag| flag.is_set(group))
        .map(|flag| flag.label.as_str())
        .collect()
}

/// Insert a space before every ASCII uppercase letter.
///
/// `followingRules` becomes `following Rules`. Case is preserved and no
/// other normalization happens.
pub fn split_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

pub fn behavior_flags() -> &'static [Flag<Behaviors>] {
    static FLAGS: LazyLock<Vec<Flag<Behaviors>>> = LazyLock::new(|| {
        vec![
            Flag::split("cooperative", |b: &Behaviors| b.cooperative),
            Flag::split("followingRules", |b: &Behaviors| b.following_rules),
            Flag::split("respectful", |b: &Behaviors| b.respectful),
            Flag::split("disruptive", |b: &Behaviors| b.disruptive),
            Flag::split("withdrawn", |b: &Behaviors| b.withdrawn),
            Flag::split("aggressive", |b: &Behaviors| b.aggressive),
            Flag::split("impulsive", |b: &Behaviors| b.impulsive),
        ]
    });
    &FLAGS
}

pub fn health_flags() -> &'static [Flag<Health>] {
    static FLAGS: LazyLock<Vec<Flag<Health>>> = LazyLock::new(|| {
        vec![
            Flag::labelled("medicationsTaken", "medications taken", |h: &Health| h.medications_taken),
            Flag::labelled("sleepIssues", "sleep issues", |h: &Health| h.sleep_issues),
            Flag::labelled("appetiteIssues", "appetite issues", |h: &Health| h.appetite_issues),
            Flag::labelled("physicalComplaints", "physical complaints", |h: &Health| {
                h.physical_complaints
            }),
            Flag::labelled("hygieneIssues", "hygiene issues", |h: &Health| h.hygiene_issues),
            Flag::labelled("safetyConcerns", "safety concerns", |h: &Health| h.safety_concerns),
        ]
    });
    &FLAGS
}

pub fn coping_skill_flags() -> &'static [Flag<CopingSkills>] {
    static FLAGS: LazyLock<Vec<Flag<CopingSkills>>> = LazyLock::new(|| {
        vec![
            Flag::split("deepBreathing", |c: &CopingSkills| c.deep_breathing),
            Flag::split("mindfulness", |c: &CopingSkills| c.mindfulness),
            Flag::split("distraction", |c: &CopingSkills| c.distraction),
            Flag::split("journaling", |c: &CopingSkills| c.journaling),
            Flag::split("physicalActivity", |c: &CopingSkills| c.physical_activity),
            Flag::split("talkingToStaff", |c: &CopingSkills| c.talking_to_staff),
        ]
    });
    &FLAGS
}
