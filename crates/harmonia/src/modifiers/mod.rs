//! Additive modifier modules layered on top of the base axis and track scores.
//!
//! Each module is a pure function of the two profiles. Deltas are in axis
//! points (0–100 scale) and are capped per module before they are returned.

pub mod attachment;
pub mod reception;
pub mod resonance;
pub mod shadow;

use std::collections::BTreeSet;

pub use attachment::{attachment_dynamics, effective_style, AttachmentOutcome};
pub use reception::{mutual_receptions, Reception};
pub use resonance::{favorable_resonance, Resonance};
pub use shadow::{shadow_and_wound, ShadowOutcome};

/// Named deltas produced by one module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifierBundle {
    pub physical: f64,
    pub depth: f64,
    /// Delta to the module's target track.
    pub track: f64,
    pub high_intensity: bool,
    pub tags: BTreeSet<String>,
}

impl ModifierBundle {
    pub fn tag(&mut self, tag: &str) {
        self.tags.insert(tag.to_string());
    }

    /// Clamp every delta to `±cap` of its field.
    pub fn capped(mut self, physical: f64, depth: f64, track: f64) -> Self {
        self.physical = self.physical.clamp(-physical, physical);
        self.depth = self.depth.clamp(-depth, depth);
        self.track = self.track.clamp(-track, track);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.physical == 0.0 && self.depth == 0.0 && self.track == 0.0 && self.tags.is_empty()
    }
}

/// Higher-level psychological triggers implied by module tags.
const TAG_TRIGGERS: &[(&str, &str)] = &[
    ("wound_trigger", "abandonment_echo"),
    ("reassurance_spiral", "abandonment_echo"),
    ("anxious_avoidant_trap", "pursuit_withdrawal_loop"),
    ("shadow_projection", "projection_mirror"),
    ("mutual_shadow", "projection_mirror"),
    ("wounded_healer", "rescuer_pull"),
    ("storm_cycle", "volatility_loop"),
];

pub fn derive_triggers(tags: &BTreeSet<String>) -> BTreeSet<String> {
    TAG_TRIGGERS
        .iter()
        .filter(|(tag, _)| tags.contains(*tag))
        .map(|(_, trigger)| trigger.to_string())
        .collect()
}
