//! Aggregation of every module into one [`MatchResult`].
//!
//! Pure and stateless: the same two profiles (and palace sub-result) always
//! produce the same result.

use crate::aspects::karmic_triggers;
use crate::chart::ChartProfile;
use crate::modifiers::{
    attachment_dynamics, derive_triggers, favorable_resonance, mutual_receptions, shadow,
    shadow_and_wound, ModifierBundle,
};
use crate::palace::{applicable, fetch_palace, PalaceSynastry, PalaceSynastrySource};
use crate::relations::{branch_relation, element_relation, seasonal_complement, BranchRelation};
use crate::result::{
    clamp_score, Axis, AxisBreakdown, MatchResult, Quadrant, Spiciness, Track, TrackScores,
};
use crate::scoring::{
    base_tracks, depth_axis, diminish, marginal, physical_axis, power_frame, AxisContext,
    FrameSignals,
};
use std::collections::BTreeSet;

/// Share of the partner-track headroom a perfect seasonal complement grants.
pub const SEASONAL_BONUS: f64 = 0.10;
/// Extra pull on karmic tension when a shadow contact is high intensity.
pub const HIGH_INTENSITY_TENSION: f64 = 0.25;
/// Karmic activations needed for the `karmic_bond` badge.
pub const KARMIC_BOND_ACTIVATIONS: usize = 3;

const HEAT_PHYSICAL_WEIGHT: f64 = 0.6;
const HEAT_TENSION_WEIGHT: f64 = 0.4;

const TRACKS: [Track; 4] = [Track::Sociable, Track::Passionate, Track::Partner, Track::Soul];

/// Score a pair without twelve-palace data.
pub fn compute_match(a: &ChartProfile, b: &ChartProfile) -> MatchResult {
    compute_match_with_palace(a, b, None)
}

/// Score a pair, asking `source` for twelve-palace synastry. Failures of the
/// source are logged and treated as absent data.
pub fn compute_match_with_source<S: PalaceSynastrySource + ?Sized>(
    a: &ChartProfile,
    b: &ChartProfile,
    source: &S,
) -> MatchResult {
    let palace = fetch_palace(source, a, b);
    compute_match_with_palace(a, b, palace)
}

/// Fated chart friction, derived from the shadow deltas only.
pub fn karmic_tension(bundle: &ModifierBundle) -> f64 {
    let scale = shadow::CAP_PHYSICAL + shadow::CAP_DEPTH + shadow::CAP_TRACK;
    let raw = ((bundle.physical.abs() + bundle.depth.abs() + bundle.track.abs()) / scale).clamp(0.0, 1.0);
    let tension = if bundle.high_intensity {
        diminish(raw, HIGH_INTENSITY_TENSION)
    } else {
        raw
    };
    tension * 100.0
}

/// Intensity category from physical pull and tension, before floors.
pub fn spiciness_for(physical: f64, karmic_tension: f64) -> Spiciness {
    let heat = HEAT_PHYSICAL_WEIGHT * physical + HEAT_TENSION_WEIGHT * karmic_tension;
    if heat < 45.0 {
        Spiciness::Mild
    } else if heat < 65.0 {
        Spiciness::Warm
    } else if heat < 80.0 {
        Spiciness::Spicy
    } else {
        Spiciness::Scorching
    }
}

/// Closing clamp. Large corrections point at a modifier that ignored its cap.
fn close(label: &str, value: f64) -> f64 {
    let clamped = clamp_score(value);
    if (clamped - value).abs() > 1e-9 {
        log::debug!("{} clamped from {:.4} to {:.4}", label, value, clamped);
    }
    clamped
}

pub fn compute_match_with_palace(
    a: &ChartProfile,
    b: &ChartProfile,
    palace: Option<PalaceSynastry>,
) -> MatchResult {
    let palace = applicable(palace.as_ref(), a, b).cloned();

    let element = element_relation(a.dominant_element, b.dominant_element);
    let branch = branch_relation(a.day_branch, b.day_branch);
    let seasonal = seasonal_complement(a.month_branch, b.month_branch);

    let shadow = shadow_and_wound(a, b);
    let attachment = attachment_dynamics(a, b);
    let karmic = karmic_triggers(a, b);

    let power = power_frame(
        a,
        b,
        &FrameSignals {
            wound_a: shadow.wound_a,
            wound_b: shadow.wound_b,
            element_relation: element,
            palace_offset: palace.as_ref().map(|p| p.power_offset).unwrap_or(0.0),
        },
    );

    let ctx = AxisContext {
        karmic: &karmic,
        power: &power,
        element_relation: element,
        attachment: &attachment,
    };
    let physical_score = physical_axis(a, b, &ctx);
    let depth_score = depth_axis(a, b, &ctx);

    let mut physical = clamp_score(
        physical_score.value * 100.0 + shadow.bundle.physical + attachment.bundle.physical,
    );
    let mut depth = clamp_score(depth_score.value * 100.0 + shadow.bundle.depth + attachment.bundle.depth);

    let mut badges = BTreeSet::new();
    if let Some(resonance) = favorable_resonance(a, b) {
        depth = resonance.apply(depth);
        badges.insert(resonance.badge.to_string());
    }
    for reception in mutual_receptions(a, b) {
        match reception.axis {
            Axis::Physical => physical = reception.apply(physical),
            Axis::Depth => depth = reception.apply(depth),
        }
        badges.insert(reception.badge);
    }
    if karmic.activations >= KARMIC_BOND_ACTIVATIONS {
        badges.insert("karmic_bond".to_string());
    }

    let mut tracks = base_tracks(a, b, element);
    tracks.soul += shadow.bundle.track;
    tracks.partner += attachment.bundle.track;
    if a.month_branch.is_some() && b.month_branch.is_some() {
        tracks.partner = marginal(tracks.partner, SEASONAL_BONUS * seasonal);
    }
    let mut tracks = tracks.clamped();

    let branch_mod = branch.track_modifier();
    for track in TRACKS {
        let palace_mult = palace.as_ref().map(|p| p.multipliers.get(track)).unwrap_or(1.0);
        *tracks.get_mut(track) *= branch_mod.get(track) * palace_mult;
    }
    let tracks = TrackScores {
        sociable: close("sociable", tracks.sociable),
        passionate: close("passionate", tracks.passionate),
        partner: close("partner", tracks.partner),
        soul: close("soul", tracks.soul),
    };

    let physical = close("physical", physical);
    let depth = close("depth", depth);
    let karmic_tension = close("karmic_tension", karmic_tension(&shadow.bundle));

    let mut tags: BTreeSet<String> = shadow.bundle.tags.clone();
    tags.extend(attachment.bundle.tags.iter().cloned());
    let mut triggers = derive_triggers(&tags);
    if let Some(p) = palace.as_ref() {
        triggers.extend(p.stress_a.iter().cloned());
        triggers.extend(p.stress_b.iter().cloned());
    }

    let mut spiciness = spiciness_for(physical, karmic_tension);
    if let Some(p) = palace.as_ref() {
        spiciness = spiciness.max(p.intensity);
    }
    if branch == BranchRelation::Punishment {
        spiciness = spiciness.max(Spiciness::Spicy);
    }

    log::debug!(
        "match: physical={:.1} depth={:.1} tension={:.1} element={:?} branch={:?} palace={}",
        physical,
        depth,
        karmic_tension,
        element,
        branch,
        palace.is_some()
    );

    MatchResult {
        physical,
        depth,
        power,
        primary_track: tracks.primary(),
        quadrant: Quadrant::from_axes(physical, depth),
        tracks,
        karmic_tension,
        badges,
        tags,
        triggers,
        element_relation: element,
        branch_relation: branch,
        seasonal_complement: seasonal.clamp(0.0, 1.0),
        palace,
        spiciness,
        breakdown: AxisBreakdown {
            physical: physical_score.terms,
            depth: depth_score.terms,
        },
    }
}
