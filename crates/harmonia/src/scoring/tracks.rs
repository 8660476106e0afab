//! Base scores of the four relationship tracks, 0–100.

use crate::aspects::{compare, mirrored, AspectMode};
use crate::chart::{ChartProfile, Point};
use crate::relations::ElementRelation;
use crate::result::TrackScores;
use crate::scoring::accumulator::WeightedScore;

pub const LOW_CAPACITY: f64 = 40.0;
pub const VERY_LOW_CAPACITY: f64 = 30.0;
pub const BOTH_LOW_FACTOR: f64 = 0.70;
pub const ONE_VERY_LOW_FACTOR: f64 = 0.85;

/// Full credit when the relation fits the track, else its base compatibility.
fn elemental_term(relation: ElementRelation, fits: bool) -> f64 {
    if fits {
        1.0
    } else {
        relation.base_compatibility()
    }
}

/// Multiplier on the soul track from the two emotional capacities.
pub fn capacity_guard(a: Option<f64>, b: Option<f64>) -> f64 {
    if let (Some(x), Some(y)) = (a, b) {
        if x < LOW_CAPACITY && y < LOW_CAPACITY {
            return BOTH_LOW_FACTOR;
        }
    }
    if [a, b].iter().flatten().any(|c| *c < VERY_LOW_CAPACITY) {
        ONE_VERY_LOW_FACTOR
    } else {
        1.0
    }
}

pub fn sociable_track(a: &ChartProfile, b: &ChartProfile, relation: ElementRelation) -> f64 {
    let mut score = WeightedScore::new();
    score.add_opt("mind", compare(a, Point::Mercury, b, Point::Mercury, AspectMode::Harmony), 0.35);
    score.add_opt("goodwill", mirrored(a, Point::Sun, b, Point::Jupiter, AspectMode::Harmony), 0.35);
    score.add(
        "element",
        elemental_term(relation, relation.is_generating() || relation == ElementRelation::Parallel),
        0.30,
    );
    score.value()
}

pub fn passionate_track(a: &ChartProfile, b: &ChartProfile, relation: ElementRelation) -> f64 {
    let mut score = WeightedScore::new();
    score.add_opt("drive_allure", mirrored(a, Point::Mars, b, Point::Venus, AspectMode::Tension), 0.40);
    score.add_opt("drive_clash", compare(a, Point::Mars, b, Point::Mars, AspectMode::Tension), 0.25);
    score.add_opt("obsession", mirrored(a, Point::Pluto, b, Point::Venus, AspectMode::Tension), 0.15);
    score.add("element", elemental_term(relation, relation.is_restricting()), 0.20);
    score.value()
}

pub fn partner_track(a: &ChartProfile, b: &ChartProfile, relation: ElementRelation) -> f64 {
    let mut score = WeightedScore::new();
    let moon = compare(a, Point::Moon, b, Point::Moon, AspectMode::Harmony);
    let sun_moon = mirrored(a, Point::Sun, b, Point::Moon, AspectMode::Harmony);

    if a.has_point(Point::Juno) && b.has_point(Point::Juno) {
        score.add_opt("emotional_accord", moon, 0.35);
        score.add_opt("identity_emotion", sun_moon, 0.35);
        score.add_opt("commitment", mirrored(a, Point::Juno, b, Point::Sun, AspectMode::Harmony), 0.30);
    } else {
        score.add_opt("emotional_accord", moon, 0.55);
        score.add_opt("identity_emotion", sun_moon, 0.45);
    }
    score.add("element", elemental_term(relation, relation.is_generating()), 0.20);

    if a.has_point(Point::Saturn) && b.has_point(Point::Saturn) {
        score.add_opt("stability_anchor", mirrored(a, Point::Saturn, b, Point::Moon, AspectMode::Harmony), 0.15);
    }
    score.value()
}

pub fn soul_track(a: &ChartProfile, b: &ChartProfile, relation: ElementRelation) -> f64 {
    let mut score = WeightedScore::new();
    score.add_opt("dream", mirrored(a, Point::Moon, b, Point::Neptune, AspectMode::Harmony), 0.35);
    score.add_opt("depth_charge", mirrored(a, Point::Pluto, b, Point::Moon, AspectMode::Tension), 0.30);
    score.add_opt("allure_accord", compare(a, Point::Venus, b, Point::Venus, AspectMode::Harmony), 0.15);
    score.add(
        "element",
        elemental_term(relation, relation.is_generating() || relation == ElementRelation::Parallel),
        0.20,
    );
    score.value() * capacity_guard(a.emotional_capacity, b.emotional_capacity)
}

/// All four tracks before modifiers, on the 0–100 scale.
pub fn base_tracks(a: &ChartProfile, b: &ChartProfile, relation: ElementRelation) -> TrackScores {
    TrackScores {
        sociable: sociable_track(a, b, relation) * 100.0,
        passionate: passionate_track(a, b, relation) * 100.0,
        partner: partner_track(a, b, relation) * 100.0,
        soul: soul_track(a, b, relation) * 100.0,
    }
}
