//! Output types of a match computation.

use crate::palace::PalaceSynastry;
use crate::relations::{BranchRelation, ElementRelation};
use crate::scoring::ScoreTerm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Physical,
    Depth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Sociable,
    Passionate,
    Partner,
    Soul,
}

/// The four track scores, each 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackScores {
    pub sociable: f64,
    pub passionate: f64,
    pub partner: f64,
    pub soul: f64,
}

impl TrackScores {
    pub fn get(&self, track: Track) -> f64 {
        match track {
            Track::Sociable => self.sociable,
            Track::Passionate => self.passionate,
            Track::Partner => self.partner,
            Track::Soul => self.soul,
        }
    }

    pub fn get_mut(&mut self, track: Track) -> &mut f64 {
        match track {
            Track::Sociable => &mut self.sociable,
            Track::Passionate => &mut self.passionate,
            Track::Partner => &mut self.partner,
            Track::Soul => &mut self.soul,
        }
    }

    /// Highest track; ties go to soul, then partner, passionate, sociable.
    pub fn primary(&self) -> Track {
        let order = [Track::Soul, Track::Partner, Track::Passionate, Track::Sociable];
        let mut best = order[0];
        for track in order.iter().skip(1) {
            if self.get(*track) > self.get(best) {
                best = *track;
            }
        }
        best
    }

    pub fn clamped(self) -> Self {
        Self {
            sociable: clamp_score(self.sociable),
            passionate: clamp_score(self.passionate),
            partner: clamp_score(self.partner),
            soul: clamp_score(self.soul),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Strong physical pull and strong depth.
    Soulmate,
    /// Physical pull without depth.
    Flame,
    /// Depth without physical pull.
    Companion,
    Acquaintance,
}

pub const QUADRANT_THRESHOLD: f64 = 50.0;

impl Quadrant {
    pub fn from_axes(physical: f64, depth: f64) -> Self {
        match (physical >= QUADRANT_THRESHOLD, depth >= QUADRANT_THRESHOLD) {
            (true, true) => Quadrant::Soulmate,
            (true, false) => Quadrant::Flame,
            (false, true) => Quadrant::Companion,
            (false, false) => Quadrant::Acquaintance,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spiciness {
    Mild,
    Warm,
    Spicy,
    Scorching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerRole {
    Dominant,
    Submissive,
    Equal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerFrame {
    /// Frame of A minus frame of B, −100..=100.
    pub differential: f64,
    pub frame_broke: bool,
    pub role_a: PowerRole,
    pub role_b: PowerRole,
}

/// Term-level contributions to the two axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisBreakdown {
    pub physical: Vec<ScoreTerm>,
    pub depth: Vec<ScoreTerm>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub physical: f64,
    pub depth: f64,
    pub power: PowerFrame,
    pub tracks: TrackScores,
    pub primary_track: Track,
    pub quadrant: Quadrant,
    pub karmic_tension: f64,
    pub badges: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub triggers: BTreeSet<String>,
    pub element_relation: ElementRelation,
    pub branch_relation: BranchRelation,
    pub seasonal_complement: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palace: Option<PalaceSynastry>,
    pub spiciness: Spiciness,
    pub breakdown: AxisBreakdown,
}

/// Clamp to 0–100, mapping NaN to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
