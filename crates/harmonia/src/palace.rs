//! Boundary to the external twelve-palace synastry computation.
//!
//! The sub-result arrives already validated. It only applies when both people
//! have an exact birth time; otherwise, or when the collaborator fails, every
//! palace-dependent modifier takes its identity value.

use crate::chart::ChartProfile;
use crate::result::{Spiciness, Track};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Multiplicative adjustments to the four tracks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackMultipliers {
    #[serde(default = "identity")]
    pub sociable: f64,
    #[serde(default = "identity")]
    pub passionate: f64,
    #[serde(default = "identity")]
    pub partner: f64,
    #[serde(default = "identity")]
    pub soul: f64,
}

fn identity() -> f64 {
    1.0
}

impl Default for TrackMultipliers {
    fn default() -> Self {
        Self {
            sociable: 1.0,
            passionate: 1.0,
            partner: 1.0,
            soul: 1.0,
        }
    }
}

impl TrackMultipliers {
    pub fn get(&self, track: Track) -> f64 {
        match track {
            Track::Sociable => self.sociable,
            Track::Passionate => self.passionate,
            Track::Partner => self.partner,
            Track::Soul => self.soul,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PalaceSynastry {
    #[serde(default)]
    pub multipliers: TrackMultipliers,
    /// Added to A's power frame.
    #[serde(default)]
    pub power_offset: f64,
    /// Stress-defense triggers raised in A's palace chart.
    #[serde(default)]
    pub stress_a: Vec<String>,
    #[serde(default)]
    pub stress_b: Vec<String>,
    pub intensity: Spiciness,
}

#[derive(Error, Debug)]
pub enum PalaceError {
    #[error("Palace synastry failed: {message}")]
    CalculationFailed { message: String },
}

/// Producer of twelve-palace synastry for a pair of profiles.
pub trait PalaceSynastrySource {
    fn synastry(&self, a: &ChartProfile, b: &ChartProfile) -> Result<PalaceSynastry, PalaceError>;
}

/// Run the collaborator and absorb any failure as "feature absent".
pub fn fetch_palace<S: PalaceSynastrySource + ?Sized>(
    source: &S,
    a: &ChartProfile,
    b: &ChartProfile,
) -> Option<PalaceSynastry> {
    if !(a.has_exact_time() && b.has_exact_time()) {
        return None;
    }
    match source.synastry(a, b) {
        Ok(palace) => Some(palace),
        Err(e) => {
            log::warn!("Twelve-palace synastry skipped: {}", e);
            None
        }
    }
}

/// The palace result only counts when both people have exact birth times.
pub fn applicable<'a>(
    palace: Option<&'a PalaceSynastry>,
    a: &ChartProfile,
    b: &ChartProfile,
) -> Option<&'a PalaceSynastry> {
    palace.filter(|_| a.has_exact_time() && b.has_exact_time())
}
