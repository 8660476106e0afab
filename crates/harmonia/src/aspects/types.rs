use crate::chart::Point;
use serde::{Deserialize, Serialize};

/// How an aspect is read: as ease between the points or as friction/charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    Harmony,
    Tension,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Coincidence,
    Sextile,
    Square,
    Trine,
    Opposition,
    /// No aspect within orb.
    Void,
}

/// Angular aspect definition: center, orb and the peak strength per mode.
#[derive(Debug, Clone, Copy)]
pub struct AspectAngle {
    pub kind: AspectKind,
    pub center: f64,
    pub orb: f64,
    pub harmony_max: f64,
    pub tension_max: f64,
}

impl AspectAngle {
    pub fn max_for(&self, mode: AspectMode) -> f64 {
        match mode {
            AspectMode::Harmony => self.harmony_max,
            AspectMode::Tension => self.tension_max,
        }
    }
}

/// Result of comparing two degrees against the aspect table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactAspect {
    pub kind: AspectKind,
    /// Distance from the aspect's exact center, in degrees (0 for void).
    pub deviation: f64,
    pub strength: f64,
}

/// A cross-chart comparison of two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectObservation {
    pub from: Point,
    pub to: Point,
    pub kind: AspectKind,
    /// Deviation from the aspect center; `None` for sign-level observations.
    pub deviation: Option<f64>,
    pub strength: f64,
}
