//! Dynamically renormalized weighted sums.
//!
//! Only terms whose inputs are present contribute to the denominator, so a
//! sparse chart is scored on what it has instead of being diluted by forced
//! neutrals.

use serde::{Deserialize, Serialize};

/// Score returned when no term was present at all.
pub const EMPTY_SCORE: f64 = 0.5;

/// One contribution to a weighted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTerm {
    pub label: String,
    pub value: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Default)]
pub struct WeightedScore {
    numerator: f64,
    denominator: f64,
    terms: Vec<ScoreTerm>,
}

impl WeightedScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str, value: f64, weight: f64) {
        let value = value.clamp(0.0, 1.0);
        self.numerator += value * weight;
        self.denominator += weight;
        self.terms.push(ScoreTerm {
            label: label.to_string(),
            value,
            weight,
        });
    }

    /// Add the term only when its value is present.
    pub fn add_opt(&mut self, label: &str, value: Option<f64>, weight: f64) {
        if let Some(value) = value {
            self.add(label, value, weight);
        }
    }

    pub fn weight(&self) -> f64 {
        self.denominator
    }

    pub fn terms(&self) -> &[ScoreTerm] {
        &self.terms
    }

    pub fn value(&self) -> f64 {
        if self.denominator <= 0.0 {
            return EMPTY_SCORE;
        }
        (self.numerator / self.denominator).clamp(0.0, 1.0)
    }

    pub fn into_parts(self) -> (f64, Vec<ScoreTerm>) {
        (self.value(), self.terms)
    }
}

/// `score + (1 - score) * fraction`: closes a share of the remaining gap to 1.
pub fn diminish(score: f64, fraction: f64) -> f64 {
    let score = score.clamp(0.0, 1.0);
    let fraction = fraction.clamp(0.0, 1.0);
    (score + (1.0 - score) * fraction).min(1.0)
}

/// Marginal bonus on a 0–100 axis: `(100 - value) * fraction`.
pub fn marginal(value: f64, fraction: f64) -> f64 {
    let value = value.clamp(0.0, 100.0);
    value + (100.0 - value) * fraction.clamp(0.0, 1.0)
}
