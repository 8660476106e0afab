//! Karmic trigger detection: one person's generational points pressing on the
//! other's personal points.

use crate::aspects::calculator::compare;
use crate::aspects::types::AspectMode;
use crate::chart::{ChartProfile, Point};
use serde::{Deserialize, Serialize};

/// Personal points a generational point can activate.
pub const PERSONAL_TARGETS: [Point; 3] = [Point::Sun, Point::Moon, Point::Venus];
/// Tension strength at which a contact counts as an activation.
pub const ACTIVATION_THRESHOLD: f64 = 0.70;
/// Baseline score when nothing is activated.
pub const KARMIC_BASELINE: f64 = 0.50;
/// Activations needed for the mean strength to count in full.
pub const SATURATION_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KarmicTriggers {
    /// Contacts that could be evaluated at all.
    pub comparisons: usize,
    pub activations: usize,
    /// Baseline-centered intensity in [0, 1].
    pub score: f64,
}

/// Push activations of `outer` on `inner`; returns how many contacts were evaluated.
fn directional(outer: &ChartProfile, inner: &ChartProfile, out: &mut Vec<f64>) -> usize {
    let mut evaluated = 0;
    for generational in Point::GENERATIONAL {
        for personal in PERSONAL_TARGETS {
            if let Some(strength) = compare(outer, generational, inner, personal, AspectMode::Tension) {
                evaluated += 1;
                if strength >= ACTIVATION_THRESHOLD {
                    out.push(strength);
                }
            }
        }
    }
    evaluated
}

/// Scan both directions and fold the activations into one score.
pub fn karmic_triggers(a: &ChartProfile, b: &ChartProfile) -> KarmicTriggers {
    let mut strengths = Vec::new();
    let comparisons = directional(a, b, &mut strengths) + directional(b, a, &mut strengths);

    if strengths.is_empty() {
        return KarmicTriggers { comparisons, activations: 0, score: KARMIC_BASELINE };
    }

    // Sorted so the sum does not depend on which person came first.
    strengths.sort_by(f64::total_cmp);
    let activations = strengths.len();
    let mean = strengths.iter().sum::<f64>() / activations as f64;
    let saturation = activations.min(SATURATION_COUNT) as f64 / SATURATION_COUNT as f64;
    let score = KARMIC_BASELINE + (mean - KARMIC_BASELINE) * saturation;

    KarmicTriggers {
        comparisons,
        activations,
        score: score.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{FiveElement, Sign, Tier};

    #[test]
    fn test_no_data_is_baseline() {
        let a = ChartProfile::new(Tier::DateOnly, FiveElement::Wood);
        let b = ChartProfile::new(Tier::DateOnly, FiveElement::Fire);
        let k = karmic_triggers(&a, &b);
        assert_eq!(k.comparisons, 0);
        assert_eq!(k.activations, 0);
        assert_eq!(k.score, KARMIC_BASELINE);
    }

    #[test]
    fn test_exact_pluto_on_moon_activates() {
        let a = ChartProfile::new(Tier::Exact, FiveElement::Wood).with_degree(Point::Pluto, 200.0);
        let b = ChartProfile::new(Tier::Exact, FiveElement::Fire).with_degree(Point::Moon, 201.0);
        let k = karmic_triggers(&a, &b);
        assert_eq!(k.activations, 1);
        assert!(k.score > KARMIC_BASELINE);
        assert!(k.score <= 1.0);
    }

    #[test]
    fn test_sign_level_square_activates() {
        let a = ChartProfile::new(Tier::DateOnly, FiveElement::Wood).with_sign(Point::Uranus, Sign::Aries);
        let b = ChartProfile::new(Tier::DateOnly, FiveElement::Fire).with_sign(Point::Sun, Sign::Cancer);
        assert_eq!(karmic_triggers(&a, &b).activations, 1);
        assert_eq!(karmic_triggers(&a, &b), karmic_triggers(&b, &a));
    }
}
