//! The physical-attraction and depth axes.
//!
//! Both are renormalized weighted sums of cross-chart comparisons followed by
//! diminishing-returns bonuses, so each stays within [0, 1] before scaling.

use crate::aspects::{
    compare, compare_exact, mirrored, mirrored_exact, resolve_aspect, AspectMode, KarmicTriggers,
};
use crate::chart::{ChartProfile, HouseCusp, Point};
use crate::modifiers::AttachmentOutcome;
use crate::relations::ElementRelation;
use crate::result::PowerFrame;
use crate::scoring::accumulator::{diminish, ScoreTerm, WeightedScore};
use crate::scoring::power::polarity;

pub const RESTRICTION_BONUS: f64 = 0.25;
/// The anxious/avoidant ×1.15 pull, expressed as a share of the headroom.
pub const ANXIOUS_AVOIDANT_BONUS: f64 = 0.15;
pub const GENERATION_BONUS: f64 = 0.30;
pub const PARALLEL_BONUS: f64 = 0.15;
/// Weight of one first-impression direction.
pub const FIRST_IMPRESSION_WEIGHT: f64 = 0.05;

/// Inputs computed by other modules before the axes.
#[derive(Debug, Clone, Copy)]
pub struct AxisContext<'a> {
    pub karmic: &'a KarmicTriggers,
    pub power: &'a PowerFrame,
    pub element_relation: ElementRelation,
    pub attachment: &'a AttachmentOutcome,
}

/// Axis value in [0, 1] with the terms that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScore {
    /// Renormalized sum before bonuses.
    pub base: f64,
    pub value: f64,
    pub terms: Vec<ScoreTerm>,
}

fn both_exact(a: &ChartProfile, b: &ChartProfile) -> bool {
    a.has_exact_time() && b.has_exact_time()
}

/// Ascendant against the partner's `target`, weighted per direction found.
fn first_impression(score: &mut WeightedScore, label: &str, a: &ChartProfile, b: &ChartProfile, target: Point) {
    let directions = [
        compare_exact(a, Point::Ascendant, b, target, AspectMode::Harmony),
        compare_exact(b, Point::Ascendant, a, target, AspectMode::Harmony),
    ];
    let found = directions.iter().flatten().count();
    if found > 0 {
        score.add_opt(
            label,
            mirrored_exact(a, Point::Ascendant, b, target, AspectMode::Harmony),
            FIRST_IMPRESSION_WEIGHT * found as f64,
        );
    }
}

pub fn physical_axis(a: &ChartProfile, b: &ChartProfile, ctx: &AxisContext) -> AxisScore {
    let mut score = WeightedScore::new();

    score.add_opt("drive_allure", mirrored(a, Point::Mars, b, Point::Venus, AspectMode::Tension), 0.40);
    score.add_opt("drive_accord", compare(a, Point::Mars, b, Point::Mars, AspectMode::Harmony), 0.08);
    score.add_opt("allure_accord", compare(a, Point::Venus, b, Point::Venus, AspectMode::Harmony), 0.08);
    score.add_opt("taboo_pull", mirrored_exact(a, Point::Pluto, b, Point::Mars, AspectMode::Tension), 0.16);

    if both_exact(a, b) {
        first_impression(&mut score, "first_impression_allure", a, b, Point::Venus);
        first_impression(&mut score, "first_impression_drive", a, b, Point::Mars);
    }

    if ctx.karmic.comparisons > 0 {
        score.add("karmic", ctx.karmic.score, 0.10);
    }
    score.add("power_polarity", polarity(ctx.power), 0.08);

    let (base, terms) = score.into_parts();
    let mut value = base;
    if ctx.element_relation.is_restricting() {
        value = diminish(value, RESTRICTION_BONUS);
    }
    if ctx.attachment.is_anxious_avoidant() {
        value = diminish(value, ANXIOUS_AVOIDANT_BONUS);
    }

    AxisScore { base, value, terms }
}

pub fn depth_axis(a: &ChartProfile, b: &ChartProfile, ctx: &AxisContext) -> AxisScore {
    let mut score = WeightedScore::new();

    score.add_opt("identity_accord", compare(a, Point::Sun, b, Point::Sun, AspectMode::Harmony), 0.12);
    score.add_opt("emotional_accord", compare(a, Point::Moon, b, Point::Moon, AspectMode::Harmony), 0.18);
    score.add_opt("structure_accord", compare(a, Point::Saturn, b, Point::Saturn, AspectMode::Harmony), 0.10);
    score.add_opt("identity_emotion", mirrored(a, Point::Sun, b, Point::Moon, AspectMode::Harmony), 0.15);

    if let (Some(home_a), Some(home_b)) = (a.cusp(HouseCusp::House4), b.cusp(HouseCusp::House4)) {
        score.add(
            "home",
            resolve_aspect(Some(home_a), None, Some(home_b), None, AspectMode::Harmony),
            0.10,
        );
    }

    if a.has_point(Point::Juno) && b.has_point(Point::Juno) {
        score.add_opt("commitment", mirrored(a, Point::Juno, b, Point::Venus, AspectMode::Harmony), 0.10);
    }

    score.add_opt("attachment", ctx.attachment.compatibility(), 0.15);

    let (base, terms) = score.into_parts();
    let value = match ctx.element_relation {
        r if r.is_generating() => diminish(base, GENERATION_BONUS),
        ElementRelation::Parallel => diminish(base, PARALLEL_BONUS),
        _ => base,
    };

    AxisScore { base, value, terms }
}
