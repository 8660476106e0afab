//! Aspect calculus at sign and degree granularity.
//!
//! All scores are strengths in [0, 1]. Degree data is preferred; sign data is
//! the fallback, and a missing sign reads as neutral rather than as a penalty.

use crate::aspects::types::{AspectAngle, AspectKind, AspectMode, AspectObservation, ExactAspect};
use crate::chart::{ChartProfile, Point, Sign};

/// Score when either sign is unknown.
pub const NEUTRAL_SIGN_SCORE: f64 = 0.65;
/// Score for sign distances with no major aspect (semi-sextile, quincunx).
pub const MINOR_ASPECT_SCORE: f64 = 0.10;
/// Score for degrees that form no aspect. Never lower than this.
pub const VOID_SCORE: f64 = 0.5;
/// Strength at the edge of an orb.
pub const ORB_EDGE_SCORE: f64 = 0.2;
/// Weight of the sign-level score when a degree comparison comes back void.
pub const VOID_SIGN_BLEND: f64 = 0.8;

/// Sign-distance lookup (0..=6). `None` marks minor distances.
const HARMONY_BY_DISTANCE: [Option<f64>; 7] = [
    Some(0.85), // coincidence
    None,
    Some(0.75), // sextile
    Some(0.35), // square
    Some(0.95), // trine
    None,
    Some(0.40), // opposition
];

const TENSION_BY_DISTANCE: [Option<f64>; 7] = [
    Some(0.90),
    None,
    Some(0.30),
    Some(0.85),
    Some(0.35),
    None,
    Some(0.80),
];

/// Aspect angles in test order; the first orb containing the distance wins.
pub const ASPECT_ANGLES: [AspectAngle; 5] = [
    AspectAngle { kind: AspectKind::Coincidence, center: 0.0, orb: 8.0, harmony_max: 0.90, tension_max: 1.00 },
    AspectAngle { kind: AspectKind::Sextile, center: 60.0, orb: 6.0, harmony_max: 0.80, tension_max: 0.40 },
    AspectAngle { kind: AspectKind::Square, center: 90.0, orb: 8.0, harmony_max: 0.30, tension_max: 0.90 },
    AspectAngle { kind: AspectKind::Trine, center: 120.0, orb: 8.0, harmony_max: 1.00, tension_max: 0.35 },
    AspectAngle { kind: AspectKind::Opposition, center: 180.0, orb: 8.0, harmony_max: 0.45, tension_max: 0.85 },
];

/// Minimal zodiacal distance between two signs, 0..=6.
pub fn sign_distance(a: Sign, b: Sign) -> u8 {
    let d = (a.index() as i16 - b.index() as i16).rem_euclid(12) as u8;
    d.min(12 - d)
}

/// Aspect kind implied by a sign distance.
pub fn sign_kind(distance: u8) -> AspectKind {
    match distance {
        0 => AspectKind::Coincidence,
        2 => AspectKind::Sextile,
        3 => AspectKind::Square,
        4 => AspectKind::Trine,
        6 => AspectKind::Opposition,
        _ => AspectKind::Void,
    }
}

/// Sign-granular aspect strength.
pub fn sign_aspect(a: Option<Sign>, b: Option<Sign>, mode: AspectMode) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return NEUTRAL_SIGN_SCORE;
    };
    let table = match mode {
        AspectMode::Harmony => &HARMONY_BY_DISTANCE,
        AspectMode::Tension => &TENSION_BY_DISTANCE,
    };
    table[sign_distance(a, b) as usize].unwrap_or(MINOR_ASPECT_SCORE)
}

/// Shortest angular distance between two longitudes, 0..=180.
pub fn angular_distance(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1.rem_euclid(360.0) - lon2.rem_euclid(360.0)).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Match two degrees against [`ASPECT_ANGLES`] with linear decay from center.
pub fn exact_match(deg_a: f64, deg_b: f64, mode: AspectMode) -> ExactAspect {
    let distance = angular_distance(deg_a, deg_b);
    for angle in ASPECT_ANGLES.iter() {
        let deviation = (distance - angle.center).abs();
        if deviation <= angle.orb {
            let peak = angle.max_for(mode);
            // Written from the peak so an exact hit returns the peak unrounded.
            let strength = peak - (peak - ORB_EDGE_SCORE) * (deviation / angle.orb);
            return ExactAspect {
                kind: angle.kind,
                deviation,
                strength: strength.clamp(0.0, 1.0),
            };
        }
    }
    ExactAspect {
        kind: AspectKind::Void,
        deviation: 0.0,
        strength: VOID_SCORE,
    }
}

/// Degree-granular aspect strength; missing degrees read as void.
pub fn exact_aspect(deg_a: Option<f64>, deg_b: Option<f64>, mode: AspectMode) -> f64 {
    match (deg_a, deg_b) {
        (Some(a), Some(b)) if a.is_finite() && b.is_finite() => exact_match(a, b, mode).strength,
        _ => VOID_SCORE,
    }
}

fn blend_void(sign_score: f64) -> f64 {
    (1.0 - VOID_SIGN_BLEND) * VOID_SCORE + VOID_SIGN_BLEND * sign_score
}

/// Prefer degrees, fall back to signs. A void degree comparison is pulled back
/// toward the sign score so degree-complete charts are not penalized.
pub fn resolve_aspect(
    deg_a: Option<f64>,
    sign_a: Option<Sign>,
    deg_b: Option<f64>,
    sign_b: Option<Sign>,
    mode: AspectMode,
) -> f64 {
    let sign_a = sign_a.or_else(|| deg_a.map(Sign::from_longitude));
    let sign_b = sign_b.or_else(|| deg_b.map(Sign::from_longitude));
    match (deg_a, deg_b) {
        (Some(a), Some(b)) if a.is_finite() && b.is_finite() => {
            let exact = exact_match(a, b, mode);
            if exact.kind == AspectKind::Void {
                blend_void(sign_aspect(sign_a, sign_b, mode))
            } else {
                exact.strength
            }
        }
        _ => sign_aspect(sign_a, sign_b, mode),
    }
}

/// Compare `a`'s point with `b`'s point. `None` when either point is unknown.
pub fn observe(
    a: &ChartProfile,
    point_a: Point,
    b: &ChartProfile,
    point_b: Point,
    mode: AspectMode,
) -> Option<AspectObservation> {
    let sign_a = a.sign(point_a)?;
    let sign_b = b.sign(point_b)?;

    if let (Some(deg_a), Some(deg_b)) = (a.degree(point_a), b.degree(point_b)) {
        let exact = exact_match(deg_a, deg_b, mode);
        if exact.kind != AspectKind::Void {
            return Some(AspectObservation {
                from: point_a,
                to: point_b,
                kind: exact.kind,
                deviation: Some(exact.deviation),
                strength: exact.strength,
            });
        }
        return Some(AspectObservation {
            from: point_a,
            to: point_b,
            kind: AspectKind::Void,
            deviation: None,
            strength: blend_void(sign_aspect(Some(sign_a), Some(sign_b), mode)),
        });
    }

    Some(AspectObservation {
        from: point_a,
        to: point_b,
        kind: sign_kind(sign_distance(sign_a, sign_b)),
        deviation: None,
        strength: sign_aspect(Some(sign_a), Some(sign_b), mode),
    })
}

/// Degree-only comparison. `None` unless both degrees are known.
pub fn observe_exact(
    a: &ChartProfile,
    point_a: Point,
    b: &ChartProfile,
    point_b: Point,
    mode: AspectMode,
) -> Option<AspectObservation> {
    let exact = exact_match(a.degree(point_a)?, b.degree(point_b)?, mode);
    Some(AspectObservation {
        from: point_a,
        to: point_b,
        kind: exact.kind,
        deviation: (exact.kind != AspectKind::Void).then_some(exact.deviation),
        strength: exact.strength,
    })
}

pub fn compare(a: &ChartProfile, point_a: Point, b: &ChartProfile, point_b: Point, mode: AspectMode) -> Option<f64> {
    observe(a, point_a, b, point_b, mode).map(|o| o.strength)
}

pub fn compare_exact(a: &ChartProfile, point_a: Point, b: &ChartProfile, point_b: Point, mode: AspectMode) -> Option<f64> {
    observe_exact(a, point_a, b, point_b, mode).map(|o| o.strength)
}

fn mean_of(x: Option<f64>, y: Option<f64>) -> Option<f64> {
    match (x, y) {
        (Some(x), Some(y)) => Some((x + y) / 2.0),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

/// `a.point_a` vs `b.point_b` and `b.point_a` vs `a.point_b`, averaged over the
/// directions that are available. Identical under swapping `a` and `b`.
pub fn mirrored(a: &ChartProfile, point_a: Point, b: &ChartProfile, point_b: Point, mode: AspectMode) -> Option<f64> {
    mean_of(
        compare(a, point_a, b, point_b, mode),
        compare(b, point_a, a, point_b, mode),
    )
}

/// Degree-only variant of [`mirrored`].
pub fn mirrored_exact(a: &ChartProfile, point_a: Point, b: &ChartProfile, point_b: Point, mode: AspectMode) -> Option<f64> {
    mean_of(
        compare_exact(a, point_a, b, point_b, mode),
        compare_exact(b, point_a, a, point_b, mode),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_distance_folds() {
        assert_eq!(sign_distance(Sign::Aries, Sign::Aries), 0);
        assert_eq!(sign_distance(Sign::Aries, Sign::Pisces), 1);
        assert_eq!(sign_distance(Sign::Aries, Sign::Libra), 6);
        assert_eq!(sign_distance(Sign::Capricorn, Sign::Taurus), 4);
    }

    #[test]
    fn test_sign_aspect_tables() {
        assert_eq!(sign_aspect(Some(Sign::Aries), Some(Sign::Leo), AspectMode::Harmony), 0.95);
        assert_eq!(sign_aspect(Some(Sign::Aries), Some(Sign::Cancer), AspectMode::Tension), 0.85);
        assert_eq!(sign_aspect(Some(Sign::Aries), Some(Sign::Taurus), AspectMode::Harmony), MINOR_ASPECT_SCORE);
        assert_eq!(sign_aspect(Some(Sign::Aries), Some(Sign::Virgo), AspectMode::Tension), MINOR_ASPECT_SCORE);
        assert_eq!(sign_aspect(None, Some(Sign::Leo), AspectMode::Harmony), NEUTRAL_SIGN_SCORE);
    }

    #[test]
    fn test_angular_distance_wraps() {
        assert_eq!(angular_distance(10.0, 350.0), 20.0);
        assert_eq!(angular_distance(350.0, 10.0), 20.0);
        assert_eq!(angular_distance(0.0, 180.0), 180.0);
        assert_eq!(angular_distance(-10.0, 10.0), 20.0);
    }

    #[test]
    fn test_exact_hit_returns_peak() {
        let hit = exact_match(100.0, 100.0, AspectMode::Tension);
        assert_eq!(hit.kind, AspectKind::Coincidence);
        assert_eq!(hit.strength, 1.0);

        let trine = exact_match(10.0, 130.0, AspectMode::Harmony);
        assert_eq!(trine.kind, AspectKind::Trine);
        assert_eq!(trine.strength, 1.0);
    }

    #[test]
    fn test_exact_decays_linearly() {
        // 4° off a square with an 8° orb: halfway between peak and edge.
        let sq = exact_match(0.0, 94.0, AspectMode::Tension);
        assert_eq!(sq.kind, AspectKind::Square);
        assert!((sq.strength - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_missing_degree_is_void() {
        assert_eq!(exact_aspect(None, Some(10.0), AspectMode::Harmony), VOID_SCORE);
        assert_eq!(exact_aspect(Some(10.0), None, AspectMode::Tension), VOID_SCORE);
    }

    #[test]
    fn test_resolve_blends_void_toward_sign() {
        // 45° apart: void of aspect; Aries vs Taurus is a minor sign distance.
        let score = resolve_aspect(Some(10.0), None, Some(55.0), None, AspectMode::Harmony);
        assert!((score - (0.2 * 0.5 + 0.8 * MINOR_ASPECT_SCORE)).abs() < 1e-12);

        // Without degrees the sign table is used directly.
        let sign_only = resolve_aspect(None, Some(Sign::Aries), None, Some(Sign::Leo), AspectMode::Harmony);
        assert_eq!(sign_only, 0.95);
    }
}
