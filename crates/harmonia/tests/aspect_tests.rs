use harmonia::aspects::{
    angular_distance, exact_aspect, exact_match, resolve_aspect, sign_aspect, AspectKind, AspectMode,
};
use harmonia::aspects::calculator::{NEUTRAL_SIGN_SCORE, VOID_SCORE};
use harmonia::chart::Sign;

const MODES: [AspectMode; 2] = [AspectMode::Harmony, AspectMode::Tension];

#[test]
fn test_void_is_exactly_neutral() {
    let base = 40.0;
    for offset in [30.0, 45.0, 70.0, 100.0, 150.0] {
        for mode in MODES {
            assert_eq!(exact_aspect(Some(base), Some(base + offset), mode), VOID_SCORE);
            assert_eq!(exact_aspect(Some(base + offset), Some(base), mode), VOID_SCORE);
        }
    }
}

#[test]
fn test_void_just_outside_orbs() {
    // Coincidence, sextile, square and trine orbs end at 8, 66, 98 and 128.
    for distance in [8.0001, 53.99, 66.01, 81.99, 98.01, 111.99, 128.01, 171.99] {
        for mode in MODES {
            let hit = exact_match(200.0, 200.0 + distance, mode);
            assert_eq!(hit.kind, AspectKind::Void, "distance {}", distance);
            assert_eq!(hit.strength, 0.5, "distance {}", distance);
        }
    }
}

#[test]
fn test_missing_degree_is_void() {
    assert_eq!(exact_aspect(None, Some(10.0), AspectMode::Harmony), VOID_SCORE);
    assert_eq!(exact_aspect(Some(f64::NAN), Some(10.0), AspectMode::Tension), VOID_SCORE);
}

#[test]
fn test_exact_hits_return_peak() {
    assert_eq!(exact_aspect(Some(10.0), Some(130.0), AspectMode::Harmony), 1.0);
    assert_eq!(exact_aspect(Some(10.0), Some(10.0), AspectMode::Tension), 1.0);
    assert_eq!(exact_aspect(Some(10.0), Some(100.0), AspectMode::Tension), 0.90);
    assert_eq!(exact_aspect(Some(350.0), Some(170.0), AspectMode::Harmony), 0.45);
}

#[test]
fn test_orb_edge_decays_to_floor() {
    let hit = exact_match(0.0, 8.0, AspectMode::Harmony);
    assert_eq!(hit.kind, AspectKind::Coincidence);
    assert!((hit.strength - 0.2).abs() < 1e-12);

    let mid = exact_match(0.0, 124.0, AspectMode::Harmony);
    assert_eq!(mid.kind, AspectKind::Trine);
    assert!((mid.strength - 0.6).abs() < 1e-12);
}

#[test]
fn test_wraparound_distance() {
    assert!((angular_distance(355.0, 5.0) - 10.0).abs() < 1e-12);
    assert!((angular_distance(-10.0, 350.0)).abs() < 1e-12);
    assert_eq!(exact_match(358.0, 2.0, AspectMode::Harmony).kind, AspectKind::Coincidence);
}

#[test]
fn test_sign_aspect_is_symmetric() {
    for a in Sign::ALL {
        for b in Sign::ALL {
            for mode in MODES {
                assert_eq!(sign_aspect(Some(a), Some(b), mode), sign_aspect(Some(b), Some(a), mode));
            }
        }
    }
}

#[test]
fn test_sign_aspect_tables() {
    assert_eq!(sign_aspect(Some(Sign::Leo), Some(Sign::Leo), AspectMode::Harmony), 0.85);
    assert_eq!(sign_aspect(Some(Sign::Leo), Some(Sign::Leo), AspectMode::Tension), 0.90);
    assert_eq!(sign_aspect(Some(Sign::Aries), Some(Sign::Sagittarius), AspectMode::Harmony), 0.95);
    assert_eq!(sign_aspect(Some(Sign::Aries), Some(Sign::Cancer), AspectMode::Tension), 0.85);
    // Quincunx carries no major aspect.
    assert_eq!(sign_aspect(Some(Sign::Aries), Some(Sign::Virgo), AspectMode::Harmony), 0.10);
    assert_eq!(sign_aspect(None, Some(Sign::Virgo), AspectMode::Tension), NEUTRAL_SIGN_SCORE);
}

#[test]
fn test_resolve_prefers_degrees() {
    // Aries 29° and Taurus 1°: different signs, but a tight coincidence.
    let score = resolve_aspect(Some(29.0), None, Some(31.0), None, AspectMode::Tension);
    assert!((score - 0.8).abs() < 1e-12);

    // Without degrees the sign table answers.
    let score = resolve_aspect(None, Some(Sign::Aries), None, Some(Sign::Taurus), AspectMode::Tension);
    assert_eq!(score, 0.10);
}

#[test]
fn test_resolve_blends_void_toward_sign() {
    // 30° apart is void; the signs are adjacent (minor, 0.10).
    let score = resolve_aspect(Some(5.0), None, Some(35.0), None, AspectMode::Harmony);
    assert!((score - (0.2 * 0.5 + 0.8 * 0.10)).abs() < 1e-12);
}
