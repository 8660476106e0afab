//! Power frame: who leads, who follows, and whether a wound broke the frame.

use crate::chart::{ChartProfile, ConflictStyle, DominancePreference};
use crate::relations::ElementRelation;
use crate::result::{PowerFrame, PowerRole};

pub const FRAME_BASE: f64 = 50.0;
pub const DOMINANCE_SHIFT: f64 = 20.0;
pub const CONFLICT_SHIFT: f64 = 10.0;
pub const WOUND_PENALTY: f64 = 15.0;
pub const RESTRICTION_SHIFT: f64 = 15.0;
/// Differential beyond which the couple has a leader.
pub const ROLE_THRESHOLD: f64 = 15.0;

/// Polarity above this plateau is compressed.
pub const POLARITY_PLATEAU: f64 = 0.75;
pub const POLARITY_SLOPE: f64 = 0.60;
/// Differential that maps to a polarity gain of 0.5.
const POLARITY_SPAN: f64 = 80.0;

/// Signals from other modules that move the frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSignals {
    /// A's wound was pressed.
    pub wound_a: bool,
    pub wound_b: bool,
    pub element_relation: ElementRelation,
    /// Offset from the twelve-palace collaborator, added to A.
    pub palace_offset: f64,
}

/// Self-reported frame of one person before cross-person signals.
pub fn self_frame(profile: &ChartProfile) -> f64 {
    let mut frame = FRAME_BASE;
    frame += match profile.dominance {
        Some(DominancePreference::Lead) => DOMINANCE_SHIFT,
        Some(DominancePreference::Follow) => -DOMINANCE_SHIFT,
        Some(DominancePreference::Flexible) | None => 0.0,
    };
    frame += match profile.conflict_style {
        Some(ConflictStyle::Confront) => CONFLICT_SHIFT,
        Some(ConflictStyle::Yield) => -CONFLICT_SHIFT,
        Some(ConflictStyle::Negotiate) | None => 0.0,
    };
    frame
}

pub fn classify(differential: f64) -> (PowerRole, PowerRole) {
    if differential > ROLE_THRESHOLD {
        (PowerRole::Dominant, PowerRole::Submissive)
    } else if differential < -ROLE_THRESHOLD {
        (PowerRole::Submissive, PowerRole::Dominant)
    } else {
        (PowerRole::Equal, PowerRole::Equal)
    }
}

pub fn power_frame(a: &ChartProfile, b: &ChartProfile, signals: &FrameSignals) -> PowerFrame {
    let mut frame_a = self_frame(a);
    let mut frame_b = self_frame(b);

    if signals.wound_a {
        frame_a -= WOUND_PENALTY;
    }
    if signals.wound_b {
        frame_b -= WOUND_PENALTY;
    }

    match signals.element_relation {
        ElementRelation::ARestrictsB => {
            frame_a += RESTRICTION_SHIFT;
            frame_b -= RESTRICTION_SHIFT;
        }
        ElementRelation::BRestrictsA => {
            frame_a -= RESTRICTION_SHIFT;
            frame_b += RESTRICTION_SHIFT;
        }
        _ => {}
    }

    if signals.palace_offset.is_finite() {
        frame_a += signals.palace_offset;
    }

    let frame_a = frame_a.clamp(0.0, 100.0);
    let frame_b = frame_b.clamp(0.0, 100.0);
    let differential = frame_a - frame_b;
    let (role_a, role_b) = classify(differential);

    PowerFrame {
        differential,
        frame_broke: signals.wound_a || signals.wound_b,
        role_a,
        role_b,
    }
}

/// Attraction from frame polarity, 0–1, soft-capped above the plateau.
pub fn polarity(frame: &PowerFrame) -> f64 {
    let raw = (0.5 + frame.differential.abs() / POLARITY_SPAN).min(1.0);
    if raw > POLARITY_PLATEAU {
        POLARITY_PLATEAU + (raw - POLARITY_PLATEAU) * POLARITY_SLOPE
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{FiveElement, Tier};

    fn neutral_signals() -> FrameSignals {
        FrameSignals {
            wound_a: false,
            wound_b: false,
            element_relation: ElementRelation::Parallel,
            palace_offset: 0.0,
        }
    }

    fn person() -> ChartProfile {
        ChartProfile::new(Tier::DateOnly, FiveElement::Earth)
    }

    #[test]
    fn test_equal_without_signals() {
        let frame = power_frame(&person(), &person(), &neutral_signals());
        assert_eq!(frame.differential, 0.0);
        assert_eq!((frame.role_a, frame.role_b), (PowerRole::Equal, PowerRole::Equal));
        assert!(!frame.frame_broke);
    }

    #[test]
    fn test_self_report_leads() {
        let a = person().with_dominance(DominancePreference::Lead);
        let b = person().with_conflict_style(ConflictStyle::Yield);
        let frame = power_frame(&a, &b, &neutral_signals());
        assert_eq!(frame.differential, 30.0);
        assert_eq!(frame.role_a, PowerRole::Dominant);
        assert_eq!(frame.role_b, PowerRole::Submissive);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(classify(15.0), (PowerRole::Equal, PowerRole::Equal));
        assert_eq!(classify(-15.0), (PowerRole::Equal, PowerRole::Equal));
        assert_eq!(classify(-15.5), (PowerRole::Submissive, PowerRole::Dominant));
    }

    #[test]
    fn test_wound_and_restriction() {
        let signals = FrameSignals {
            wound_a: true,
            element_relation: ElementRelation::BRestrictsA,
            ..neutral_signals()
        };
        let frame = power_frame(&person(), &person(), &signals);
        assert_eq!(frame.differential, -45.0);
        assert!(frame.frame_broke);
        assert_eq!(frame.role_b, PowerRole::Dominant);
    }

    #[test]
    fn test_polarity_soft_cap() {
        let mut frame = power_frame(&person(), &person(), &neutral_signals());
        assert_eq!(polarity(&frame), 0.5);
        frame.differential = 100.0;
        assert!((polarity(&frame) - (0.75 + 0.25 * 0.60)).abs() < 1e-12);
    }
}
