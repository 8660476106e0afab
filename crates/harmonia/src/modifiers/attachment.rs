//! Attachment dynamics between two effective attachment styles.
//!
//! A stated style can be pulled toward another style by exact cross-chart
//! contacts to the partner's Uranus (chaos), Saturn (structure) or Moon and
//! Jupiter (nurture). The pair of effective styles is then looked up as an
//! unordered pair.

use crate::aspects::{observe_exact, AspectKind, AspectMode};
use crate::chart::{AttachmentStyle, ChartProfile, Point};
use crate::modifiers::ModifierBundle;
use std::collections::HashMap;

/// Cap on each attachment delta.
pub const CAP_DELTA: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachmentDynamic {
    pub name: &'static str,
    pub physical: f64,
    pub depth: f64,
    /// Delta to the partner track.
    pub track: f64,
    pub high_intensity: bool,
    /// Depth-axis compatibility of the pair, 0–1.
    pub compatibility: f64,
}

fn dynamic(
    name: &'static str,
    physical: f64,
    depth: f64,
    track: f64,
    high_intensity: bool,
    compatibility: f64,
) -> AttachmentDynamic {
    AttachmentDynamic { name, physical, depth, track, high_intensity, compatibility }
}

lazy_static::lazy_static! {
    static ref DYNAMICS: HashMap<(AttachmentStyle, AttachmentStyle), AttachmentDynamic> = {
        use AttachmentStyle::*;
        let storm = |c| dynamic("storm_cycle", 5.0, -6.0, -3.0, true, c);
        let entries = [
            ((Secure, Secure), dynamic("safe_harbor", 0.0, 8.0, 6.0, false, 0.95)),
            ((Secure, Anxious), dynamic("steadying_anchor", 0.0, 4.0, 3.0, false, 0.70)),
            ((Secure, Avoidant), dynamic("patient_thaw", 0.0, 2.0, 1.0, false, 0.65)),
            ((Anxious, Avoidant), dynamic("anxious_avoidant_trap", 8.0, -6.0, -4.0, true, 0.30)),
            ((Anxious, Anxious), dynamic("reassurance_spiral", 3.0, -2.0, -1.0, true, 0.50)),
            ((Avoidant, Avoidant), dynamic("parallel_islands", -4.0, -4.0, -2.0, false, 0.40)),
            ((Secure, Disorganized), storm(0.55)),
            ((Anxious, Disorganized), storm(0.35)),
            ((Avoidant, Disorganized), storm(0.35)),
            ((Disorganized, Disorganized), storm(0.25)),
        ];
        entries.into_iter().collect()
    };
}

fn pair_key(a: AttachmentStyle, b: AttachmentStyle) -> (AttachmentStyle, AttachmentStyle) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Named dynamic of a style pair; order-independent.
pub fn lookup_dynamic(a: AttachmentStyle, b: AttachmentStyle) -> Option<AttachmentDynamic> {
    DYNAMICS.get(&pair_key(a, b)).copied()
}

fn contact(own: &ChartProfile, partner: &ChartProfile, target: Point, mode: AspectMode) -> Option<AspectKind> {
    observe_exact(own, Point::Moon, partner, target, mode).map(|o| o.kind)
}

/// Stated style adjusted by the partner's chart. `None` without a stated style.
pub fn effective_style(own: &ChartProfile, partner: &ChartProfile) -> Option<AttachmentStyle> {
    let stated = own.attachment?;

    if matches!(
        contact(own, partner, Point::Uranus, AspectMode::Tension),
        Some(AspectKind::Square | AspectKind::Opposition)
    ) {
        return Some(AttachmentStyle::Anxious);
    }
    if matches!(
        contact(own, partner, Point::Saturn, AspectMode::Tension),
        Some(AspectKind::Coincidence | AspectKind::Square | AspectKind::Opposition)
    ) {
        return Some(AttachmentStyle::Avoidant);
    }
    let nurtured = [Point::Moon, Point::Jupiter].iter().any(|target| {
        matches!(
            contact(own, partner, *target, AspectMode::Harmony),
            Some(AspectKind::Trine | AspectKind::Sextile)
        )
    });
    if nurtured {
        return Some(AttachmentStyle::Secure);
    }
    Some(stated)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttachmentOutcome {
    pub effective_a: Option<AttachmentStyle>,
    pub effective_b: Option<AttachmentStyle>,
    pub dynamic: Option<AttachmentDynamic>,
    /// Deltas to physical, depth and the partner track.
    pub bundle: ModifierBundle,
}

impl AttachmentOutcome {
    pub fn is_anxious_avoidant(&self) -> bool {
        matches!(
            (self.effective_a, self.effective_b),
            (Some(AttachmentStyle::Anxious), Some(AttachmentStyle::Avoidant))
                | (Some(AttachmentStyle::Avoidant), Some(AttachmentStyle::Anxious))
        )
    }

    pub fn compatibility(&self) -> Option<f64> {
        self.dynamic.map(|d| d.compatibility)
    }
}

pub fn attachment_dynamics(a: &ChartProfile, b: &ChartProfile) -> AttachmentOutcome {
    let effective_a = effective_style(a, b);
    let effective_b = effective_style(b, a);
    let mut out = AttachmentOutcome {
        effective_a,
        effective_b,
        ..Default::default()
    };

    let (Some(sa), Some(sb)) = (effective_a, effective_b) else {
        return out;
    };
    let Some(dynamic) = lookup_dynamic(sa, sb) else {
        return out;
    };

    let mut bundle = ModifierBundle {
        physical: dynamic.physical,
        depth: dynamic.depth,
        track: dynamic.track,
        high_intensity: dynamic.high_intensity,
        ..Default::default()
    };
    bundle.tag(dynamic.name);
    out.bundle = bundle.capped(CAP_DELTA, CAP_DELTA, CAP_DELTA);
    out.dynamic = Some(dynamic);
    out
}
