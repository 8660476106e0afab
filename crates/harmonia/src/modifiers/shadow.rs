//! Shadow and wound contacts: Chiron on the partner's Moon or Mars, and
//! personal points falling into the partner's twelfth house.

use crate::aspects::angular_distance;
use crate::chart::{ChartProfile, HouseCusp, Point};
use crate::modifiers::ModifierBundle;

/// Orb for the degree-proximity contacts.
pub const SHADOW_ORB: f64 = 6.0;

pub const CAP_PHYSICAL: f64 = 15.0;
pub const CAP_DEPTH: f64 = 15.0;
/// Cap on the soul track delta.
pub const CAP_TRACK: f64 = 10.0;

const HEALER_DEPTH: f64 = 8.0;
const HEALER_TRACK: f64 = 6.0;
const WOUND_PHYSICAL: f64 = 6.0;
const WOUND_DEPTH: f64 = -4.0;
const HOUSE12_PHYSICAL: f64 = 3.0;
const HOUSE12_DEPTH: f64 = 4.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShadowOutcome {
    /// Deltas to physical, depth and the soul track.
    pub bundle: ModifierBundle,
    /// A's Chiron is pressed by B's Mars.
    pub wound_a: bool,
    /// B's Chiron is pressed by A's Mars.
    pub wound_b: bool,
}

impl ShadowOutcome {
    pub fn wound_fired(&self) -> bool {
        self.wound_a || self.wound_b
    }
}

fn healer_on_moon(healer: &ChartProfile, other: &ChartProfile) -> bool {
    match (healer.degree(Point::Chiron), other.degree(Point::Moon)) {
        (Some(chiron), Some(moon)) => angular_distance(chiron, moon) <= SHADOW_ORB,
        _ => false,
    }
}

fn healer_against_drive(healer: &ChartProfile, other: &ChartProfile) -> bool {
    match (healer.degree(Point::Chiron), other.degree(Point::Mars)) {
        (Some(chiron), Some(mars)) => {
            let d = angular_distance(chiron, mars);
            (d - 90.0).abs() <= SHADOW_ORB || (d - 180.0).abs() <= SHADOW_ORB
        }
        _ => false,
    }
}

/// Whether `deg` lies on the arc from `start` forward to `end`.
fn within_arc(deg: f64, start: f64, end: f64) -> bool {
    let span = (end - start).rem_euclid(360.0);
    span > 0.0 && (deg - start).rem_euclid(360.0) < span
}

/// `visitor`'s Sun or Mars inside `host`'s twelfth house.
fn in_house12(visitor: &ChartProfile, host: &ChartProfile) -> bool {
    let (Some(cusp), Some(asc)) = (host.cusp(HouseCusp::House12), host.ascendant()) else {
        return false;
    };
    [Point::Sun, Point::Mars]
        .iter()
        .filter_map(|p| visitor.degree(*p))
        .any(|deg| within_arc(deg, cusp, asc))
}

pub fn shadow_and_wound(a: &ChartProfile, b: &ChartProfile) -> ShadowOutcome {
    let mut out = ShadowOutcome::default();
    let bundle = &mut out.bundle;

    for (healer, other) in [(a, b), (b, a)] {
        if healer_on_moon(healer, other) {
            bundle.depth += HEALER_DEPTH;
            bundle.track += HEALER_TRACK;
            bundle.tag("wounded_healer");
        }
    }

    if healer_against_drive(a, b) {
        out.wound_a = true;
    }
    if healer_against_drive(b, a) {
        out.wound_b = true;
    }
    for _ in 0..(out.wound_a as u8 + out.wound_b as u8) {
        bundle.physical += WOUND_PHYSICAL;
        bundle.depth += WOUND_DEPTH;
        bundle.high_intensity = true;
        bundle.tag("wound_trigger");
    }

    let a_in_b = in_house12(a, b);
    let b_in_a = in_house12(b, a);
    if a_in_b || b_in_a {
        let directions = (a_in_b as u8 + b_in_a as u8) as f64;
        let boost = if a_in_b && b_in_a { 2.0 } else { 1.0 };
        bundle.physical += HOUSE12_PHYSICAL * directions * boost;
        bundle.depth += HOUSE12_DEPTH * directions * boost;
        bundle.high_intensity = true;
        bundle.tag("shadow_projection");
        if a_in_b && b_in_a {
            bundle.tag("mutual_shadow");
        }
    }

    if a.is_retrograde(Point::Venus) || b.is_retrograde(Point::Venus) {
        bundle.tag("inward_affection");
    }

    out.bundle = std::mem::take(&mut out.bundle).capped(CAP_PHYSICAL, CAP_DEPTH, CAP_TRACK);
    out
}
