//! Favorable-element resonance: what one person lacks, the other carries.

use crate::chart::{ChartProfile, ElementBalance, WesternElement};

pub const MUTUAL_FRACTION: f64 = 0.15;
pub const ONE_WAY_FRACTION: f64 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resonance {
    pub mutual: bool,
    /// Share of the remaining depth headroom granted.
    pub fraction: f64,
    pub badge: &'static str,
}

impl Resonance {
    /// Apply to a 0–100 depth value.
    pub fn apply(&self, depth: f64) -> f64 {
        crate::scoring::marginal(depth, self.fraction)
    }
}

/// A person's favorable elements are the ones their chart is short of.
fn favorable(balance: &ElementBalance) -> Vec<WesternElement> {
    balance.deficient()
}

fn supplies(needy: &ElementBalance, giver: &ElementBalance) -> bool {
    let dominant = giver.dominant();
    favorable(needy).iter().any(|e| dominant.contains(e))
}

/// `None` when either balance is missing or nothing overlaps.
pub fn favorable_resonance(a: &ChartProfile, b: &ChartProfile) -> Option<Resonance> {
    let (ba, bb) = (a.element_balance.as_ref()?, b.element_balance.as_ref()?);
    match (supplies(ba, bb), supplies(bb, ba)) {
        (true, true) => Some(Resonance {
            mutual: true,
            fraction: MUTUAL_FRACTION,
            badge: "element_resonance_mutual",
        }),
        (true, false) | (false, true) => Some(Resonance {
            mutual: false,
            fraction: ONE_WAY_FRACTION,
            badge: "element_resonance",
        }),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{FiveElement, Tier};

    fn with_balance(fire: u8, earth: u8, air: u8, water: u8) -> ChartProfile {
        ChartProfile::new(Tier::DateOnly, FiveElement::Fire)
            .with_element_balance(ElementBalance { fire, earth, air, water })
    }

    #[test]
    fn test_mutual_resonance() {
        let a = with_balance(5, 3, 2, 0);
        let b = with_balance(0, 2, 3, 5);
        let r = favorable_resonance(&a, &b).unwrap();
        assert!(r.mutual);
        assert!((r.apply(60.0) - 66.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_way_resonance() {
        let a = with_balance(2, 3, 3, 1);
        let b = with_balance(2, 2, 2, 4);
        let r = favorable_resonance(&a, &b).unwrap();
        assert!(!r.mutual);
        assert_eq!(r.badge, "element_resonance");
    }

    #[test]
    fn test_missing_balance_is_absent() {
        let a = with_balance(5, 3, 2, 0);
        let b = ChartProfile::new(Tier::DateOnly, FiveElement::Water);
        assert!(favorable_resonance(&a, &b).is_none());
    }
}
