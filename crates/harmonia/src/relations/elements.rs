//! Five-element relation between two dominant elements.

use crate::chart::FiveElement;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    Parallel,
    AGeneratesB,
    BGeneratesA,
    ARestrictsB,
    BRestrictsA,
}

impl ElementRelation {
    /// Fixed base compatibility of each relation.
    pub fn base_compatibility(self) -> f64 {
        match self {
            ElementRelation::Parallel => 0.60,
            ElementRelation::AGeneratesB | ElementRelation::BGeneratesA => 0.85,
            ElementRelation::ARestrictsB | ElementRelation::BRestrictsA => 0.50,
        }
    }

    pub fn is_generating(self) -> bool {
        matches!(self, ElementRelation::AGeneratesB | ElementRelation::BGeneratesA)
    }

    pub fn is_restricting(self) -> bool {
        matches!(self, ElementRelation::ARestrictsB | ElementRelation::BRestrictsA)
    }

    /// The same relation seen with the two people swapped.
    pub fn swapped(self) -> Self {
        match self {
            ElementRelation::Parallel => ElementRelation::Parallel,
            ElementRelation::AGeneratesB => ElementRelation::BGeneratesA,
            ElementRelation::BGeneratesA => ElementRelation::AGeneratesB,
            ElementRelation::ARestrictsB => ElementRelation::BRestrictsA,
            ElementRelation::BRestrictsA => ElementRelation::ARestrictsB,
        }
    }
}

/// Element that `element` generates (feeds).
pub fn generates(element: FiveElement) -> FiveElement {
    match element {
        FiveElement::Wood => FiveElement::Fire,
        FiveElement::Fire => FiveElement::Earth,
        FiveElement::Earth => FiveElement::Metal,
        FiveElement::Metal => FiveElement::Water,
        FiveElement::Water => FiveElement::Wood,
    }
}

/// Element that `element` restricts (controls).
pub fn restricts(element: FiveElement) -> FiveElement {
    match element {
        FiveElement::Wood => FiveElement::Earth,
        FiveElement::Earth => FiveElement::Water,
        FiveElement::Water => FiveElement::Fire,
        FiveElement::Fire => FiveElement::Metal,
        FiveElement::Metal => FiveElement::Wood,
    }
}

pub fn element_relation(a: FiveElement, b: FiveElement) -> ElementRelation {
    if a == b {
        ElementRelation::Parallel
    } else if generates(a) == b {
        ElementRelation::AGeneratesB
    } else if generates(b) == a {
        ElementRelation::BGeneratesA
    } else if restricts(a) == b {
        ElementRelation::ARestrictsB
    } else {
        // Two distinct elements are either adjacent in the generation cycle
        // or adjacent in the restriction cycle.
        ElementRelation::BRestrictsA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FiveElement; 5] = [
        FiveElement::Wood,
        FiveElement::Fire,
        FiveElement::Earth,
        FiveElement::Metal,
        FiveElement::Water,
    ];

    #[test]
    fn test_relations() {
        assert_eq!(element_relation(FiveElement::Wood, FiveElement::Wood), ElementRelation::Parallel);
        assert_eq!(element_relation(FiveElement::Wood, FiveElement::Fire), ElementRelation::AGeneratesB);
        assert_eq!(element_relation(FiveElement::Fire, FiveElement::Wood), ElementRelation::BGeneratesA);
        assert_eq!(element_relation(FiveElement::Water, FiveElement::Fire), ElementRelation::ARestrictsB);
        assert_eq!(element_relation(FiveElement::Wood, FiveElement::Metal), ElementRelation::BRestrictsA);
    }

    #[test]
    fn test_swap_consistency() {
        for a in ALL {
            for b in ALL {
                assert_eq!(element_relation(a, b).swapped(), element_relation(b, a));
            }
        }
    }

    #[test]
    fn test_base_compatibility() {
        assert_eq!(ElementRelation::Parallel.base_compatibility(), 0.60);
        assert_eq!(ElementRelation::BGeneratesA.base_compatibility(), 0.85);
        assert_eq!(ElementRelation::ARestrictsB.base_compatibility(), 0.50);
    }
}
