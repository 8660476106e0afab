//! Branch relations between day markers and the seasonal complement of
//! month markers.

use crate::chart::Branch;
use crate::result::Track;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchRelation {
    Clash,
    Punishment,
    Harm,
    Neutral,
}

/// Multipliers a branch relation applies to the four tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchTrackModifier {
    pub sociable: f64,
    pub passionate: f64,
    pub partner: f64,
    pub soul: f64,
}

impl BranchTrackModifier {
    pub const IDENTITY: Self = Self {
        sociable: 1.0,
        passionate: 1.0,
        partner: 1.0,
        soul: 1.0,
    };

    pub fn get(&self, track: Track) -> f64 {
        match track {
            Track::Sociable => self.sociable,
            Track::Passionate => self.passionate,
            Track::Partner => self.partner,
            Track::Soul => self.soul,
        }
    }
}

const CLASH_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Zi, Branch::Wu),
    (Branch::Chou, Branch::Wei),
    (Branch::Yin, Branch::Shen),
    (Branch::Mao, Branch::You),
    (Branch::Chen, Branch::Xu),
    (Branch::Si, Branch::Hai),
];

const PUNISHMENT_TRIADS: [[Branch; 3]; 2] = [
    [Branch::Yin, Branch::Si, Branch::Shen],
    [Branch::Chou, Branch::Xu, Branch::Wei],
];

const SELF_PUNISHMENT: [Branch; 4] = [Branch::Chen, Branch::Wu, Branch::You, Branch::Hai];

const HARM_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Zi, Branch::Wei),
    (Branch::Chou, Branch::Wu),
    (Branch::Yin, Branch::Si),
    (Branch::Mao, Branch::Chen),
    (Branch::Shen, Branch::Hai),
    (Branch::You, Branch::Xu),
];

fn in_pairs(pairs: &[(Branch, Branch)], a: Branch, b: Branch) -> bool {
    pairs
        .iter()
        .any(|(x, y)| (*x == a && *y == b) || (*x == b && *y == a))
}

fn is_punishment(a: Branch, b: Branch) -> bool {
    if a == b {
        return SELF_PUNISHMENT.contains(&a);
    }
    PUNISHMENT_TRIADS
        .iter()
        .any(|triad| triad.contains(&a) && triad.contains(&b))
}

/// Classify two day markers. Checked in priority order clash, punishment, harm.
pub fn branch_relation(a: Option<Branch>, b: Option<Branch>) -> BranchRelation {
    let (Some(a), Some(b)) = (a, b) else {
        return BranchRelation::Neutral;
    };
    if in_pairs(&CLASH_PAIRS, a, b) {
        BranchRelation::Clash
    } else if is_punishment(a, b) {
        BranchRelation::Punishment
    } else if in_pairs(&HARM_PAIRS, a, b) {
        BranchRelation::Harm
    } else {
        BranchRelation::Neutral
    }
}

impl BranchRelation {
    pub fn track_modifier(self) -> BranchTrackModifier {
        match self {
            BranchRelation::Clash => BranchTrackModifier {
                passionate: 1.25,
                partner: 0.70,
                ..BranchTrackModifier::IDENTITY
            },
            BranchRelation::Punishment => BranchTrackModifier {
                soul: 1.15,
                passionate: 0.60,
                ..BranchTrackModifier::IDENTITY
            },
            BranchRelation::Harm => BranchTrackModifier {
                sociable: 0.60,
                partner: 0.50,
                ..BranchTrackModifier::IDENTITY
            },
            BranchRelation::Neutral => BranchTrackModifier::IDENTITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

pub fn season(branch: Branch) -> Season {
    match branch {
        Branch::Yin | Branch::Mao | Branch::Chen => Season::Spring,
        Branch::Si | Branch::Wu | Branch::Wei => Season::Summer,
        Branch::Shen | Branch::You | Branch::Xu => Season::Autumn,
        Branch::Hai | Branch::Zi | Branch::Chou => Season::Winter,
    }
}

pub const SEASONAL_NEUTRAL: f64 = 0.5;

/// How well two birth seasons balance each other, 0–1.
pub fn seasonal_complement(a: Option<Branch>, b: Option<Branch>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return SEASONAL_NEUTRAL;
    };
    let (sa, sb) = (season(a) as i8, season(b) as i8);
    match (sa - sb).rem_euclid(4) {
        0 => 0.3,
        2 => 1.0,
        _ => 0.6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clash_pairs() {
        for branch in Branch::ALL {
            let opposite = Branch::ALL[((branch.index() + 6) % 12) as usize];
            assert_eq!(branch_relation(Some(branch), Some(opposite)), BranchRelation::Clash);
        }
    }

    #[test]
    fn test_priority_clash_over_punishment() {
        // Yin-Shen is both a clash and inside a punishment triad.
        assert_eq!(branch_relation(Some(Branch::Yin), Some(Branch::Shen)), BranchRelation::Clash);
        // Yin-Si is both a punishment and a harm pair.
        assert_eq!(branch_relation(Some(Branch::Yin), Some(Branch::Si)), BranchRelation::Punishment);
    }

    #[test]
    fn test_self_punishment() {
        assert_eq!(branch_relation(Some(Branch::Wu), Some(Branch::Wu)), BranchRelation::Punishment);
        assert_eq!(branch_relation(Some(Branch::Zi), Some(Branch::Zi)), BranchRelation::Neutral);
    }

    #[test]
    fn test_harm_and_neutral() {
        assert_eq!(branch_relation(Some(Branch::Zi), Some(Branch::Wei)), BranchRelation::Harm);
        assert_eq!(branch_relation(Some(Branch::Zi), Some(Branch::Chou)), BranchRelation::Neutral);
        assert_eq!(branch_relation(None, Some(Branch::Wu)), BranchRelation::Neutral);
    }

    #[test]
    fn test_seasonal_complement() {
        assert_eq!(seasonal_complement(Some(Branch::Wu), Some(Branch::Zi)), 1.0);
        assert_eq!(seasonal_complement(Some(Branch::Wu), Some(Branch::Wei)), 0.3);
        assert_eq!(seasonal_complement(Some(Branch::Wu), Some(Branch::Mao)), 0.6);
        assert_eq!(seasonal_complement(None, Some(Branch::Mao)), SEASONAL_NEUTRAL);
    }
}
