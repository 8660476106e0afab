//! Chart vocabulary and the per-person profile consumed by the engine.
//!
//! Profiles are produced by the chart collaborators (ephemeris, four-pillar and
//! palace builders) and are read-only here. Every optional field may be absent.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Completeness of a person's birth data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Exact birth time: degrees, ascendant and house cusps are reliable.
    Exact,
    /// Approximate time slot: degrees are usable, houses are not.
    Approximate,
    /// Date only.
    DateOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const SIGN_ORDER: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    pub const ALL: [Sign; 12] = SIGN_ORDER;

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Sign {
        SIGN_ORDER[(index % 12) as usize]
    }

    /// Sign containing an ecliptic longitude (any real value, wrapped to 0–360).
    pub fn from_longitude(longitude: f64) -> Sign {
        let lon = longitude.rem_euclid(360.0);
        Sign::from_index((lon / 30.0) as u8)
    }

    pub fn element(self) -> WesternElement {
        match self.index() % 4 {
            0 => WesternElement::Fire,
            1 => WesternElement::Earth,
            2 => WesternElement::Air,
            _ => WesternElement::Water,
        }
    }
}

/// Tracked chart points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Point {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Wound / healer point.
    Chiron,
    /// Commitment point.
    Juno,
    Ascendant,
}

impl Point {
    pub const GENERATIONAL: [Point; 3] = [Point::Uranus, Point::Neptune, Point::Pluto];

    pub fn as_str(self) -> &'static str {
        match self {
            Point::Sun => "sun",
            Point::Moon => "moon",
            Point::Mercury => "mercury",
            Point::Venus => "venus",
            Point::Mars => "mars",
            Point::Jupiter => "jupiter",
            Point::Saturn => "saturn",
            Point::Uranus => "uranus",
            Point::Neptune => "neptune",
            Point::Pluto => "pluto",
            Point::Chiron => "chiron",
            Point::Juno => "juno",
            Point::Ascendant => "ascendant",
        }
    }
}

/// House cusps used by the engine. Only honoured at [`Tier::Exact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseCusp {
    House4,
    House8,
    House12,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WesternElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl WesternElement {
    pub const ALL: [WesternElement; 4] = [
        WesternElement::Fire,
        WesternElement::Earth,
        WesternElement::Air,
        WesternElement::Water,
    ];
}

/// The five symbolic elements of the four-pillar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// The twelve branches used for day and month markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    Disorganized,
}

/// Self-reported preference for leading or following.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominancePreference {
    Lead,
    Follow,
    Flexible,
}

/// Self-reported conflict style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictStyle {
    Confront,
    Yield,
    Negotiate,
}

/// Position data for one point. Either half may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointPosition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Sign>,
    /// Ecliptic longitude in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrograde: Option<bool>,
}

/// Count of chart points per Western element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementBalance {
    #[serde(default)]
    pub fire: u8,
    #[serde(default)]
    pub earth: u8,
    #[serde(default)]
    pub air: u8,
    #[serde(default)]
    pub water: u8,
}

/// Minimum count for an element to be considered dominant.
pub const DOMINANT_MIN_COUNT: u8 = 3;
/// Maximum count for an element to be considered deficient.
pub const DEFICIENT_MAX_COUNT: u8 = 1;

impl ElementBalance {
    pub fn count(&self, element: WesternElement) -> u8 {
        match element {
            WesternElement::Fire => self.fire,
            WesternElement::Earth => self.earth,
            WesternElement::Air => self.air,
            WesternElement::Water => self.water,
        }
    }

    /// Elements at the highest count, provided that count reaches [`DOMINANT_MIN_COUNT`].
    pub fn dominant(&self) -> Vec<WesternElement> {
        let max = WesternElement::ALL
            .iter()
            .map(|e| self.count(*e))
            .max()
            .unwrap_or(0);
        if max < DOMINANT_MIN_COUNT {
            return Vec::new();
        }
        WesternElement::ALL
            .iter()
            .copied()
            .filter(|e| self.count(*e) == max)
            .collect()
    }

    pub fn deficient(&self) -> Vec<WesternElement> {
        WesternElement::ALL
            .iter()
            .copied()
            .filter(|e| self.count(*e) <= DEFICIENT_MAX_COUNT)
            .collect()
    }
}

/// Chart data for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartProfile {
    pub tier: Tier,
    pub dominant_element: FiveElement,
    #[serde(default)]
    pub points: HashMap<Point, PointPosition>,
    /// House cusp longitudes, only populated for exact birth times.
    #[serde(default)]
    pub cusps: HashMap<HouseCusp, f64>,
    #[serde(default)]
    pub day_branch: Option<Branch>,
    #[serde(default)]
    pub month_branch: Option<Branch>,
    #[serde(default)]
    pub attachment: Option<AttachmentStyle>,
    /// Emotional capacity, 0–100.
    #[serde(default)]
    pub emotional_capacity: Option<f64>,
    #[serde(default)]
    pub element_balance: Option<ElementBalance>,
    #[serde(default)]
    pub dominance: Option<DominancePreference>,
    #[serde(default)]
    pub conflict_style: Option<ConflictStyle>,
}

impl ChartProfile {
    pub fn new(tier: Tier, dominant_element: FiveElement) -> Self {
        Self {
            tier,
            dominant_element,
            points: HashMap::new(),
            cusps: HashMap::new(),
            day_branch: None,
            month_branch: None,
            attachment: None,
            emotional_capacity: None,
            element_balance: None,
            dominance: None,
            conflict_style: None,
        }
    }

    pub fn with_sign(mut self, point: Point, sign: Sign) -> Self {
        self.points.entry(point).or_default().sign = Some(sign);
        self
    }

    /// Set an exact longitude; the sign label is filled in when missing and
    /// the longitude is finite.
    pub fn with_degree(mut self, point: Point, degree: f64) -> Self {
        let entry = self.points.entry(point).or_default();
        entry.degree = Some(degree);
        if entry.sign.is_none() && degree.is_finite() {
            entry.sign = Some(Sign::from_longitude(degree));
        }
        self
    }

    pub fn with_retrograde(mut self, point: Point, retrograde: bool) -> Self {
        self.points.entry(point).or_default().retrograde = Some(retrograde);
        self
    }

    pub fn with_cusp(mut self, cusp: HouseCusp, degree: f64) -> Self {
        self.cusps.insert(cusp, degree);
        self
    }

    pub fn with_day_branch(mut self, branch: Branch) -> Self {
        self.day_branch = Some(branch);
        self
    }

    pub fn with_month_branch(mut self, branch: Branch) -> Self {
        self.month_branch = Some(branch);
        self
    }

    pub fn with_attachment(mut self, style: AttachmentStyle) -> Self {
        self.attachment = Some(style);
        self
    }

    pub fn with_emotional_capacity(mut self, capacity: f64) -> Self {
        self.emotional_capacity = Some(capacity);
        self
    }

    pub fn with_element_balance(mut self, balance: ElementBalance) -> Self {
        self.element_balance = Some(balance);
        self
    }

    pub fn with_dominance(mut self, dominance: DominancePreference) -> Self {
        self.dominance = Some(dominance);
        self
    }

    pub fn with_conflict_style(mut self, style: ConflictStyle) -> Self {
        self.conflict_style = Some(style);
        self
    }

    /// Sign of a point: the stated label, else derived from its degree.
    pub fn sign(&self, point: Point) -> Option<Sign> {
        let pos = self.points.get(&point)?;
        pos.sign.or_else(|| self.degree(point).map(Sign::from_longitude))
    }

    /// Exact longitude of a point, normalized to [0, 360).
    pub fn degree(&self, point: Point) -> Option<f64> {
        self.points
            .get(&point)
            .and_then(|p| p.degree)
            .filter(|d| d.is_finite())
            .map(|d| d.rem_euclid(360.0))
    }

    pub fn is_retrograde(&self, point: Point) -> bool {
        self.points
            .get(&point)
            .and_then(|p| p.retrograde)
            .unwrap_or(false)
    }

    /// True when either the sign or the degree of a point is known.
    pub fn has_point(&self, point: Point) -> bool {
        self.sign(point).is_some()
    }

    pub fn has_exact_time(&self) -> bool {
        self.tier == Tier::Exact
    }

    /// House cusp longitude. Ignored below [`Tier::Exact`].
    pub fn cusp(&self, cusp: HouseCusp) -> Option<f64> {
        if !self.has_exact_time() {
            return None;
        }
        self.cusps
            .get(&cusp)
            .copied()
            .filter(|d| d.is_finite())
            .map(|d| d.rem_euclid(360.0))
    }

    /// Ascendant degree, only trusted with an exact birth time.
    pub fn ascendant(&self) -> Option<f64> {
        if self.has_exact_time() {
            self.degree(Point::Ascendant)
        } else {
            None
        }
    }
}
