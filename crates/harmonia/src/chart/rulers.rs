//! Sign rulers for Western astrology.
//!
//! Traditional rulerships only; mutual reception is judged on the seven
//! classical points.

use crate::chart::types::{Point, Sign};

const TRADITIONAL_RULERS: [Point; 12] = [
    Point::Mars,    // Aries
    Point::Venus,   // Taurus
    Point::Mercury, // Gemini
    Point::Moon,    // Cancer
    Point::Sun,     // Leo
    Point::Mercury, // Virgo
    Point::Venus,   // Libra
    Point::Mars,    // Scorpio
    Point::Jupiter, // Sagittarius
    Point::Saturn,  // Capricorn
    Point::Saturn,  // Aquarius
    Point::Jupiter, // Pisces
];

/// Traditional ruler of a sign.
pub fn sign_ruler(sign: Sign) -> Point {
    TRADITIONAL_RULERS[sign.index() as usize]
}

/// Whether `point` rules `sign`.
pub fn rules(point: Point, sign: Sign) -> bool {
    sign_ruler(sign) == point
}
