//! Cross-chart mutual reception: each point sits in a sign ruled by the other.

use crate::chart::{rules, ChartProfile, Point};
use crate::result::Axis;

pub const RECEPTION_FRACTION: f64 = 0.22;

/// Point pairs checked for reception, with the axis each one lifts.
const RECEPTION_PAIRS: [(Point, Point, Axis); 3] = [
    (Point::Sun, Point::Moon, Axis::Depth),
    (Point::Venus, Point::Mars, Axis::Physical),
    (Point::Moon, Point::Venus, Axis::Depth),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Reception {
    pub pair: (Point, Point),
    pub axis: Axis,
    pub badge: String,
}

impl Reception {
    pub fn apply(&self, value: f64) -> f64 {
        crate::scoring::marginal(value, RECEPTION_FRACTION)
    }
}

/// `x.first` in a sign ruled by `second`, and `y.second` in a sign ruled by `first`.
fn received(x: &ChartProfile, first: Point, y: &ChartProfile, second: Point) -> bool {
    match (x.sign(first), y.sign(second)) {
        (Some(sx), Some(sy)) => rules(second, sx) && rules(first, sy),
        _ => false,
    }
}

/// One entry per distinct pair in reception, in either orientation.
pub fn mutual_receptions(a: &ChartProfile, b: &ChartProfile) -> Vec<Reception> {
    RECEPTION_PAIRS
        .iter()
        .filter(|(first, second, _)| {
            received(a, *first, b, *second) || received(b, *first, a, *second)
        })
        .map(|(first, second, axis)| Reception {
            pair: (*first, *second),
            axis: *axis,
            badge: format!("mutual_reception_{}_{}", first.as_str(), second.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{FiveElement, Sign, Tier};

    #[test]
    fn test_venus_mars_reception() {
        // A's Venus in Aries (Mars-ruled), B's Mars in Libra (Venus-ruled).
        let a = ChartProfile::new(Tier::DateOnly, FiveElement::Wood).with_sign(Point::Venus, Sign::Aries);
        let b = ChartProfile::new(Tier::DateOnly, FiveElement::Wood).with_sign(Point::Mars, Sign::Libra);
        let found = mutual_receptions(&a, &b);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].axis, Axis::Physical);
        assert_eq!(found[0].badge, "mutual_reception_venus_mars");
        assert_eq!(mutual_receptions(&b, &a), found);
    }

    #[test]
    fn test_one_sided_is_not_reception() {
        let a = ChartProfile::new(Tier::DateOnly, FiveElement::Wood).with_sign(Point::Sun, Sign::Cancer);
        let b = ChartProfile::new(Tier::DateOnly, FiveElement::Wood).with_sign(Point::Moon, Sign::Aries);
        assert!(mutual_receptions(&a, &b).is_empty());
    }

    #[test]
    fn test_apply_is_marginal() {
        let r = Reception {
            pair: (Point::Sun, Point::Moon),
            axis: Axis::Depth,
            badge: String::new(),
        };
        assert!((r.apply(50.0) - 61.0).abs() < 1e-9);
    }
}
