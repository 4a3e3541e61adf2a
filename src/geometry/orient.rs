use std::cmp::Ordering;

use crate::math::compare::compare;
use crate::math::Vertex;

/// Signed orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Orientation as a factor: -1 clockwise, 0 collinear, +1 counterclockwise.
    #[must_use]
    pub fn as_sign(self) -> i8 {
        match self {
            Self::Collinear => 0,
            Self::Clockwise => -1,
            Self::CounterClockwise => 1,
        }
    }
}

/// Classifies `a`, `b`, `c` by the sign of the cross product
/// `(b - a) × (c - a)`.
///
/// The sign is taken through the tolerant comparator, so near-collinear
/// triples resolve to [`Orientation::Collinear`].
#[must_use]
pub fn ccw(a: &Vertex, b: &Vertex, c: &Vertex) -> Orientation {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    match compare(cross, 0.0) {
        Ordering::Equal => Orientation::Collinear,
        Ordering::Less => Orientation::Clockwise,
        Ordering::Greater => Orientation::CounterClockwise,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vertex;

    #[test]
    fn left_turn_is_counterclockwise() {
        let o = ccw(&vertex(0.0, 0.0), &vertex(1.0, 0.0), &vertex(1.0, 1.0));
        assert_eq!(o, Orientation::CounterClockwise);
        assert_eq!(o.as_sign(), 1);
    }

    #[test]
    fn right_turn_is_clockwise() {
        let o = ccw(&vertex(0.0, 0.0), &vertex(1.0, 0.0), &vertex(1.0, -1.0));
        assert_eq!(o, Orientation::Clockwise);
        assert_eq!(o.as_sign(), -1);
    }

    #[test]
    fn collinear_triple() {
        let o = ccw(&vertex(0.0, 0.0), &vertex(1.0, 1.0), &vertex(3.0, 3.0));
        assert_eq!(o, Orientation::Collinear);
        assert_eq!(o.as_sign(), 0);
    }

    #[test]
    fn near_collinear_resolves_collinear() {
        // Cross product magnitude stays under tolerance.
        let o = ccw(
            &vertex(0.0, 0.0),
            &vertex(1.0, 0.0),
            &vertex(2.0, 1e-7),
        );
        assert_eq!(o, Orientation::Collinear);
    }
}
