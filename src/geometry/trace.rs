use std::cmp::Ordering;

use crate::math::compare::compare;
use crate::math::{Vertex, EPSILON};

/// Whether a query point coincident with a shape's own endpoint counts as
/// contained or intersecting.
///
/// Passed explicitly into every containment and intersection query; there
/// is no ambient default beyond [`EndpointPolicy::Include`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointPolicy {
    /// Endpoints are part of the shape.
    #[default]
    Include,
    /// Endpoints are open: a coincident point does not count.
    Exclude,
}

impl EndpointPolicy {
    /// True when endpoints count as contained.
    #[must_use]
    pub fn includes_endpoints(self) -> bool {
        matches!(self, Self::Include)
    }
}

/// Slope of the carrier through `a` and `b`.
///
/// A delta with magnitude at or below tolerance is substituted with
/// `EPSILON / 10`, so axis-aligned carriers report a tiny positive slope
/// instead of zero or infinity. The substitute is always positive, which
/// biases near-vertical slopes toward one sign.
#[must_use]
pub fn slope_between(a: &Vertex, b: &Vertex) -> f64 {
    let num = if (b.y - a.y).abs() > EPSILON {
        b.y - a.y
    } else {
        EPSILON / 10.0
    };
    let den = if (b.x - a.x).abs() > EPSILON {
        b.x - a.x
    } else {
        EPSILON / 10.0
    };
    num / den
}

/// Tolerant coincidence test on the planar components of two vertices.
#[must_use]
pub fn points_coincide(a: &Vertex, b: &Vertex) -> bool {
    compare(a.x, b.x) == Ordering::Equal && compare(a.y, b.y) == Ordering::Equal
}

/// A directed pair of endpoints carrying a line, segment, or ray.
///
/// Direction matters for [`Ray`](crate::geometry::Ray), where `start` is
/// the apex; lines and segments treat their endpoints as interchangeable
/// for containment.
pub trait Trace {
    /// First endpoint.
    fn start(&self) -> &Vertex;

    /// Second endpoint.
    fn end(&self) -> &Vertex;

    /// Whether `p` lies on the shape under the given endpoint policy.
    fn contains_point(&self, p: &Vertex, policy: EndpointPolicy) -> bool;

    /// Whether this shape intersects another of the same kind.
    fn intersects(&self, other: &Self, policy: EndpointPolicy) -> bool
    where
        Self: Sized;

    /// Slope of the underlying carrier. See [`slope_between`].
    fn slope(&self) -> f64 {
        slope_between(self.start(), self.end())
    }

    /// Whether two carriers have equal slope within tolerance.
    fn is_parallel_to<T: Trace + ?Sized>(&self, other: &T) -> bool {
        (self.slope() - other.slope()).abs() < EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vertex;

    #[test]
    fn slope_of_diagonal() {
        let s = slope_between(&vertex(0.0, 0.0), &vertex(2.0, 2.0));
        assert!((s - 1.0).abs() < 1e-9, "s={s}");
    }

    #[test]
    fn horizontal_slope_is_substituted_not_zero() {
        let s = slope_between(&vertex(0.0, 1.0), &vertex(4.0, 1.0));
        assert!(s > 0.0);
        assert!(s < EPSILON, "s={s}");
    }

    #[test]
    fn vertical_slope_is_finite() {
        let s = slope_between(&vertex(1.0, 0.0), &vertex(1.0, 4.0));
        assert!(s.is_finite());
        assert!(s > 1.0 / EPSILON, "s={s}");
    }

    #[test]
    fn coincidence_is_tolerant_on_xy_only() {
        let a = vertex(1.0, 2.0);
        let b = Vertex::new(1.0 + EPSILON / 2.0, 2.0, 9.0, 9.0);
        assert!(points_coincide(&a, &b));
        assert!(!points_coincide(&a, &vertex(1.0, 2.0 + 2.0 * EPSILON)));
    }

    #[test]
    fn default_policy_includes_endpoints() {
        assert!(EndpointPolicy::default().includes_endpoints());
        assert!(!EndpointPolicy::Exclude.includes_endpoints());
    }
}
