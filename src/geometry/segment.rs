use std::cmp::Ordering;

use crate::error::{GeometryError, Result};
use crate::math::compare::compare;
use crate::math::{distance, Vertex};

use super::line::Line;
use super::orient::{ccw, Orientation};
use super::ray::Ray;
use super::trace::{points_coincide, EndpointPolicy, Trace};

/// A bounded segment between two endpoints.
#[derive(Debug, Clone)]
pub struct LineSegment {
    start: Vertex,
    end: Vertex,
}

/// Inclusive between-test over two endpoint comparisons against the same
/// query coordinate, accepting either endpoint order.
fn bounded_by(cmp_a: Ordering, cmp_b: Ordering) -> bool {
    (cmp_a != Ordering::Greater && cmp_b != Ordering::Less)
        || (cmp_b != Ordering::Greater && cmp_a != Ordering::Less)
}

impl LineSegment {
    /// Creates a segment between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide within tolerance.
    pub fn new(a: Vertex, b: Vertex) -> Result<Self> {
        if points_coincide(&a, &b) {
            return Err(GeometryError::DegenerateTrace { x: a.x, y: a.y });
        }
        Ok(Self { start: a, end: b })
    }

    /// Unvalidated constructor for endpoints already known distinct.
    pub(crate) fn spanning(a: Vertex, b: Vertex) -> Self {
        Self { start: a, end: b }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.start, &self.end)
    }

    /// Arithmetic mean of the endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Vertex {
        (self.start + self.end) / 2.0
    }

    /// Whether the segment crosses an infinite line.
    #[must_use]
    pub fn intersects_line(&self, line: &Line, policy: EndpointPolicy) -> bool {
        line.intersects_trace(self, policy)
    }

    /// Whether the segment crosses a ray.
    #[must_use]
    pub fn intersects_ray(&self, ray: &Ray, policy: EndpointPolicy) -> bool {
        ray.intersects_segment(self, policy)
    }
}

impl Trace for LineSegment {
    fn start(&self) -> &Vertex {
        &self.start
    }

    fn end(&self) -> &Vertex {
        &self.end
    }

    /// A point lies on the segment when it is collinear with the endpoints
    /// and its coordinate falls inclusively between them on the
    /// non-degenerate axis (X unless the endpoints share an X coordinate).
    fn contains_point(&self, p: &Vertex, policy: EndpointPolicy) -> bool {
        if !policy.includes_endpoints()
            && (points_coincide(p, &self.start) || points_coincide(p, &self.end))
        {
            return false;
        }
        if ccw(&self.start, p, &self.end) != Orientation::Collinear {
            return false;
        }
        if compare(self.start.x, self.end.x) == Ordering::Equal {
            bounded_by(compare(self.start.y, p.y), compare(self.end.y, p.y))
        } else {
            bounded_by(compare(self.start.x, p.x), compare(self.end.x, p.x))
        }
    }

    fn intersects(&self, other: &Self, policy: EndpointPolicy) -> bool {
        // Any shared endpoint resolves to the policy alone.
        if points_coincide(&other.start, &self.start)
            || points_coincide(&other.start, &self.end)
            || points_coincide(&other.end, &self.start)
            || points_coincide(&other.end, &self.end)
        {
            return policy.includes_endpoints();
        }

        let la = Line::through(self);
        let lb = Line::through(other);
        if la.is_parallel_to(&lb) && la.intersects(&lb, policy) {
            // Coincident carriers: overlap iff either endpoint is inside.
            return self.contains_point(&other.start, policy)
                || self.contains_point(&other.end, policy);
        }

        let d1 = ccw(&self.start, &self.end, &other.start).as_sign()
            * ccw(&self.start, &self.end, &other.end).as_sign();
        let d2 = ccw(&other.start, &other.end, &self.start).as_sign()
            * ccw(&other.start, &other.end, &self.end).as_sign();
        d1 <= 0 && d2 <= 0
    }
}
