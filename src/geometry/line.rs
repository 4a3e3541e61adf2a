use std::cmp::Ordering;

use crate::error::{GeometryError, Result};
use crate::math::compare::compare;
use crate::math::{vertex, Vector2, Vertex};

use super::segment::LineSegment;
use super::trace::{points_coincide, slope_between, EndpointPolicy, Trace};

/// An infinite line through two points.
///
/// Containment and intersection are slope-based, so axis-aligned lines
/// inherit the tiny-slope substitution from [`slope_between`].
#[derive(Debug, Clone)]
pub struct Line {
    start: Vertex,
    end: Vertex,
}

impl Line {
    /// Creates a line through `a` and `b`.
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

    /// Carrier line over another trace's endpoints. The endpoints are
    /// known distinct because the source shape was validated.
    pub(crate) fn through<T: Trace + ?Sized>(t: &T) -> Self {
        Self {
            start: *t.start(),
            end: *t.end(),
        }
    }

    /// Whether `p` lies on the line: the bridge from the line's start to
    /// `p` must have the same slope as the line itself.
    fn has_point(&self, p: &Vertex) -> bool {
        let bridge = slope_between(&self.start, p);
        compare(self.slope(), bridge) == Ordering::Equal
    }

    /// X and Y intercepts as `(x, y)`.
    #[must_use]
    pub fn intercepts(&self) -> Vector2 {
        let y = self.start.y - self.slope() * self.start.x;
        let x = -y / self.slope();
        Vector2::new(x, y)
    }

    /// Crossing point with another line.
    ///
    /// Distinct parallel lines yield `None`. Coincident parallel lines
    /// cross everywhere; the other line's start point stands in for the
    /// crossing.
    #[must_use]
    pub fn intersection(&self, other: &Line) -> Option<Vertex> {
        if self.is_parallel_to(other) && !self.has_point(other.end()) {
            return None;
        }
        let d_slope = self.slope() - other.slope();
        if compare(d_slope, 0.0) == Ordering::Equal {
            return Some(other.start);
        }
        let x = (other.intercepts().y - self.intercepts().y) / d_slope;
        let y = self.slope() * x + self.intercepts().y;
        Some(vertex(x, y))
    }

    /// Whether the line crosses another trace of any kind: the carrier
    /// lines must cross at a point the other trace contains.
    #[must_use]
    pub fn intersects_trace<T: Trace>(&self, other: &T, policy: EndpointPolicy) -> bool {
        let carrier = Line::through(other);
        match self.intersection(&carrier) {
            Some(p) => other.contains_point(&p, policy),
            None => false,
        }
    }

    /// The bounded segment between the line's defining points.
    #[must_use]
    pub fn segment(&self) -> LineSegment {
        LineSegment::spanning(self.start, self.end)
    }

    /// Whether both segment endpoints lie on the line.
    #[must_use]
    pub fn has_segment(&self, seg: &LineSegment) -> bool {
        self.has_point(seg.start()) && self.has_point(seg.end())
    }
}

impl Trace for Line {
    fn start(&self) -> &Vertex {
        &self.start
    }

    fn end(&self) -> &Vertex {
        &self.end
    }

    fn contains_point(&self, p: &Vertex, _policy: EndpointPolicy) -> bool {
        self.has_point(p)
    }

    fn intersects(&self, other: &Self, _policy: EndpointPolicy) -> bool {
        if self.is_parallel_to(other) {
            self.has_point(other.end())
        } else {
            true
        }
    }
}
