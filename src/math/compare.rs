use std::cmp::Ordering;

use super::EPSILON;

/// Three-way comparison of two reals under the global tolerance.
///
/// Values closer than [`EPSILON`] compare equal. At the boundary
/// `|a - b| == EPSILON` the native ordering decides; the result is never
/// `Equal` there. Note that this relation is not transitive near tolerance
/// boundaries: three values each pairwise within tolerance of an
/// epsilon-separated neighbor can still order strictly.
#[must_use]
pub fn compare(a: f64, b: f64) -> Ordering {
    let d = (a - b).abs();
    if d < EPSILON {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Tolerant minimum: returns `a` when the values compare equal.
#[must_use]
pub fn min(a: f64, b: f64) -> f64 {
    if compare(a, b) == Ordering::Greater {
        b
    } else {
        a
    }
}

/// Tolerant maximum: returns `a` when the values compare equal.
#[must_use]
pub fn max(a: f64, b: f64) -> f64 {
    if compare(a, b) == Ordering::Less {
        b
    } else {
        a
    }
}

/// Sign of `z` as a factor. Zero is treated as positive.
#[must_use]
pub fn sign(z: f64) -> f64 {
    if z < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Magnitude of `x` with the sign of `y`.
#[must_use]
pub fn copysign(x: f64, y: f64) -> f64 {
    x.abs() * sign(y)
}
