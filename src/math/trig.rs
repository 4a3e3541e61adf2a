//! Trigonometric kernel.
//!
//! `sin` and `cos` are alternating Taylor series with range reduction into
//! `[-2π, 2π]`; `atan` is a fixed minimax polynomial in `x²`; everything
//! else is derived algebraically from those three.

use std::f64::consts::{E, FRAC_PI_2, PI, TAU};

use super::compare::copysign;
use super::series::powf;
use super::CUTOFF;

/// Minimax coefficients for `atan` on `[-1, 1]`, highest degree first.
/// The final entry is π/2, used by the reciprocal identity for `|x| > 1`.
#[allow(clippy::unreadable_literal)]
const ATAN_COEFFS: [f64; 20] = [
    2.0258553044438107e-5,
    0.0002230224034575828,
    0.0011640717779930478,
    0.0038559749383629666,
    0.009184559218716503,
    0.016978035834597276,
    0.025826796814495942,
    0.03406781108271508,
    0.04092638242050995,
    0.04673949619915799,
    0.05239233005460132,
    0.05877307772179085,
    0.06665860363351257,
    0.07692212930586784,
    0.09090901235400523,
    0.11111110678749424,
    0.14285714271334815,
    0.1999999999975502,
    0.3333333333333186,
    1.5707963267948966,
];

/// Shifts `a` by whole turns until it lies within `[-2π, 2π]`.
/// Non-finite angles pass through unchanged.
#[must_use]
pub fn reduce(mut a: f64) -> f64 {
    while a.is_finite() && a > TAU {
        a -= TAU;
    }
    while a.is_finite() && a < -TAU {
        a += TAU;
    }
    a
}

/// Cosine by alternating Taylor series, starting at the constant term.
///
/// Terms carry forward by the ratio `-a²/((r+1)(r+2))`; a term below the
/// cutoff, or non-finite, ends accumulation.
#[must_use]
pub fn cos(a: f64) -> f64 {
    let a = reduce(a);
    let mut sum = 1.0;
    let mut term = -(a * a) / 2.0;
    let mut r = 2.0;
    while term.is_finite() && term.abs() > CUTOFF {
        sum += term;
        term *= -(a * a) / ((r + 1.0) * (r + 2.0));
        r += 2.0;
    }
    sum
}

/// Sine by alternating Taylor series, starting at the linear term.
#[must_use]
pub fn sin(a: f64) -> f64 {
    let a = reduce(a);
    let mut sum = a;
    let mut term = -(a * a) * a / 6.0;
    let mut r = 3.0;
    while term.is_finite() && term.abs() > CUTOFF {
        sum += term;
        term *= -(a * a) / ((r + 1.0) * (r + 2.0));
        r += 2.0;
    }
    sum
}

/// Arcsine by the binomial series `Σ C(2n,n)/(4ⁿ(2n+1)) x^(2n+1)`.
///
/// Terms carry forward by the ratio `x²(2n+1)²/(2(n+1)(2n+3))`, so the
/// binomial factor never overflows on its own. Converges for `|x| < 1`;
/// arguments at or beyond unit magnitude are out of domain and end the
/// loop through the non-finite guard once terms diverge.
#[must_use]
pub fn asin(x: f64) -> f64 {
    let mut sum = 0.0;
    let mut term = x;
    let mut n = 0.0;
    while term.is_finite() && term.abs() > CUTOFF {
        sum += term;
        let odd = 2.0 * n + 1.0;
        term *= x * x * odd * odd / (2.0 * (n + 1.0) * (2.0 * n + 3.0));
        n += 1.0;
    }
    sum
}

/// Arccosine via `π/2 - asin(x)`.
#[must_use]
pub fn acos(x: f64) -> f64 {
    FRAC_PI_2 - asin(x)
}

/// Arctangent by a degree-19 minimax polynomial in `x²`.
///
/// Arguments beyond unit magnitude go through the reciprocal identity
/// `atan(x) = π/2 - atan(1/x)`. Sign symmetry is enforced by copying the
/// argument's sign onto the result.
#[must_use]
pub fn atan(x: f64) -> f64 {
    let z = x.abs();
    let a = if z > 1.0 { 1.0 / z } else { z };
    let s = a * a;
    let q = s * s;
    let o = q * q;

    let head = (-ATAN_COEFFS[0]).mul_add(s, ATAN_COEFFS[1]).mul_add(
        q,
        (-ATAN_COEFFS[2]).mul_add(s, ATAN_COEFFS[3]),
    );
    let tail = (-ATAN_COEFFS[4]).mul_add(s, ATAN_COEFFS[5]).mul_add(
        q,
        (-ATAN_COEFFS[6]).mul_add(s, ATAN_COEFFS[7]),
    );
    let p = head
        .mul_add(o, tail)
        .mul_add(s, -ATAN_COEFFS[8])
        .mul_add(s, ATAN_COEFFS[9])
        .mul_add(s, -ATAN_COEFFS[10])
        .mul_add(s, ATAN_COEFFS[11])
        .mul_add(s, -ATAN_COEFFS[12])
        .mul_add(s, ATAN_COEFFS[13])
        .mul_add(s, -ATAN_COEFFS[14])
        .mul_add(s, ATAN_COEFFS[15])
        .mul_add(s, -ATAN_COEFFS[16])
        .mul_add(s, ATAN_COEFFS[17])
        .mul_add(s, -ATAN_COEFFS[18]);
    let p = (p * s).mul_add(a, a);

    let r = if z > 1.0 { ATAN_COEFFS[19] - p } else { p };
    copysign(r, x)
}

/// Quadrant-resolved arctangent of `y/x`. `atan2(0, 0)` is defined as 0.
#[must_use]
pub fn atan2(y: f64, x: f64) -> f64 {
    if x > 0.0 {
        atan(y / x)
    } else if x < 0.0 && y >= 0.0 {
        atan(y / x) + PI
    } else if x < 0.0 {
        atan(y / x) - PI
    } else if y > 0.0 {
        FRAC_PI_2
    } else if y < 0.0 {
        -FRAC_PI_2
    } else {
        0.0
    }
}

/// Tangent via `sin/cos`.
#[must_use]
pub fn tan(a: f64) -> f64 {
    sin(a) / cos(a)
}

/// Cotangent via `1/tan`.
#[must_use]
pub fn cot(a: f64) -> f64 {
    1.0 / tan(a)
}

/// Secant via `1/cos`.
#[must_use]
pub fn sec(a: f64) -> f64 {
    1.0 / cos(a)
}

/// Cosecant via `1/sin`.
#[must_use]
pub fn csc(a: f64) -> f64 {
    1.0 / sin(a)
}

/// Inverse cotangent via `π/2 - atan`.
#[must_use]
pub fn acot(a: f64) -> f64 {
    FRAC_PI_2 - atan(a)
}

/// Inverse secant via `acos(1/x)`.
#[must_use]
pub fn asec(a: f64) -> f64 {
    acos(1.0 / a)
}

/// Inverse cosecant via `π/2 - asec`.
#[must_use]
pub fn acsc(a: f64) -> f64 {
    FRAC_PI_2 - asec(a)
}

/// Logistic function `eᵃ / (eᵃ + 1)`.
#[must_use]
pub fn sigmoid(a: f64) -> f64 {
    let ex = powf(E, a);
    ex / (ex + 1.0)
}

/// Hyperbolic tangent via `2·sigmoid(2a) - 1`.
#[must_use]
pub fn tanh(a: f64) -> f64 {
    2.0f64.mul_add(sigmoid(2.0 * a), -1.0)
}

/// Radians to degrees.
#[must_use]
pub fn to_degrees(rads: f64) -> f64 {
    rads * 180.0 / PI
}

/// Degrees to radians.
#[must_use]
pub fn to_radians(degs: f64) -> f64 {
    degs * PI / 180.0
}
