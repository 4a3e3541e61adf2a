//! Series-based arithmetic primitives.
//!
//! Every function here terminates on the fixed [`CUTOFF`](super::CUTOFF)
//! bound rather than on machine precision. None of them validate their
//! domain: `ln` of a non-positive value, or a root of a negative one,
//! produces an unspecified result.

use super::{CUTOFF, EPSILON};

/// `n!` as a real value. `factorial(0) == 1`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn factorial(n: u64) -> f64 {
    let mut r = 1.0;
    for i in 2..=n {
        r *= i as f64;
    }
    r
}

/// `base` raised to an integer exponent by repeated multiplication.
///
/// Negative exponents take the reciprocal of the positive power; a zero
/// exponent yields 1 regardless of base.
#[must_use]
pub fn powi(base: f64, exp: i64) -> f64 {
    if exp < 0 {
        return 1.0 / powi(base, -exp);
    }
    let mut r = 1.0;
    for _ in 0..exp {
        r *= base;
    }
    r
}

/// `base` raised to a real exponent via `exp(exponent * ln(base))`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn powf(base: f64, exponent: f64) -> f64 {
    if exponent < 0.0 {
        1.0 / powf(base, -exponent)
    } else if exponent == 0.0 {
        1.0
    } else {
        exp(exponent * ln(base))
    }
}

/// Natural logarithm by the atanh series
/// `2 Σ (1/(2k+1)) ((z-1)/(z+1))^(2k+1)`.
///
/// The first term is always accumulated; iteration stops once a term's
/// magnitude drops below the cutoff or goes non-finite. Terms carry
/// forward by the ratio `q²(2k+1)/(2k+3)`. Non-positive `z` is out of
/// domain.
#[must_use]
pub fn ln(z: f64) -> f64 {
    let q = (z - 1.0) / (z + 1.0);
    let mut sum = 0.0;
    let mut term = 2.0 * q;
    let mut c = 1.0;
    loop {
        sum += term;
        if !term.is_finite() || term.abs() < CUTOFF {
            return sum;
        }
        term *= q * q * c / (c + 2.0);
        c += 2.0;
    }
}

/// Taylor series `1 + z + Σ z^i / i!`, truncated at the cutoff.
///
/// Terms carry forward by the ratio `z/i`, so no intermediate power or
/// factorial overflows; a non-finite term ends accumulation.
#[must_use]
pub fn exp(z: f64) -> f64 {
    let mut sum = 1.0 + z;
    let mut term = z * z / 2.0;
    let mut i = 2.0;
    while term.is_finite() && term.abs() > CUTOFF {
        sum += term;
        i += 1.0;
        term *= z / i;
    }
    sum
}

/// Logarithm of `z` in an arbitrary base.
#[must_use]
pub fn log(base: f64, z: f64) -> f64 {
    ln(z) / ln(base)
}

/// The `r`-th root of `n`.
#[must_use]
pub fn root(n: f64, r: f64) -> f64 {
    powf(n, 1.0 / r)
}

/// Square root of `n`. Negative `n` is out of domain.
#[must_use]
pub fn sqrt(n: f64) -> f64 {
    root(n, 2.0)
}

/// Greatest common factor by iterative Euclidean remainder reduction.
///
/// The result carries the sign of the last nonzero remainder, so mixed-sign
/// inputs can yield a negative factor: `gcf(12, -18) == -6`. A zero second
/// argument returns the first unchanged.
#[must_use]
pub fn gcf(a: i64, b: i64) -> i64 {
    if b == 0 {
        return a;
    }
    let mut l;
    let mut r = b;
    let mut rem = a % b;
    if rem == 0 {
        return r;
    }
    loop {
        l = rem;
        rem = r % rem;
        r = l;
        if rem == 0 {
            return l;
        }
    }
}

/// Splits `z` into its integer part and the magnitude of its fraction.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn modf(z: f64) -> (i64, f64) {
    let i = z as i64;
    (i, (z - i as f64).abs())
}

/// Direction for [`round_toward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    Up,
    Down,
}

/// Rounds by truncation toward the given direction.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn round_toward(z: f64, mode: Rounding) -> f64 {
    let shifted = match mode {
        Rounding::Up => z + 1.0,
        Rounding::Down => z,
    };
    shifted as i64 as f64
}

/// Rounds to the nearest integer, half away from the truncation.
#[must_use]
pub fn round(z: f64) -> f64 {
    let (_, d) = modf(z);
    round_toward(z, if d < 0.5 { Rounding::Down } else { Rounding::Up })
}

/// Central-difference numerical derivative of `f` at `a`, sampled one
/// epsilon to either side.
pub fn derivative<F>(f: F, a: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let a1 = a - EPSILON;
    let a2 = a + EPSILON;
    (f(a2) - f(a1)) / (a2 - a1)
}
