//! Special-function helpers shared by the distribution families.
//!
//! Everything here is total: NaN inputs come back out as NaN rather than
//! being rejected.

use statrs::function::gamma::ln_gamma;

pub use statrs::function::gamma::digamma;

/// `1 / sqrt(2π)`.
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Density of `N(mean, sd)` at `x`.
///
/// `sd < 0` gives NaN. `sd == 0` is a point mass at `mean`: infinite there, zero elsewhere.
pub fn normal_pdf(x: f64, mean: f64, sd: f64) -> f64 {
    if x.is_nan() || mean.is_nan() || sd.is_nan() {
        return x + mean + sd;
    }
    if sd < 0.0 {
        return f64::NAN;
    }
    if sd == 0.0 {
        return if x == mean { f64::INFINITY } else { 0.0 };
    }
    let z = (x - mean) / sd;
    FRAC_1_SQRT_2PI * (-0.5 * z * z).exp() / sd
}

/// CDF of `N(mean, sd)` at `x`. Infinite `x` is allowed (truncation bounds).
pub fn normal_cdf(x: f64, mean: f64, sd: f64) -> f64 {
    if x.is_nan() || mean.is_nan() || sd.is_nan() {
        return x + mean + sd;
    }
    if sd < 0.0 {
        return f64::NAN;
    }
    if sd == 0.0 {
        return if x < mean { 0.0 } else { 1.0 };
    }
    let z = (x - mean) / sd;
    // Phi(z) = 0.5 * erfc(-z / sqrt(2)) keeps precision in the lower tail.
    0.5 * libm::erfc(-z / std::f64::consts::SQRT_2)
}

/// `ln B(a, b)`.
#[inline]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

/// `ln C(n, k)` for real `n` and `k` (the gamma-function extension).
///
/// Exactly `0` at `k == 0` and `k == n`.
#[inline]
pub fn ln_choose(n: f64, k: f64) -> f64 {
    if k == 0.0 || k == n {
        return 0.0;
    }
    ln_gamma(n + 1.0) - ln_gamma(k + 1.0) - ln_gamma(n - k + 1.0)
}

/// True when `x` is not an integer, up to the usual `1e-7` relative slack.
#[inline]
pub fn is_nonint(x: f64) -> bool {
    (x - x.round()).abs() > 1e-7 * x.abs().max(1.0)
}

/// Interpret an observation as a count.
///
/// Returns the rounded count for finite, non-negative, integer-valued `x`
/// and `None` otherwise. Discrete families give zero mass for `None`.
#[inline]
pub fn as_count(x: f64) -> Option<f64> {
    if !x.is_finite() || x < 0.0 || is_nonint(x) {
        return None;
    }
    Some(x.round())
}
