//! Gamma distribution, parameterized by shape and rate (scale `1/rate`).

use crate::math::digamma;
use statrs::function::gamma::ln_gamma;

/// Density of `Gamma(shape, rate)` at `x`.
///
/// Parameterization:
/// - `shape >= 0`
/// - `rate > 0` (inverse scale)
/// Support: `x >= 0`.
pub fn pdf(x: f64, shape: f64, rate: f64) -> f64 {
    if x.is_nan() || shape.is_nan() || rate.is_nan() {
        return x + shape + rate;
    }
    if shape < 0.0 || rate <= 0.0 {
        return f64::NAN;
    }
    if x < 0.0 || !x.is_finite() {
        return 0.0;
    }
    if x == 0.0 {
        if shape < 1.0 {
            return f64::INFINITY;
        }
        if shape > 1.0 {
            return 0.0;
        }
        // shape == 1 => exponential
        return rate;
    }

    (shape * rate.ln() - ln_gamma(shape) + (shape - 1.0) * x.ln() - rate * x).exp()
}

/// `[d/dshape, d/drate]` of the density.
///
/// - `d/dshape = f (ln rate + ln x - digamma(shape))`
/// - `d/drate = f (shape/rate - x)`
pub fn grad(x: f64, shape: f64, rate: f64) -> [f64; 2] {
    if x <= 0.0 || !x.is_finite() {
        return [0.0, 0.0];
    }
    let f = pdf(x, shape, rate);
    [f * (rate.ln() + x.ln() - digamma(shape)), f * (shape / rate - x)]
}
