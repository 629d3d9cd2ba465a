//! Poisson distribution.

use crate::math::as_count;
use statrs::function::gamma::ln_gamma;

/// Mass of `Poisson(lambda)` at count `x`.
///
/// Non-integer or negative `x` has zero mass.
pub fn pmf(x: f64, lambda: f64) -> f64 {
    if x.is_nan() || lambda.is_nan() {
        return x + lambda;
    }
    if lambda < 0.0 {
        return f64::NAN;
    }
    let Some(k) = as_count(x) else {
        return 0.0;
    };
    if lambda == 0.0 {
        return if k == 0.0 { 1.0 } else { 0.0 };
    }
    (k * lambda.ln() - lambda - ln_gamma(k + 1.0)).exp()
}

/// `[d/dlambda]` of the mass: `f (k/lambda - 1)`.
///
/// At `lambda = 0` this is the one-sided limit: `-1` for `k = 0`, `1` for
/// `k = 1`, `0` beyond.
pub fn grad(x: f64, lambda: f64) -> [f64; 1] {
    let Some(k) = as_count(x) else {
        return [0.0];
    };
    if lambda == 0.0 {
        let d = if k == 0.0 {
            -1.0
        } else if k == 1.0 {
            1.0
        } else {
            0.0
        };
        return [d];
    }
    let f = pmf(k, lambda);
    [f * (k / lambda - 1.0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_k0() {
        assert_relative_eq!(pmf(0.0, 2.0), (-2.0f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_reference_value() {
        assert_relative_eq!(pmf(3.0, 2.4), 0.209_014_164_378_806_4, max_relative = 1e-12);
    }

    #[test]
    fn test_non_count_is_zero() {
        assert_eq!(pmf(2.5, 2.0), 0.0);
        assert_eq!(pmf(-1.0, 2.0), 0.0);
        assert_eq!(grad(2.5, 2.0), [0.0]);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(pmf(0.0, 0.0), 1.0);
        assert_eq!(pmf(1.0, 0.0), 0.0);
        assert_eq!(grad(0.0, 0.0), [-1.0]);
        assert_eq!(grad(1.0, 0.0), [1.0]);
        assert_eq!(grad(2.0, 0.0), [0.0]);
        assert_eq!(grad(7.0, 0.0), [0.0]);
    }

    #[test]
    fn test_zero_rate_slope_matches_one_sided_difference() {
        let h = 1e-7;
        for k in 0..4 {
            let kf = k as f64;
            let fd = (pmf(kf, h) - pmf(kf, 0.0)) / h;
            assert_relative_eq!(grad(kf, 0.0)[0], fd, epsilon = 1e-6);
        }
    }
}
