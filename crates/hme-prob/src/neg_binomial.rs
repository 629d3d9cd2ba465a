//! Negative binomial distribution and its zero-inflated mixture.

use crate::math::{as_count, digamma};
use statrs::function::gamma::ln_gamma;

/// Mass of `NB(size, prob)` at count `x` (failures before `size` successes).
///
/// `P(K=k) = Γ(k+size) / (Γ(size) k!) prob^size (1-prob)^k`
///
/// - `size >= 0`
/// - `0 < prob <= 1`
pub fn pmf(x: f64, size: f64, prob: f64) -> f64 {
    if x.is_nan() || size.is_nan() || prob.is_nan() {
        return x + size + prob;
    }
    if prob <= 0.0 || prob > 1.0 || size < 0.0 {
        return f64::NAN;
    }
    let Some(k) = as_count(x) else {
        return 0.0;
    };
    if size == 0.0 || prob == 1.0 {
        return if k == 0.0 { 1.0 } else { 0.0 };
    }
    let ln_coeff = ln_gamma(k + size) - ln_gamma(size) - ln_gamma(k + 1.0);
    (ln_coeff + size * prob.ln() + k * (-prob).ln_1p()).exp()
}

/// `[d/dsize, d/dprob]` of the mass.
///
/// - `d/dsize = f (digamma(k + size) - digamma(size) + ln prob)`
/// - `d/dprob = f (size/prob - k/(1 - prob))`
pub fn grad(x: f64, size: f64, prob: f64) -> [f64; 2] {
    let Some(k) = as_count(x) else {
        return [0.0, 0.0];
    };
    if prob == 1.0 {
        // Degenerate at zero; only k = 0 and k = 1 have a slope in prob.
        let d_prob = if k == 0.0 {
            size
        } else if k == 1.0 {
            -size
        } else {
            0.0
        };
        return [0.0, d_prob];
    }
    if size == 0.0 {
        // Point mass at zero; only the size slope survives the limit.
        let d_size = if k == 0.0 { prob.ln() } else { (1.0 - prob).powf(k) / k };
        return [d_size, 0.0];
    }
    let f = pmf(k, size, prob);
    [f * (digamma(k + size) - digamma(size) + prob.ln()), f * (size / prob - k / (1.0 - prob))]
}

/// Mass of the zero-inflated NB: extra point mass `pi` at zero.
///
/// `pi + (1-pi) NB(0)` at zero, `(1-pi) NB(x)` elsewhere.
pub fn zi_pmf(x: f64, size: f64, prob: f64, pi: f64) -> f64 {
    let base = pmf(x, size, prob);
    if as_count(x) == Some(0.0) { pi + (1.0 - pi) * base } else { (1.0 - pi) * base }
}

/// `[d/dsize, d/dprob, d/dpi]` of the zero-inflated mass.
///
/// The count part scales the NB gradient by `1 - pi` (including at zero,
/// where the inflation term does not depend on `size` or `prob`). The `pi`
/// slot is `1 - NB(0)` at zero and `-NB(x)` elsewhere.
pub fn zi_grad(x: f64, size: f64, prob: f64, pi: f64) -> [f64; 3] {
    let Some(k) = as_count(x) else {
        return [0.0; 3];
    };
    let base = pmf(k, size, prob);
    let [d_size, d_prob] = grad(k, size, prob);
    let d_pi = if k == 0.0 { 1.0 - base } else { -base };
    [(1.0 - pi) * d_size, (1.0 - pi) * d_prob, d_pi]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_value() {
        assert_relative_eq!(pmf(3.0, 2.5, 0.4), 0.143_440_914_665_237_7, max_relative = 1e-12);
    }

    #[test]
    fn test_size_one_is_geometric() {
        let p: f64 = 0.35;
        for k in 0..6 {
            let kf = k as f64;
            assert_relative_eq!(pmf(kf, 1.0, p), p * (1.0 - p).powi(k), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_and_invalid() {
        assert_eq!(pmf(0.0, 2.0, 1.0), 1.0);
        assert_eq!(pmf(2.0, 2.0, 1.0), 0.0);
        assert_eq!(pmf(0.0, 0.0, 0.5), 1.0);
        assert!(pmf(1.0, 2.0, 0.0).is_nan());
        assert!(pmf(1.0, -2.0, 0.5).is_nan());
        assert_eq!(pmf(1.5, 2.0, 0.5), 0.0);
    }

    #[test]
    fn test_degenerate_prob_slope() {
        assert_eq!(grad(0.0, 2.5, 1.0), [0.0, 2.5]);
        assert_eq!(grad(1.0, 2.5, 1.0), [0.0, -2.5]);
        assert_eq!(grad(4.0, 2.5, 1.0), [0.0, 0.0]);
    }

    #[test]
    fn test_zero_size_slope_is_the_limit() {
        assert_eq!(grad(0.0, 0.0, 0.4), [0.4f64.ln(), 0.0]);
        assert_relative_eq!(grad(3.0, 0.0, 0.4)[0], 0.6f64.powi(3) / 3.0, max_relative = 1e-14);
        assert_eq!(grad(3.0, 0.0, 0.4)[1], 0.0);

        let h = 1e-7;
        for k in 0..5 {
            let kf = k as f64;
            let fd = (pmf(kf, h, 0.4) - pmf(kf, 0.0, 0.4)) / h;
            assert_relative_eq!(grad(kf, 0.0, 0.4)[0], fd, epsilon = 1e-6);
        }
        let g = zi_grad(2.0, 0.0, 0.4, 0.25);
        assert!(g.iter().all(|v| v.is_finite()), "{g:?}");
    }

    #[test]
    fn test_zero_inflated_reference_values() {
        let p0 = zi_pmf(0.0, 2.5, 0.4, 0.2);
        let p3 = zi_pmf(3.0, 2.5, 0.4, 0.2);
        assert_relative_eq!(p0, 0.280_954_308_100_310_5, max_relative = 1e-12);
        assert_relative_eq!(p3, 0.114_752_731_732_190_15, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_inflated_gradient_at_zero_is_not_blank() {
        let g = zi_grad(0.0, 2.5, 0.4, 0.2);
        let nb0 = 0.4f64.powf(2.5);
        assert_relative_eq!(g[0], 0.8 * nb0 * 0.4f64.ln(), max_relative = 1e-12);
        assert_relative_eq!(g[1], 0.8 * nb0 * 2.5 / 0.4, max_relative = 1e-12);
        assert_relative_eq!(g[2], 1.0 - nb0, max_relative = 1e-12);
    }
}
