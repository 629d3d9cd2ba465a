//! Binomial distribution.

use crate::math::{as_count, is_nonint, ln_choose};

/// Mass of `Binom(size, prob)` at count `x`.
///
/// `size` must be a non-negative integer and `prob` in `[0, 1]`, otherwise NaN.
/// Counts outside `0..=size` and non-integer `x` have zero mass.
pub fn pmf(x: f64, size: f64, prob: f64) -> f64 {
    if x.is_nan() || size.is_nan() || prob.is_nan() {
        return x + size + prob;
    }
    if size < 0.0 || is_nonint(size) || !(0.0..=1.0).contains(&prob) {
        return f64::NAN;
    }
    let n = size.round();
    let Some(k) = as_count(x).filter(|&k| k <= n) else {
        return 0.0;
    };

    if prob == 0.0 {
        return if k == 0.0 { 1.0 } else { 0.0 };
    }
    if prob == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    (ln_choose(n, k) + k * prob.ln() + (n - k) * (-prob).ln_1p()).exp()
}

/// `[d/dsize, d/dprob]` of the mass. `size` is fixed, so its slot is `0`.
///
/// `d/dprob = f (k/prob - (size-k)/(1-prob))` in the interior.
pub fn grad(x: f64, size: f64, prob: f64) -> [f64; 2] {
    let n = size.round();
    let Some(k) = as_count(x).filter(|&k| k <= n) else {
        return [0.0, 0.0];
    };
    if prob == 0.0 || prob == 1.0 {
        return [0.0, boundary_slope(k, n, prob)];
    }
    let f = pmf(k, size, prob);
    [0.0, f * (k / prob - (n - k) / (1.0 - prob))]
}

/// `d/dprob` at `prob` in `{0, 1}`, where the score form is `0 * inf`.
///
/// `C(n,k) (k p^(k-1) (1-p)^(n-k) - (n-k) p^k (1-p)^(n-k-1))`
fn boundary_slope(k: f64, n: f64, prob: f64) -> f64 {
    let q = 1.0 - prob;
    let up = if k > 0.0 { k * prob.powf(k - 1.0) * q.powf(n - k) } else { 0.0 };
    let down = if k < n { (n - k) * prob.powf(k) * q.powf(n - k - 1.0) } else { 0.0 };
    ln_choose(n, k).exp() * (up - down)
}
