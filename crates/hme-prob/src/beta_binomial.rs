//! Beta-binomial distribution in mean/dispersion form.
//!
//! Parameters `[size, meanp, sdp]` map to the natural Beta shapes
//! `shape1 = meanp/sdp` and `shape2 = (1 - meanp)/sdp`. Gradients are taken
//! in `(shape1, shape2)` first and pulled back through the Jacobian of that map.

use crate::math::{digamma, ln_beta, ln_choose};

/// `(shape1, shape2)` for a mean/dispersion pair.
#[inline]
fn shapes(meanp: f64, sdp: f64) -> (f64, f64) {
    (meanp / sdp, (1.0 - meanp) / sdp)
}

/// Mass at `x` of a Beta-binomial with `size` trials.
///
/// `C(size, x) B(x + shape1, size - x + shape2) / B(shape1, shape2)`, zero outside `[0, size]`.
pub fn pmf(x: f64, size: f64, meanp: f64, sdp: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 || x > size {
        return 0.0;
    }
    let (a, b) = shapes(meanp, sdp);
    (ln_choose(size, x) + ln_beta(x + a, size - x + b) - ln_beta(a, b)).exp()
}

/// `[d/dsize, d/dmeanp, d/dsdp]` of the mass. `size` is fixed.
pub fn grad(x: f64, size: f64, meanp: f64, sdp: f64) -> [f64; 3] {
    if !(0.0..=size).contains(&x) {
        return [0.0; 3];
    }
    let f = pmf(x, size, meanp, sdp);
    let (a, b) = shapes(meanp, sdp);
    let common = digamma(a + b) - digamma(size + a + b);
    let d_a = f * (digamma(x + a) - digamma(a) + common);
    let d_b = f * (digamma(size - x + b) - digamma(b) + common);

    // Rows: (shape1, shape2); columns: (meanp, sdp).
    let jac = [[1.0 / sdp, -meanp / (sdp * sdp)], [-1.0 / sdp, -(1.0 - meanp) / (sdp * sdp)]];
    [0.0, d_a * jac[0][0] + d_b * jac[1][0], d_a * jac[0][1] + d_b * jac[1][1]]
}
