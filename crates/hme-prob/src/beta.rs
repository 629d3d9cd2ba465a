//! Beta distribution.

use crate::math::{digamma, ln_beta};

/// Density of `Beta(shape1, shape2)` at `x`.
///
/// Support: `0 <= x <= 1`.
pub fn pdf(x: f64, shape1: f64, shape2: f64) -> f64 {
    if x.is_nan() || shape1.is_nan() || shape2.is_nan() {
        return x + shape1 + shape2;
    }
    if shape1 < 0.0 || shape2 < 0.0 {
        return f64::NAN;
    }
    if !(0.0..=1.0).contains(&x) {
        return 0.0;
    }

    let ln_norm = -ln_beta(shape1, shape2);
    if x == 0.0 {
        if shape1 < 1.0 {
            return f64::INFINITY;
        }
        if shape1 > 1.0 {
            return 0.0;
        }
        // shape1 == 1: x term is 1.
        return ln_norm.exp();
    }
    if x == 1.0 {
        if shape2 < 1.0 {
            return f64::INFINITY;
        }
        if shape2 > 1.0 {
            return 0.0;
        }
        return ln_norm.exp();
    }

    (ln_norm + (shape1 - 1.0) * x.ln() + (shape2 - 1.0) * (-x).ln_1p()).exp()
}

/// `[d/dshape1, d/dshape2]` of the density. Zero on the boundary `{0, 1}`.
pub fn grad(x: f64, shape1: f64, shape2: f64) -> [f64; 2] {
    if x <= 0.0 || x >= 1.0 {
        return [0.0, 0.0];
    }
    let f = pdf(x, shape1, shape2);
    let psi_sum = digamma(shape1 + shape2);
    [f * (psi_sum - digamma(shape1) + x.ln()), f * (psi_sum - digamma(shape2) + (-x).ln_1p())]
}
