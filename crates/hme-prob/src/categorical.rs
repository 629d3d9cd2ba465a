//! Categorical outcome on `{1, ..., ncats}`.
//!
//! Parameters: `[ncats, basecat, p_1, ..., p_ncats]`. The probabilities are
//! absolute; any covariate model is applied by the host before the call, so
//! nothing is renormalized here. `basecat` is carried for layout
//! compatibility and never read.

/// 1-based category of `x`, or `None` outside `1..=ncats`.
#[inline]
fn category(x: f64, ncats: f64) -> Option<usize> {
    let cat = x.round();
    if cat >= 1.0 && cat <= ncats.round() { Some(cat as usize) } else { None }
}

/// Mass of category `round(x)`.
///
/// A probability slot missing from a short `params` reads as NaN.
pub fn pmf(x: f64, params: &[f64]) -> f64 {
    let Some(&ncats) = params.first() else {
        return f64::NAN;
    };
    if x.is_nan() || ncats.is_nan() {
        return f64::NAN;
    }
    match category(x, ncats) {
        Some(cat) => params.get(1 + cat).copied().unwrap_or(f64::NAN),
        None => 0.0,
    }
}

/// One-hot gradient: `d pmf / d p_y = 1` when `x` falls in category `y`.
///
/// Every slot of `out` is written.
pub fn grad(x: f64, params: &[f64], out: &mut [f64]) {
    out.fill(0.0);
    let Some(&ncats) = params.first() else {
        return;
    };
    if let Some(slot) = category(x, ncats).and_then(|cat| out.get_mut(1 + cat)) {
        *slot = 1.0;
    }
}
