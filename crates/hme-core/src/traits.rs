//! Core traits for emission models
//!
//! The host engine (forward-backward recursion, optimizer) depends only on
//! [`Emission`]; concrete distribution families live in `hme-prob`.

/// Outcome distribution of an observation conditional on a hidden state.
///
/// Both operations are pure: the same `(x, params)` always gives the same
/// output, and implementations must be callable concurrently from many
/// threads as long as each call owns its `out` buffer.
pub trait Emission: Send + Sync {
    /// Short, stable name of the distribution family.
    fn name(&self) -> &str;

    /// Density (continuous) or mass (discrete) of `x` under `params`.
    ///
    /// Out-of-support observations give exactly `0.0`; invalid parameters
    /// propagate as NaN.
    fn density(&self, x: f64, params: &[f64]) -> f64;

    /// Partial derivatives of [`Emission::density`] w.r.t. each parameter.
    ///
    /// `out` has the same length as `params`. Every slot is written; slots for
    /// structural or unsupported parameters are set to `0.0`.
    fn gradient(&self, x: f64, params: &[f64], out: &mut [f64]);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PointMass;

    impl Emission for PointMass {
        fn name(&self) -> &str {
            "point"
        }

        fn density(&self, x: f64, params: &[f64]) -> f64 {
            if x == params[0] { 1.0 } else { 0.0 }
        }

        fn gradient(&self, _x: f64, _params: &[f64], out: &mut [f64]) {
            out.fill(0.0);
        }
    }

    #[test]
    fn test_trait_object_dispatch() {
        let e: Box<dyn Emission> = Box::new(PointMass);
        assert_eq!(e.name(), "point");
        assert_eq!(e.density(2.0, &[2.0]), 1.0);
        let mut g = [f64::NAN];
        e.gradient(2.0, &[2.0], &mut g);
        assert_eq!(g, [0.0]);
    }
}
