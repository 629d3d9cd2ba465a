//! Variant dispatch for densities and gradients, plus an owned model wrapper.
//!
//! [`density`] and [`gradient`] are the hot-path entry points: total, pure,
//! allocation-free. [`EmissionModel`] adds the length checks and JSON
//! round-trip that belong at model-construction time.

use hme_core::{Emission, Error, Result};
use serde::{Deserialize, Serialize};

use crate::variant::Variant;
use crate::{
    beta, beta_binomial, binomial, categorical, exponential, gamma, identity, lognormal,
    neg_binomial, normal, poisson, student_t, truncated_normal, uniform, weibull,
};

/// Density (or mass) of observation `x` under `variant` with positional `params`.
///
/// Out-of-support observations give exactly `0.0`; invalid parameters give NaN.
///
/// # Panics
///
/// If `params` is shorter than the variant's parameter count. Categorical
/// reads missing probability slots as NaN instead.
pub fn density(variant: Variant, x: f64, params: &[f64]) -> f64 {
    let p = params;
    match variant {
        Variant::Categorical => categorical::pmf(x, p),
        Variant::Identity => identity::pmf(x, p[0]),
        Variant::Uniform => uniform::pdf(x, p[0], p[1]),
        Variant::Normal => normal::pdf(x, p[0], p[1]),
        Variant::LogNormal => lognormal::pdf(x, p[0], p[1]),
        Variant::Exponential => exponential::pdf(x, p[0]),
        Variant::Gamma => gamma::pdf(x, p[0], p[1]),
        Variant::Weibull => weibull::pdf(x, p[0], p[1]),
        Variant::Poisson => poisson::pmf(x, p[0]),
        Variant::Binomial => binomial::pmf(x, p[0], p[1]),
        Variant::BetaBinomial => beta_binomial::pmf(x, p[0], p[1], p[2]),
        Variant::TruncatedNormal => truncated_normal::pdf(x, p[0], p[1], p[2], p[3]),
        Variant::MeTruncatedNormal => {
            truncated_normal::me_pdf(x, p[0], p[1], p[2], p[3], p[4], p[5])
        }
        Variant::MeUniform => truncated_normal::me_uniform_pdf(x, p[0], p[1], p[2], p[3]),
        Variant::NegativeBinomial => neg_binomial::pmf(x, p[0], p[1]),
        Variant::Beta => beta::pdf(x, p[0], p[1]),
        Variant::StudentT => student_t::pdf(x, p[0], p[1], p[2]),
        Variant::ZeroInflatedNegativeBinomial => neg_binomial::zi_pmf(x, p[0], p[1], p[2]),
    }
}

/// Fill `out` with `d density / d params[i]` at observation `x`.
///
/// Every slot of `out` is written. Structural parameters (categorical
/// header, binomial `size`, uniform bounds, point-mass value) get `0.0`, and
/// so does every slot of the truncated-normal family, which has no analytic
/// gradient (see [`Variant::has_analytic_gradient`]).
///
/// # Panics
///
/// If `out` or `params` is shorter than the variant's parameter count.
pub fn gradient(variant: Variant, x: f64, params: &[f64], out: &mut [f64]) {
    out.fill(0.0);
    let p = params;
    match variant {
        Variant::Categorical => categorical::grad(x, p, out),
        Variant::Identity
        | Variant::Uniform
        | Variant::TruncatedNormal
        | Variant::MeTruncatedNormal
        | Variant::MeUniform => {}
        Variant::Normal => write(out, normal::grad(x, p[0], p[1])),
        Variant::LogNormal => write(out, lognormal::grad(x, p[0], p[1])),
        Variant::Exponential => write(out, exponential::grad(x, p[0])),
        Variant::Gamma => write(out, gamma::grad(x, p[0], p[1])),
        Variant::Weibull => write(out, weibull::grad(x, p[0], p[1])),
        Variant::Poisson => write(out, poisson::grad(x, p[0])),
        Variant::Binomial => write(out, binomial::grad(x, p[0], p[1])),
        Variant::BetaBinomial => write(out, beta_binomial::grad(x, p[0], p[1], p[2])),
        Variant::NegativeBinomial => write(out, neg_binomial::grad(x, p[0], p[1])),
        Variant::Beta => write(out, beta::grad(x, p[0], p[1])),
        Variant::StudentT => write(out, student_t::grad(x, p[0], p[1], p[2])),
        Variant::ZeroInflatedNegativeBinomial => {
            write(out, neg_binomial::zi_grad(x, p[0], p[1], p[2]))
        }
    }
}

#[inline]
fn write<const N: usize>(out: &mut [f64], g: [f64; N]) {
    out[..N].copy_from_slice(&g);
}

impl Emission for Variant {
    fn name(&self) -> &str {
        Variant::name(*self)
    }

    fn density(&self, x: f64, params: &[f64]) -> f64 {
        density(*self, x, params)
    }

    fn gradient(&self, x: f64, params: &[f64], out: &mut [f64]) {
        gradient(*self, x, params, out)
    }
}

fn check_len(variant: Variant, params: &[f64]) -> Result<()> {
    let Some(expected) = variant.expected_len(params) else {
        return Err(Error::Validation(format!(
            "{variant} expects [ncats >= 1, basecat, p_1..p_ncats], got {params:?}"
        )));
    };
    if params.len() != expected {
        return Err(Error::Validation(format!(
            "{variant} expects {expected} params ({}), got {}",
            variant.param_names(params).join(", "),
            params.len()
        )));
    }
    Ok(())
}

/// An emission distribution bound to its current parameter vector.
///
/// Deserialization goes through [`EmissionModel::new`], so a decoded model
/// always has the variant's parameter length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEmissionModel")]
pub struct EmissionModel {
    variant: Variant,
    params: Vec<f64>,
}

/// Wire form of [`EmissionModel`] before the length check.
#[derive(Deserialize)]
struct RawEmissionModel {
    variant: Variant,
    params: Vec<f64>,
}

impl TryFrom<RawEmissionModel> for EmissionModel {
    type Error = Error;

    fn try_from(raw: RawEmissionModel) -> Result<Self> {
        Self::new(raw.variant, raw.params)
    }
}

impl EmissionModel {
    /// Create a model, checking that `params` has the variant's length.
    pub fn new(variant: Variant, params: impl Into<Vec<f64>>) -> Result<Self> {
        let params = params.into();
        check_len(variant, &params)?;
        tracing::debug!(%variant, n_params = params.len(), "emission model constructed");
        Ok(Self { variant, params })
    }

    /// Parse a model from JSON, e.g. `{"variant":"normal","params":[0.0,1.0]}`.
    pub fn from_json(s: &str) -> Result<Self> {
        let raw: RawEmissionModel = serde_json::from_str(s)?;
        raw.try_into()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The distribution family.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Current parameter vector.
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Positional parameter names.
    pub fn param_names(&self) -> Vec<String> {
        self.variant.param_names(&self.params)
    }

    /// Replace the parameters (e.g. after an optimizer step). Length must not change.
    pub fn set_params(&mut self, params: &[f64]) -> Result<()> {
        if params.len() != self.params.len() {
            return Err(Error::Validation(format!(
                "{} expects {} params, got {}",
                self.variant,
                self.params.len(),
                params.len()
            )));
        }
        check_len(self.variant, params)?;
        self.params.copy_from_slice(params);
        Ok(())
    }

    /// Check every parameter against its natural domain.
    ///
    /// Optional: the evaluators never require it and propagate NaN for
    /// out-of-domain values.
    pub fn validate(&self) -> Result<()> {
        for (slot, (&value, name)) in self.params.iter().zip(self.param_names()).enumerate() {
            let domain = self.variant.domain(slot);
            if !domain.contains(value) {
                let (lo, hi) = domain.bounds();
                return Err(Error::Validation(format!(
                    "{} parameter '{name}' = {value} outside [{lo}, {hi}]",
                    self.variant
                )));
            }
        }
        Ok(())
    }

    /// Density (or mass) at `x`.
    pub fn density(&self, x: f64) -> f64 {
        density(self.variant, x, &self.params)
    }

    /// Gradient of the density at `x` into `out` (length `params().len()`).
    pub fn gradient(&self, x: f64, out: &mut [f64]) {
        gradient(self.variant, x, &self.params, out)
    }

    /// Gradient of the density at `x` as a new vector.
    pub fn gradient_vec(&self, x: f64) -> Vec<f64> {
        let mut out = vec![0.0; self.params.len()];
        self.gradient(x, &mut out);
        out
    }

    /// Like [`EmissionModel::gradient`], but fails for variants whose gradient
    /// is not available analytically instead of returning zeros.
    pub fn try_gradient(&self, x: f64, out: &mut [f64]) -> Result<()> {
        if !self.variant.has_analytic_gradient() {
            tracing::warn!(variant = %self.variant, "analytic gradient not available");
            return Err(Error::NotImplemented(format!(
                "analytic derivatives are not available for the {} distribution",
                self.variant
            )));
        }
        if out.len() != self.params.len() {
            return Err(Error::Validation(format!(
                "gradient buffer length mismatch: expected {}, got {}",
                self.params.len(),
                out.len()
            )));
        }
        self.gradient(x, out);
        Ok(())
    }
}
