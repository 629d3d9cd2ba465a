//! Emission distributions for hidden Markov models.
//!
//! For each supported outcome family this crate provides
//! - the density (or mass) of an observation given a positional parameter vector
//! - the analytic partial derivatives of that density w.r.t. each parameter
//!
//! A host engine picks a [`Variant`] once per emission model and then calls
//! [`density`] during likelihood evaluation and [`gradient`] while building the
//! score. Every call is a pure function of its inputs.

pub mod beta;
pub mod beta_binomial;
pub mod binomial;
pub mod categorical;
pub mod emission;
pub mod exponential;
pub mod gamma;
pub mod identity;
pub mod lognormal;
pub mod math;
pub mod neg_binomial;
pub mod normal;
pub mod poisson;
pub mod student_t;
pub mod truncated_normal;
pub mod uniform;
pub mod variant;
pub mod weibull;

pub use emission::{EmissionModel, density, gradient};
pub use variant::{ParamDomain, Variant};
