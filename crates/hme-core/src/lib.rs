//! Core types for hidden Markov model emission distributions.
//!
//! This crate holds what the distribution code and a host HMM engine share:
//! the error type and the [`Emission`](traits::Emission) trait that a
//! forward-backward likelihood or its gradient is written against.

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::Emission;
