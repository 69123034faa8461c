//! Discrete motion validation and validity-driven sampling.
//!
//! This crate layers on top of [`wend_space`]: given a space with
//! distance and interpolation capabilities
//! ([`MetricSpace`](wend_space::MetricSpace)) and a per-state validity
//! oracle ([`ValidityChecker`]), the [`DiscreteMotionValidator`]
//! decides whether a straight-line motion between two states is
//! collision-valid by checking a bounded number of interior points via
//! recursive bisection rather than a linear scan.
//!
//! Also provided: [`RandomValidityChecker`], a probabilistic stub
//! oracle for exercising validators without collision geometry, and
//! [`GaussianSampler`], a bounded rejection sampler that retries
//! gaussian perturbations until the oracle accepts one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod checker;
pub mod error;
pub mod sampler;
pub mod validator;

#[cfg(test)]
pub(crate) mod fixtures;

pub use checker::{AlwaysValid, RandomValidityChecker, ValidityChecker};
pub use error::MotionError;
pub use sampler::GaussianSampler;
pub use validator::DiscreteMotionValidator;
