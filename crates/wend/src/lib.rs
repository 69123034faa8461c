//! Wend: configuration-space composition and discrete motion
//! validation for sampling-based planners.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the wend sub-crates. For most users, adding `wend` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wend::prelude::*;
//!
//! // A compound space over two circles.
//! let mut space = CompoundSpace::new();
//! space.add_subspace(So2Space::new());
//! space.add_subspace(So2Space::new());
//! assert_eq!(space.dimension(), 2);
//!
//! // Seeded sampling: same seed, same states.
//! let mut rng = SampleRng::from_seed(7);
//! let state = space.sample_uniform(&mut rng).unwrap();
//! assert_eq!(state.len(), 2);
//!
//! // Bisection motion validation over a single circle.
//! let mut validator =
//!     DiscreteMotionValidator::new(So2Space::new(), AlwaysValid, 0.1).unwrap();
//! assert!(validator.check_motion(&So2State::new(0.0), &So2State::new(1.0)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use wend_core::SampleRng;
pub use wend_motion::{
    AlwaysValid, DiscreteMotionValidator, GaussianSampler, MotionError, RandomValidityChecker,
    ValidityChecker,
};
pub use wend_space::{
    CompoundSpace, CompoundState, MetricSpace, Render, So2Space, So2State, SpaceError, StateSpace,
    Subspace, Substate,
};

/// Commonly used items, importable in one line.
pub mod prelude {
    pub use wend_core::SampleRng;
    pub use wend_motion::{AlwaysValid, DiscreteMotionValidator, GaussianSampler, ValidityChecker};
    pub use wend_space::{
        CompoundSpace, CompoundState, MetricSpace, Render, So2Space, So2State, StateSpace,
    };
}
