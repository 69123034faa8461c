//! Composable configuration spaces for sampling-based motion planning.
//!
//! This crate defines the [`StateSpace`] capability contract — the
//! interface a leaf space must expose to participate in composition —
//! along with the type-erased [`Substate`] / [`Subspace`] holders, the
//! [`CompoundState`] / [`CompoundSpace`] aggregates, and the [`So2Space`]
//! reference leaf (planar rotations with wraparound).
//!
//! # Composition
//!
//! A [`CompoundSpace`] aggregates arbitrarily many, arbitrarily typed
//! leaf spaces behind one uniform interface. Each `add_subspace` call
//! extends both the subspace list and an internally owned prototype
//! state in the same step, so `state[i]` always holds the concrete type
//! expected by `space[i]` and sampling fans out to the right leaf
//! without callers ever seeing the mixture of concrete types.
//!
//! # Randomness
//!
//! Sampling operations take an explicit [`wend_core::SampleRng`]
//! context rather than hiding a generator inside each space, so draws
//! are reproducible from a seed and the side effect is visible in
//! every signature.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compound;
pub mod erased;
pub mod error;
pub mod render;
pub mod so2;
pub mod space;

#[cfg(test)]
pub(crate) mod compliance;

pub use compound::{CompoundSpace, CompoundState};
pub use erased::{Substate, Subspace};
pub use error::SpaceError;
pub use render::Render;
pub use so2::{So2Space, So2State};
pub use space::{MetricSpace, StateSpace};
