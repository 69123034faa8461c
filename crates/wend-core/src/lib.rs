//! Core sampling context for the wend planning workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`SampleRng`], the explicit randomness context threaded through every
//! sampling operation in the workspace. Spaces own sampling math but no
//! randomness; callers hold the context and pass it down, which keeps
//! the side effect visible at each call site and makes seeded runs
//! replayable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod rng;

pub use rng::SampleRng;
