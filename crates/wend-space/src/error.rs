//! Error types for space composition and sampling dispatch.

use std::fmt;

/// Errors arising from compound-space dispatch.
///
/// Both variants indicate a structural programmer error — a mis-built
/// or mis-used composition — not a runtime data problem. They are
/// reported immediately so a broken composition can never keep
/// operating on mismatched substates; there is no recovery path inside
/// the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A type-erased value does not hold the concrete type an operation
    /// expected.
    TypeMismatch {
        /// Type name the operation expected to find.
        expected: &'static str,
        /// Type name actually held by the erased value.
        found: &'static str,
    },
    /// A compound state's substate count does not match the compound
    /// space operating on it, e.g. the state was made before a later
    /// `add_subspace` call.
    StructureMismatch {
        /// Subspace count of the space performing the operation.
        expected: usize,
        /// Substate count of the state it was given.
        found: usize,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(f, "substate type mismatch: expected {expected}, found {found}")
            }
            Self::StructureMismatch { expected, found } => {
                write!(
                    f,
                    "compound structure mismatch: space has {expected} subspaces, \
                     state has {found} substates"
                )
            }
        }
    }
}

impl std::error::Error for SpaceError {}
