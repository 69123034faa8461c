//! Error types for motion validation and sampling.

use std::error::Error;
use std::fmt;
use wend_space::SpaceError;

/// Errors from validator construction and validity-driven sampling.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// A space dispatch error surfaced while sampling.
    Space(SpaceError),
    /// The configured maximum segment length is not positive and finite.
    InvalidResolution {
        /// The rejected segment length.
        value: f64,
    },
    /// A validity probability lies outside `[0, 1]`.
    InvalidProbability {
        /// The rejected probability.
        value: f64,
    },
    /// Rejection sampling gave up after the configured attempt bound.
    AttemptsExhausted {
        /// Number of attempts made before giving up.
        attempts: usize,
    },
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(err) => write!(f, "space dispatch failed: {err}"),
            Self::InvalidResolution { value } => {
                write!(f, "max segment length must be positive and finite, got {value}")
            }
            Self::InvalidProbability { value } => {
                write!(f, "validity probability must lie in [0, 1], got {value}")
            }
            Self::AttemptsExhausted { attempts } => {
                write!(f, "no valid sample found after {attempts} attempts")
            }
        }
    }
}

impl Error for MotionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpaceError> for MotionError {
    fn from(err: SpaceError) -> Self {
        Self::Space(err)
    }
}
