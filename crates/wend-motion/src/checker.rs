//! Per-state validity predicates.

use crate::error::MotionError;
use wend_core::SampleRng;

/// A collision/feasibility oracle over single states.
///
/// `is_valid` takes `&mut self` because an oracle may consult internal
/// randomness (see [`RandomValidityChecker`]); the mutation is visible
/// in the signature instead of hidden behind interior mutability.
/// Implementations must not modify the state they are given.
pub trait ValidityChecker<S> {
    /// Whether `state` is valid.
    fn is_valid(&mut self, state: &S) -> bool;
}

/// An oracle that accepts every state.
///
/// Useful when only the geometric part of motion validation is of
/// interest, or as a placeholder while wiring up a planner.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysValid;

impl<S> ValidityChecker<S> for AlwaysValid {
    fn is_valid(&mut self, _state: &S) -> bool {
        true
    }
}

/// A probabilistic stub oracle: each query is valid with a fixed
/// probability, independent of the state.
///
/// Exercises validators and samplers without collision geometry.
/// Deterministic for a given seed, so failing runs can be replayed.
#[derive(Clone, Debug)]
pub struct RandomValidityChecker {
    rng: SampleRng,
    prob_valid: f64,
}

impl RandomValidityChecker {
    /// Create a checker that accepts with probability `prob_valid`.
    ///
    /// Returns [`MotionError::InvalidProbability`] if `prob_valid` is
    /// not in `[0, 1]` (NaN included).
    pub fn new(rng: SampleRng, prob_valid: f64) -> Result<Self, MotionError> {
        if !(0.0..=1.0).contains(&prob_valid) {
            return Err(MotionError::InvalidProbability { value: prob_valid });
        }
        Ok(Self { rng, prob_valid })
    }

    /// The configured acceptance probability.
    pub fn prob_valid(&self) -> f64 {
        self.prob_valid
    }
}

impl<S> ValidityChecker<S> for RandomValidityChecker {
    fn is_valid(&mut self, _state: &S) -> bool {
        self.rng.flip_with_bias(self.prob_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wend_space::So2State;

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn rejects_probability_above_one() {
        let err = RandomValidityChecker::new(SampleRng::from_seed(0), 1.5).unwrap_err();
        assert!(matches!(err, MotionError::InvalidProbability { .. }));
    }

    #[test]
    fn rejects_negative_probability() {
        let err = RandomValidityChecker::new(SampleRng::from_seed(0), -0.1).unwrap_err();
        assert!(matches!(err, MotionError::InvalidProbability { .. }));
    }

    #[test]
    fn rejects_nan_probability() {
        let err = RandomValidityChecker::new(SampleRng::from_seed(0), f64::NAN).unwrap_err();
        assert!(matches!(err, MotionError::InvalidProbability { .. }));
    }

    // ── Behaviour ───────────────────────────────────────────────

    #[test]
    fn extreme_probabilities_are_deterministic() {
        let state = So2State::new(0.0);
        let mut always = RandomValidityChecker::new(SampleRng::from_seed(1), 1.0).unwrap();
        let mut never = RandomValidityChecker::new(SampleRng::from_seed(1), 0.0).unwrap();
        for _ in 0..100 {
            assert!(always.is_valid(&state));
            assert!(!never.is_valid(&state));
        }
    }

    #[test]
    fn same_seed_same_verdicts() {
        let state = So2State::new(0.5);
        let mut a = RandomValidityChecker::new(SampleRng::from_seed(33), 0.5).unwrap();
        let mut b = RandomValidityChecker::new(SampleRng::from_seed(33), 0.5).unwrap();
        for _ in 0..64 {
            assert_eq!(a.is_valid(&state), b.is_valid(&state));
        }
    }

    #[test]
    fn always_valid_accepts_everything() {
        let mut checker = AlwaysValid;
        assert!(checker.is_valid(&So2State::new(-3.0)));
        assert!(checker.is_valid(&So2State::new(3.0)));
    }
}
