//! Validity-driven rejection sampling.

use crate::checker::ValidityChecker;
use crate::error::MotionError;
use wend_core::SampleRng;
use wend_space::StateSpace;

/// Draws gaussian perturbations of uniform seed states until the
/// validity oracle accepts one.
///
/// Each attempt draws a uniform seed state, perturbs it with
/// `sample_gaussian_near`, and offers the perturbed state to the
/// checker. Attempts are bounded: a pathological or mis-configured
/// oracle surfaces as [`MotionError::AttemptsExhausted`] instead of an
/// unbounded loop.
#[derive(Clone, Debug)]
pub struct GaussianSampler<S, V> {
    space: S,
    checker: V,
    std_dev: f64,
    max_attempts: usize,
}

impl<S, V> GaussianSampler<S, V>
where
    S: StateSpace,
    V: ValidityChecker<S::State>,
{
    /// Default bound on rejection attempts per sample.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

    /// Create a sampler with the default attempt bound.
    pub fn new(space: S, checker: V, std_dev: f64) -> Self {
        Self::with_max_attempts(space, checker, std_dev, Self::DEFAULT_MAX_ATTEMPTS)
    }

    /// Create a sampler with an explicit attempt bound.
    ///
    /// A bound of zero makes every call fail with
    /// [`MotionError::AttemptsExhausted`].
    pub fn with_max_attempts(space: S, checker: V, std_dev: f64, max_attempts: usize) -> Self {
        Self {
            space,
            checker,
            std_dev,
            max_attempts,
        }
    }

    /// The wrapped validity oracle.
    pub fn checker(&self) -> &V {
        &self.checker
    }

    /// Sample a valid state into `out`.
    ///
    /// Fails with [`MotionError::AttemptsExhausted`] once the attempt
    /// bound is hit, or with [`MotionError::Space`] if the space
    /// rejects the dispatch (possible only for mis-built compounds).
    pub fn sample_into(&mut self, rng: &mut SampleRng, out: &mut S::State) -> Result<(), MotionError> {
        let mut seed = self.space.make_state();
        for _ in 0..self.max_attempts {
            self.space.sample_uniform_into(rng, &mut seed)?;
            self.space
                .sample_gaussian_near_into(rng, &seed, self.std_dev, out)?;
            if self.checker.is_valid(out) {
                return Ok(());
            }
        }
        Err(MotionError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Sample a valid state, returning it.
    pub fn sample(&mut self, rng: &mut SampleRng) -> Result<S::State, MotionError> {
        let mut out = self.space.make_state();
        self.sample_into(rng, &mut out)?;
        Ok(out)
    }
}
