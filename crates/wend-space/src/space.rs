//! The leaf capability contracts: [`StateSpace`] and [`MetricSpace`].

use crate::error::SpaceError;
use crate::render::Render;
use std::fmt;
use wend_core::SampleRng;

/// Contract a space must satisfy to participate in composition.
///
/// A space owns the sampling math for its state representation but no
/// randomness: every sampling operation takes an explicit
/// [`SampleRng`] context, which keeps the side effect visible and makes
/// seeded runs reproducible.
///
/// The `_into` forms overwrite an existing state; the value-returning
/// forms clone a fresh state from [`make_state`](Self::make_state) and
/// fill it through the `_into` path, so each operation has exactly one
/// dispatch implementation.
///
/// Leaf implementations never fail. The `Result` exists because the
/// same contract is implemented by
/// [`CompoundSpace`](crate::CompoundSpace), whose fan-out detects
/// mis-built compositions and reports them as [`SpaceError`]s.
pub trait StateSpace: Render + Clone + Send + Sync + 'static {
    /// Concrete state representation of this space.
    type State: Clone + fmt::Debug + Render + Send + Sync + 'static;

    /// A default-valued state of the right shape for this space.
    fn make_state(&self) -> Self::State;

    /// Number of real dimensions of the space.
    fn dimension(&self) -> usize;

    /// Sample uniformly over the whole space, writing into `out`.
    fn sample_uniform_into(
        &self,
        rng: &mut SampleRng,
        out: &mut Self::State,
    ) -> Result<(), SpaceError>;

    /// Sample uniformly within `radius` of `center`, writing into `out`.
    fn sample_uniform_near_into(
        &self,
        rng: &mut SampleRng,
        center: &Self::State,
        radius: f64,
        out: &mut Self::State,
    ) -> Result<(), SpaceError>;

    /// Sample a gaussian perturbation of `center` with standard
    /// deviation `std_dev`, writing into `out`.
    fn sample_gaussian_near_into(
        &self,
        rng: &mut SampleRng,
        center: &Self::State,
        std_dev: f64,
        out: &mut Self::State,
    ) -> Result<(), SpaceError>;

    /// Sample uniformly over the whole space, returning a new state.
    fn sample_uniform(&self, rng: &mut SampleRng) -> Result<Self::State, SpaceError> {
        let mut out = self.make_state();
        self.sample_uniform_into(rng, &mut out)?;
        Ok(out)
    }

    /// Sample uniformly within `radius` of `center`, returning a new state.
    fn sample_uniform_near(
        &self,
        rng: &mut SampleRng,
        center: &Self::State,
        radius: f64,
    ) -> Result<Self::State, SpaceError> {
        let mut out = self.make_state();
        self.sample_uniform_near_into(rng, center, radius, &mut out)?;
        Ok(out)
    }

    /// Sample a gaussian perturbation of `center`, returning a new state.
    fn sample_gaussian_near(
        &self,
        rng: &mut SampleRng,
        center: &Self::State,
        std_dev: f64,
    ) -> Result<Self::State, SpaceError> {
        let mut out = self.make_state();
        self.sample_gaussian_near_into(rng, center, std_dev, &mut out)?;
        Ok(out)
    }
}

/// Geodesic capabilities a space needs to support motion validation.
///
/// Not every space carries a metric — a [`CompoundSpace`](crate::CompoundSpace)
/// in particular does not — so these live in a separate trait layered
/// on top of [`StateSpace`].
pub trait MetricSpace: StateSpace {
    /// Geodesic distance between two states.
    ///
    /// Non-negative and symmetric, with `distance(a, a) == 0`.
    fn distance(&self, a: &Self::State, b: &Self::State) -> f64;

    /// Interpolate from `from` to `to` at parameter `t` in `[0, 1]`,
    /// writing into `out`.
    ///
    /// `t == 0` yields `from` and `t == 1` yields `to`; the motion
    /// validator relies on these endpoint identities.
    fn interpolate_into(&self, from: &Self::State, to: &Self::State, t: f64, out: &mut Self::State);

    /// Interpolate, returning a new state.
    fn interpolate(&self, from: &Self::State, to: &Self::State, t: f64) -> Self::State {
        let mut out = self.make_state();
        self.interpolate_into(from, to, t, &mut out);
        out
    }

    /// Whether `state` lies within the space's bounds.
    fn satisfies_bounds(&self, state: &Self::State) -> bool;

    /// Project `state` into the space's bounds in place.
    fn enforce_bounds(&self, state: &mut Self::State);
}
