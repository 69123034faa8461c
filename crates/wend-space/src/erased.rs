//! Type-erased substate and subspace holders.
//!
//! [`Substate`] and [`Subspace`] give heterogeneous leaf states and
//! spaces a single runtime interface so compound aggregates can store
//! them together. Cloning goes through the erased `clone_boxed` hook,
//! compiled once per wrapped concrete type, so a copy always
//! deep-clones the concrete payload (double dispatch: the holder does
//! not know the concrete type, the hook does). Payload recovery is a
//! checked downcast that reports [`SpaceError::TypeMismatch`] instead
//! of ever reinterpreting storage blindly.

use crate::error::SpaceError;
use crate::render::Render;
use crate::space::StateSpace;
use std::any::{self, Any};
use std::fmt;
use wend_core::SampleRng;

/// Object-safe view of one owned state value.
trait ErasedState: Render + Send + Sync {
    fn clone_boxed(&self) -> Box<dyn ErasedState>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T> ErasedState for T
where
    T: Clone + Render + Send + Sync + 'static,
{
    fn clone_boxed(&self) -> Box<dyn ErasedState> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

/// A type-erased holder of exactly one concrete state value.
///
/// The held concrete type is fixed at construction and never changes
/// across the holder's lifetime; sampling overwrites the payload in
/// place through [`downcast_mut`](Self::downcast_mut), it never swaps
/// the type.
pub struct Substate {
    payload: Box<dyn ErasedState>,
}

impl Substate {
    /// Wrap a concrete state value, taking ownership.
    pub fn new<T>(value: T) -> Self
    where
        T: Clone + Render + Send + Sync + 'static,
    {
        Self {
            payload: Box::new(value),
        }
    }

    /// Type name of the held concrete state.
    pub fn type_name(&self) -> &'static str {
        self.payload.type_name()
    }

    /// Borrow the held value as concrete type `T`.
    ///
    /// Fails with [`SpaceError::TypeMismatch`] if the holder was
    /// constructed from a different type.
    pub fn downcast_ref<T: 'static>(&self) -> Result<&T, SpaceError> {
        self.payload
            .as_any()
            .downcast_ref::<T>()
            .ok_or(SpaceError::TypeMismatch {
                expected: any::type_name::<T>(),
                found: self.payload.type_name(),
            })
    }

    /// Mutably borrow the held value as concrete type `T`.
    ///
    /// Fails with [`SpaceError::TypeMismatch`] if the holder was
    /// constructed from a different type.
    pub fn downcast_mut<T: 'static>(&mut self) -> Result<&mut T, SpaceError> {
        let found = self.payload.type_name();
        self.payload
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or(SpaceError::TypeMismatch {
                expected: any::type_name::<T>(),
                found,
            })
    }
}

impl Clone for Substate {
    fn clone(&self) -> Self {
        Self {
            payload: self.payload.clone_boxed(),
        }
    }
}

impl fmt::Debug for Substate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Substate").field(&self.type_name()).finish()
    }
}

impl Render for Substate {
    fn render(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        self.payload.render(out, indent)
    }
}

/// Object-safe view of one owned space value.
///
/// Each sampling method recovers the wrapped space's concrete state
/// type from the erased arguments via the checked downcast before
/// delegating; an incompatible substate surfaces as
/// [`SpaceError::TypeMismatch`].
trait ErasedSpace: Render + Send + Sync {
    fn clone_boxed(&self) -> Box<dyn ErasedSpace>;
    fn dimension(&self) -> usize;
    fn empty_substate(&self) -> Substate;
    fn type_name(&self) -> &'static str;
    fn sample_uniform(&self, rng: &mut SampleRng, out: &mut Substate) -> Result<(), SpaceError>;
    fn sample_uniform_near(
        &self,
        rng: &mut SampleRng,
        center: &Substate,
        radius: f64,
        out: &mut Substate,
    ) -> Result<(), SpaceError>;
    fn sample_gaussian_near(
        &self,
        rng: &mut SampleRng,
        center: &Substate,
        std_dev: f64,
        out: &mut Substate,
    ) -> Result<(), SpaceError>;
}

impl<S: StateSpace> ErasedSpace for S {
    fn clone_boxed(&self) -> Box<dyn ErasedSpace> {
        Box::new(self.clone())
    }

    fn dimension(&self) -> usize {
        StateSpace::dimension(self)
    }

    fn empty_substate(&self) -> Substate {
        Substate::new(self.make_state())
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<S>()
    }

    fn sample_uniform(&self, rng: &mut SampleRng, out: &mut Substate) -> Result<(), SpaceError> {
        let out = out.downcast_mut::<S::State>()?;
        self.sample_uniform_into(rng, out)
    }

    fn sample_uniform_near(
        &self,
        rng: &mut SampleRng,
        center: &Substate,
        radius: f64,
        out: &mut Substate,
    ) -> Result<(), SpaceError> {
        let center = center.downcast_ref::<S::State>()?;
        let out = out.downcast_mut::<S::State>()?;
        self.sample_uniform_near_into(rng, center, radius, out)
    }

    fn sample_gaussian_near(
        &self,
        rng: &mut SampleRng,
        center: &Substate,
        std_dev: f64,
        out: &mut Substate,
    ) -> Result<(), SpaceError> {
        let center = center.downcast_ref::<S::State>()?;
        let out = out.downcast_mut::<S::State>()?;
        self.sample_gaussian_near_into(rng, center, std_dev, out)
    }
}

/// A type-erased holder of exactly one concrete space value.
///
/// Exposes the space capability generically — dimension, empty-state
/// construction, the three sampling variants — by forwarding to the
/// wrapped concrete space after a checked association between each
/// erased state argument and the concrete state type the space expects.
pub struct Subspace {
    inner: Box<dyn ErasedSpace>,
}

impl Subspace {
    /// Wrap a concrete space value, taking ownership.
    pub fn new<S: StateSpace>(space: S) -> Self {
        Self {
            inner: Box::new(space),
        }
    }

    /// Type name of the wrapped concrete space.
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    /// Dimension of the wrapped space.
    pub fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    /// A fresh erased state of the wrapped space's concrete state type.
    pub fn empty_substate(&self) -> Substate {
        self.inner.empty_substate()
    }

    /// Sample uniformly into `out`.
    pub fn sample_uniform(
        &self,
        rng: &mut SampleRng,
        out: &mut Substate,
    ) -> Result<(), SpaceError> {
        self.inner.sample_uniform(rng, out)
    }

    /// Sample uniformly within `radius` of `center` into `out`.
    pub fn sample_uniform_near(
        &self,
        rng: &mut SampleRng,
        center: &Substate,
        radius: f64,
        out: &mut Substate,
    ) -> Result<(), SpaceError> {
        self.inner.sample_uniform_near(rng, center, radius, out)
    }

    /// Sample a gaussian perturbation of `center` into `out`.
    pub fn sample_gaussian_near(
        &self,
        rng: &mut SampleRng,
        center: &Substate,
        std_dev: f64,
        out: &mut Substate,
    ) -> Result<(), SpaceError> {
        self.inner.sample_gaussian_near(rng, center, std_dev, out)
    }
}

impl Clone for Subspace {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
        }
    }
}

impl fmt::Debug for Subspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subspace").field(&self.type_name()).finish()
    }
}

impl Render for Subspace {
    fn render(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        self.inner.render(out, indent)
    }
}
