//! Ordered compound (Cartesian-product) states and spaces.

use crate::erased::{Substate, Subspace};
use crate::error::SpaceError;
use crate::render::Render;
use crate::space::StateSpace;
use std::fmt;
use wend_core::SampleRng;

/// An ordered, fixed-arity aggregate of [`Substate`]s.
///
/// A compound state mirrors the structure of the [`CompoundSpace`] that
/// produced it: `state[i]` always holds the concrete state type
/// expected by `space[i]` (positional correspondence). That
/// correspondence is established when the producing space clones its
/// prototype and cannot be broken afterwards — there is no public way
/// to insert or remove substates, sampling only overwrites payloads in
/// place.
///
/// Cloning produces a structurally equal, storage-independent copy.
#[derive(Clone, Debug, Default)]
pub struct CompoundState {
    substates: Vec<Substate>,
}

impl CompoundState {
    /// Number of substates.
    pub fn len(&self) -> usize {
        self.substates.len()
    }

    /// `true` if the state holds no substates.
    pub fn is_empty(&self) -> bool {
        self.substates.is_empty()
    }

    /// Borrow the substate at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, like slice indexing.
    pub fn substate(&self, index: usize) -> &Substate {
        &self.substates[index]
    }

    /// Borrow the substate at `index` as concrete type `T`.
    ///
    /// Fails with [`SpaceError::TypeMismatch`] if position `index`
    /// holds a different type.
    pub fn substate_ref<T: 'static>(&self, index: usize) -> Result<&T, SpaceError> {
        self.substates[index].downcast_ref()
    }

    /// Iterate over the substates in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &Substate> {
        self.substates.iter()
    }

    pub(crate) fn push_substate(&mut self, substate: Substate) {
        self.substates.push(substate);
    }

    pub(crate) fn substate_mut(&mut self, index: usize) -> &mut Substate {
        &mut self.substates[index]
    }
}

impl Render for CompoundState {
    fn render(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        writeln!(out, "{:indent$}begin compound state", "")?;
        for substate in &self.substates {
            substate.render(out, indent + 2)?;
        }
        writeln!(out, "{:indent$}end compound state", "")
    }
}

/// An ordered aggregate of [`Subspace`]s with a prototype state kept in
/// lockstep.
///
/// Built incrementally with [`add_subspace`](Self::add_subspace); the
/// structure is append-only, with no removal. Each append extends both
/// the subspace list and the internally owned prototype state in the
/// same step, so every state cloned from the prototype has the right
/// substate types in the right order without any further bookkeeping.
///
/// A compound space is itself a [`StateSpace`], so it can be appended
/// as a subspace of another compound space; every appended or cloned
/// copy is deep and independent.
///
/// # Examples
///
/// ```
/// use wend_core::SampleRng;
/// use wend_space::{CompoundSpace, So2Space, StateSpace};
///
/// let mut space = CompoundSpace::new();
/// space.add_subspace(So2Space::new());
/// space.add_subspace(So2Space::new());
/// assert_eq!(space.dimension(), 2);
///
/// let mut rng = SampleRng::from_seed(7);
/// let state = space.sample_uniform(&mut rng).unwrap();
/// assert_eq!(state.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct CompoundSpace {
    subspaces: Vec<Subspace>,
    proto_state: CompoundState,
}

impl CompoundSpace {
    /// Create an empty compound space.
    ///
    /// An empty compound has dimension zero, makes empty states, and
    /// its sampling operations are no-ops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subspace, extending the prototype state to match.
    ///
    /// The space is moved in. States made before this call keep their
    /// old arity and are rejected by later sampling operations with
    /// [`SpaceError::StructureMismatch`].
    pub fn add_subspace<S: StateSpace>(&mut self, space: S) {
        let subspace = Subspace::new(space);
        self.proto_state.push_substate(subspace.empty_substate());
        self.subspaces.push(subspace);
    }

    /// Number of subspaces.
    pub fn len(&self) -> usize {
        self.subspaces.len()
    }

    /// `true` if no subspace has been added yet.
    pub fn is_empty(&self) -> bool {
        self.subspaces.is_empty()
    }

    /// Borrow the subspace at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, like slice indexing.
    pub fn subspace(&self, index: usize) -> &Subspace {
        &self.subspaces[index]
    }

    /// Reject states whose substate count does not match this space.
    fn check_arity(&self, state: &CompoundState) -> Result<(), SpaceError> {
        if state.len() != self.subspaces.len() {
            return Err(SpaceError::StructureMismatch {
                expected: self.subspaces.len(),
                found: state.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for CompoundSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompoundSpace")
            .field("subspaces", &self.subspaces)
            .finish()
    }
}

impl StateSpace for CompoundSpace {
    type State = CompoundState;

    /// Clone of the prototype: the returned state reflects the space's
    /// shape at the time of the call, not retroactively.
    fn make_state(&self) -> CompoundState {
        self.proto_state.clone()
    }

    /// Sum of subspace dimensions.
    fn dimension(&self) -> usize {
        self.subspaces.iter().map(Subspace::dimension).sum()
    }

    fn sample_uniform_into(
        &self,
        rng: &mut SampleRng,
        out: &mut CompoundState,
    ) -> Result<(), SpaceError> {
        self.check_arity(out)?;
        for (idx, subspace) in self.subspaces.iter().enumerate() {
            subspace.sample_uniform(rng, out.substate_mut(idx))?;
        }
        Ok(())
    }

    fn sample_uniform_near_into(
        &self,
        rng: &mut SampleRng,
        center: &CompoundState,
        radius: f64,
        out: &mut CompoundState,
    ) -> Result<(), SpaceError> {
        self.check_arity(center)?;
        self.check_arity(out)?;
        for (idx, subspace) in self.subspaces.iter().enumerate() {
            subspace.sample_uniform_near(rng, center.substate(idx), radius, out.substate_mut(idx))?;
        }
        Ok(())
    }

    fn sample_gaussian_near_into(
        &self,
        rng: &mut SampleRng,
        center: &CompoundState,
        std_dev: f64,
        out: &mut CompoundState,
    ) -> Result<(), SpaceError> {
        self.check_arity(center)?;
        self.check_arity(out)?;
        for (idx, subspace) in self.subspaces.iter().enumerate() {
            subspace.sample_gaussian_near(
                rng,
                center.substate(idx),
                std_dev,
                out.substate_mut(idx),
            )?;
        }
        Ok(())
    }
}

impl Render for CompoundSpace {
    fn render(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        writeln!(out, "{:indent$}begin compound space", "")?;
        for subspace in &self.subspaces {
            subspace.render(out, indent + 2)?;
        }
        writeln!(out, "{:indent$}end compound space", "")
    }
}
