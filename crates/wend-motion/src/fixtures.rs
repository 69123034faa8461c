//! Shared test fixtures: a unit-interval space and a recording checker.

use crate::checker::ValidityChecker;
use std::fmt;
use wend_core::SampleRng;
use wend_space::{MetricSpace, Render, SpaceError, StateSpace};

/// A position on the unit interval `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineState {
    pub pos: f64,
}

impl LineState {
    pub fn new(pos: f64) -> Self {
        Self { pos }
    }
}

impl Render for LineState {
    fn render(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        writeln!(out, "{:indent$}line state: {}", "", self.pos)
    }
}

/// The unit interval with Euclidean distance and linear interpolation.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineSpace;

impl Render for LineSpace {
    fn render(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        writeln!(out, "{:indent$}line space [0, 1]", "")
    }
}

impl StateSpace for LineSpace {
    type State = LineState;

    fn make_state(&self) -> LineState {
        LineState::default()
    }

    fn dimension(&self) -> usize {
        1
    }

    fn sample_uniform_into(
        &self,
        rng: &mut SampleRng,
        out: &mut LineState,
    ) -> Result<(), SpaceError> {
        out.pos = rng.uniform_unit();
        Ok(())
    }

    fn sample_uniform_near_into(
        &self,
        rng: &mut SampleRng,
        center: &LineState,
        radius: f64,
        out: &mut LineState,
    ) -> Result<(), SpaceError> {
        out.pos = center.pos + radius * (2.0 * rng.uniform_unit() - 1.0);
        self.enforce_bounds(out);
        Ok(())
    }

    fn sample_gaussian_near_into(
        &self,
        rng: &mut SampleRng,
        center: &LineState,
        std_dev: f64,
        out: &mut LineState,
    ) -> Result<(), SpaceError> {
        out.pos = center.pos + rng.normal(0.0, std_dev);
        self.enforce_bounds(out);
        Ok(())
    }
}

impl MetricSpace for LineSpace {
    fn distance(&self, a: &LineState, b: &LineState) -> f64 {
        (a.pos - b.pos).abs()
    }

    fn interpolate_into(&self, from: &LineState, to: &LineState, t: f64, out: &mut LineState) {
        out.pos = from.pos + (to.pos - from.pos) * t;
    }

    fn satisfies_bounds(&self, state: &LineState) -> bool {
        (0.0..=1.0).contains(&state.pos)
    }

    fn enforce_bounds(&self, state: &mut LineState) {
        state.pos = state.pos.clamp(0.0, 1.0);
    }
}

/// Records every queried position and rejects a configurable one.
#[derive(Clone, Debug, Default)]
pub struct RecordingChecker {
    pub visited: Vec<f64>,
    pub reject_pos: Option<f64>,
}

impl RecordingChecker {
    pub fn accepting_all() -> Self {
        Self::default()
    }

    pub fn rejecting(pos: f64) -> Self {
        Self {
            visited: Vec::new(),
            reject_pos: Some(pos),
        }
    }
}

impl ValidityChecker<LineState> for RecordingChecker {
    fn is_valid(&mut self, state: &LineState) -> bool {
        self.visited.push(state.pos);
        self.reject_pos != Some(state.pos)
    }
}
