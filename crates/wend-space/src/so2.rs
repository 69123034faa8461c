//! The circle SO(2): planar rotation angles with wraparound.

use crate::error::SpaceError;
use crate::render::Render;
use crate::space::{MetricSpace, StateSpace};
use std::f64::consts::PI;
use std::fmt;
use wend_core::SampleRng;

const TWO_PI: f64 = 2.0 * PI;

/// A planar rotation angle in radians, kept within `[-pi, pi)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct So2State {
    /// Angle in radians.
    pub angle: f64,
}

impl So2State {
    /// Create a state from an angle in radians.
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }
}

impl Render for So2State {
    fn render(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        writeln!(out, "{:indent$}so2 state: {} rad", "", self.angle)
    }
}

/// The space of planar rotations.
///
/// States are angles in `[-pi, pi)`; distance and interpolation take
/// the shorter way around the circle, so `-pi + eps` and `pi - eps` are
/// `2 * eps` apart, not nearly a full turn.
///
/// # Examples
///
/// ```
/// use wend_space::{MetricSpace, So2Space, So2State};
///
/// let space = So2Space::new();
/// let a = So2State::new(3.0);
/// let b = So2State::new(-3.0);
/// // Wraparound: the short way across the -pi/pi seam.
/// assert!((space.distance(&a, &b) - (2.0 * std::f64::consts::PI - 6.0)).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct So2Space;

impl So2Space {
    /// Create the rotation space.
    pub fn new() -> Self {
        Self
    }

    /// Largest possible distance between two states.
    pub fn maximum_extent(&self) -> f64 {
        PI
    }

    /// Total measure (circumference) of the space.
    pub fn measure(&self) -> f64 {
        TWO_PI
    }
}

impl Render for So2Space {
    fn render(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result {
        writeln!(out, "{:indent$}so2 space [-pi, pi)", "")
    }
}

impl StateSpace for So2Space {
    type State = So2State;

    fn make_state(&self) -> So2State {
        So2State::default()
    }

    fn dimension(&self) -> usize {
        1
    }

    fn sample_uniform_into(
        &self,
        rng: &mut SampleRng,
        out: &mut So2State,
    ) -> Result<(), SpaceError> {
        out.angle = rng.uniform_angle();
        Ok(())
    }

    fn sample_uniform_near_into(
        &self,
        rng: &mut SampleRng,
        center: &So2State,
        radius: f64,
        out: &mut So2State,
    ) -> Result<(), SpaceError> {
        out.angle = center.angle + radius * (2.0 * rng.uniform_unit() - 1.0);
        self.enforce_bounds(out);
        Ok(())
    }

    fn sample_gaussian_near_into(
        &self,
        rng: &mut SampleRng,
        center: &So2State,
        std_dev: f64,
        out: &mut So2State,
    ) -> Result<(), SpaceError> {
        out.angle = center.angle + rng.normal(0.0, std_dev);
        self.enforce_bounds(out);
        Ok(())
    }
}

impl MetricSpace for So2Space {
    fn distance(&self, a: &So2State, b: &So2State) -> f64 {
        let d = (a.angle - b.angle).abs();
        if d > PI {
            TWO_PI - d
        } else {
            d
        }
    }

    /// Shortest-arc interpolation.
    ///
    /// Input states are assumed within bounds; the result is folded
    /// back into `[-pi, pi)` when the arc crosses the seam.
    fn interpolate_into(&self, from: &So2State, to: &So2State, t: f64, out: &mut So2State) {
        let diff = to.angle - from.angle;
        if diff.abs() <= PI {
            out.angle = from.angle + diff * t;
        } else {
            let wrapped = if diff > 0.0 {
                TWO_PI - diff
            } else {
                -TWO_PI - diff
            };
            out.angle = from.angle - wrapped * t;
            if out.angle > PI {
                out.angle -= TWO_PI;
            } else if out.angle < -PI {
                out.angle += TWO_PI;
            }
        }
    }

    fn satisfies_bounds(&self, state: &So2State) -> bool {
        (-PI..PI).contains(&state.angle)
    }

    fn enforce_bounds(&self, state: &mut So2State) {
        let mut angle = state.angle % TWO_PI;
        if angle < -PI {
            angle += TWO_PI;
        } else if angle >= PI {
            angle -= TWO_PI;
        }
        state.angle = angle;
    }
}
