//! Metric-space contract test helpers.
//!
//! These functions verify that a [`MetricSpace`] implementation
//! satisfies the invariants the motion validator relies on. Reused
//! across leaf space test modules.

use crate::space::MetricSpace;
use wend_core::SampleRng;

const EPS: f64 = 1e-9;

/// Draw a pool of sample states to run the contract checks over.
fn sample_pool<S: MetricSpace>(space: &S, rng: &mut SampleRng, n: usize) -> Vec<S::State> {
    let mut states = vec![space.make_state()];
    for _ in 0..n {
        states.push(space.sample_uniform(rng).expect("leaf sampling must not fail"));
    }
    states
}

/// Assert `distance(a, a) == 0` and `distance(a, b) >= 0` for all pairs.
pub fn assert_distance_reflexive_non_negative<S: MetricSpace>(space: &S, states: &[S::State]) {
    for a in states {
        assert!(
            space.distance(a, a).abs() < EPS,
            "distance({a:?}, {a:?}) != 0"
        );
        for b in states {
            assert!(
                space.distance(a, b) >= 0.0,
                "distance({a:?}, {b:?}) is negative"
            );
        }
    }
}

/// Assert `distance(a, b) == distance(b, a)` for all pairs.
pub fn assert_distance_symmetric<S: MetricSpace>(space: &S, states: &[S::State]) {
    for a in states {
        for b in states {
            let dab = space.distance(a, b);
            let dba = space.distance(b, a);
            assert!(
                (dab - dba).abs() < EPS,
                "distance({a:?}, {b:?}) = {dab} != distance({b:?}, {a:?}) = {dba}"
            );
        }
    }
}

/// Assert the triangle inequality over all triples.
pub fn assert_distance_triangle_inequality<S: MetricSpace>(space: &S, states: &[S::State]) {
    for a in states {
        for b in states {
            for c in states {
                let dac = space.distance(a, c);
                let dab = space.distance(a, b);
                let dbc = space.distance(b, c);
                assert!(
                    dac <= dab + dbc + EPS,
                    "triangle inequality violated for {a:?}, {b:?}, {c:?}"
                );
            }
        }
    }
}

/// Assert `interpolate(a, b, 0) == a` and `interpolate(a, b, 1) == b`
/// (up to distance epsilon) for all pairs.
pub fn assert_interpolate_endpoints<S: MetricSpace>(space: &S, states: &[S::State]) {
    for a in states {
        for b in states {
            let at_zero = space.interpolate(a, b, 0.0);
            let at_one = space.interpolate(a, b, 1.0);
            assert!(
                space.distance(&at_zero, a) < EPS,
                "interpolate({a:?}, {b:?}, 0) = {at_zero:?} != from"
            );
            assert!(
                space.distance(&at_one, b) < EPS,
                "interpolate({a:?}, {b:?}, 1) = {at_one:?} != to"
            );
        }
    }
}

/// Assert interpolated states stay within bounds for in-bounds inputs.
pub fn assert_interpolate_in_bounds<S: MetricSpace>(space: &S, states: &[S::State]) {
    for a in states {
        for b in states {
            for step in 0..=10 {
                let t = f64::from(step) / 10.0;
                let mid = space.interpolate(a, b, t);
                assert!(
                    space.satisfies_bounds(&mid),
                    "interpolate({a:?}, {b:?}, {t}) = {mid:?} out of bounds"
                );
            }
        }
    }
}

/// Assert every sampling variant produces in-bounds states.
pub fn assert_samples_in_bounds<S: MetricSpace>(space: &S, rng: &mut SampleRng) {
    for _ in 0..200 {
        let uniform = space.sample_uniform(rng).expect("leaf sampling must not fail");
        assert!(space.satisfies_bounds(&uniform));
        let near = space
            .sample_uniform_near(rng, &uniform, 10.0)
            .expect("leaf sampling must not fail");
        assert!(space.satisfies_bounds(&near));
        let gauss = space
            .sample_gaussian_near(rng, &uniform, 3.0)
            .expect("leaf sampling must not fail");
        assert!(space.satisfies_bounds(&gauss));
    }
}

/// Run all contract checks on a space.
pub fn run_full_compliance<S: MetricSpace>(space: &S, rng: &mut SampleRng) {
    let states = sample_pool(space, rng, 12);
    assert_distance_reflexive_non_negative(space, &states);
    assert_distance_symmetric(space, &states);
    assert_distance_triangle_inequality(space, &states);
    assert_interpolate_endpoints(space, &states);
    assert_interpolate_in_bounds(space, &states);
    assert_samples_in_bounds(space, rng);
}
