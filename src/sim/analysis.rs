//! One-shot run analysis
//!
//! Walks the three intervals once at run start, chaining boundary states,
//! registering velocity sign reversals that fall strictly inside an interval,
//! and accumulating distance traveled versus net displacement. The result is
//! immutable for the rest of the run; every consumer (charts, animation
//! markers, summary text) reads the same structured list rather than
//! re-deriving it.

use serde::{Deserialize, Serialize};

use crate::consts::EPSILON;
use crate::{accelerate, displace};

use super::params::SimulationParameters;

/// Start/end state of one interval, chained from the previous one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalBoundary {
    /// Global time at which the interval begins (s)
    pub start_time: f64,
    /// Global time at which the interval ends (s)
    pub end_time: f64,
    /// Position at the interval start (m)
    pub start_position: f64,
    /// Velocity at the interval start (m/s)
    pub start_velocity: f64,
    /// Acceleration over the interval (m/s²)
    pub acceleration: f64,
    /// Interval duration (s)
    pub duration: f64,
}

/// A velocity zero crossing strictly inside an interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReversalEvent {
    /// Global time of the crossing (s)
    pub time: f64,
    /// Position at the crossing (m); velocity there is zero
    pub position: f64,
}

/// Aggregate result of analyzing one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Net change in position over the run (m); signed
    pub displacement: f64,
    /// Sum of absolute path length, split at reversals (m)
    pub distance_traveled: f64,
    /// Sum of the three interval durations (s)
    pub total_duration: f64,
    /// Per-interval start states and accelerations, in order
    pub boundaries: Vec<IntervalBoundary>,
    /// Reversals in time order; empty if the velocity never changes sign
    pub reversals: Vec<ReversalEvent>,
}

/// Analyze a validated parameter set
pub fn analyze(params: &SimulationParameters) -> RunSummary {
    let mut s = params.s0;
    let mut v = params.v0;
    let mut t = 0.0;
    let mut distance = 0.0;
    let mut boundaries = Vec::with_capacity(params.intervals.len());
    let mut reversals = Vec::new();

    for (i, interval) in params.intervals.iter().enumerate() {
        let a = interval.acceleration;
        let d = interval.duration;
        boundaries.push(IntervalBoundary {
            start_time: t,
            end_time: t + d,
            start_position: s,
            start_velocity: v,
            acceleration: a,
            duration: d,
        });

        let s_end = displace(s, v, a, d);
        if a == 0.0 {
            // Uniform motion, no reversal possible
            distance += (v * d).abs();
        } else {
            let t_inv = -v / a;
            if t_inv > EPSILON && t_inv < d {
                // Zero crossing strictly inside the interval: split the leg
                let s_inv = displace(s, v, a, t_inv);
                distance += (s_inv - s).abs() + (s_end - s_inv).abs();
                reversals.push(ReversalEvent {
                    time: t + t_inv,
                    position: s_inv,
                });
                log::debug!(
                    "reversal in interval {} at local t' = {:.3}s (global {:.3}s), s = {:.3} m",
                    i + 1,
                    t_inv,
                    t + t_inv,
                    s_inv
                );
            } else {
                distance += (s_end - s).abs();
            }
        }

        s = s_end;
        v = accelerate(v, a, d);
        t += d;
    }

    RunSummary {
        displacement: s - params.s0,
        distance_traveled: distance,
        total_duration: t,
        boundaries,
        reversals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::model::evaluate;
    use crate::sim::params::Interval;
    use proptest::prelude::*;

    fn params(
        s0: f64,
        v0: f64,
        legs: [(f64, f64); 3],
    ) -> SimulationParameters {
        SimulationParameters::new(s0, v0, legs.map(|(a, d)| Interval::new(a, d)))
    }

    #[test]
    fn test_reversal_outside_interval_not_registered() {
        // v0=10, a1=-2 over 3s: zero crossing at t' = 5s, past the interval
        // end, so no reversal anywhere in the run.
        let p = params(0.0, 10.0, [(-2.0, 3.0), (0.0, 2.0), (2.0, 2.0)]);
        let summary = analyze(&p);
        assert!(summary.reversals.is_empty());
        assert!((summary.total_duration - 7.0).abs() < 1e-12);
        // Velocity never changes sign, so distance equals |displacement|
        assert!(
            (summary.distance_traveled - summary.displacement.abs()).abs() < 1e-9
        );
    }

    #[test]
    fn test_reversal_inside_interval() {
        // v0=5, a1=-10 over 1s: crossing at t' = 0.5s,
        // s(0.5) = 5*0.5 - 5*0.25 = 1.25 m
        let p = params(0.0, 5.0, [(-10.0, 1.0), (0.0, 1.0), (0.0, 1.0)]);
        let summary = analyze(&p);
        assert_eq!(summary.reversals.len(), 1);
        let rev = summary.reversals[0];
        assert!((rev.time - 0.5).abs() < 1e-12);
        assert!((rev.position - 1.25).abs() < 1e-12);

        // Interval 1 ends at s=0, v=-5; legs 2 and 3 coast at -5 m/s.
        // Distance: 1.25 + 1.25 + 5 + 5 = 12.5; displacement: -10.
        assert!((summary.displacement - (-10.0)).abs() < 1e-12);
        assert!((summary.distance_traveled - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_constant_velocity_run() {
        let p = params(0.0, 4.0, [(0.0, 1.0), (0.0, 1.0), (0.0, 1.0)]);
        let summary = analyze(&p);
        assert!(summary.reversals.is_empty());
        assert!((summary.displacement - 12.0).abs() < 1e-12);
        assert!((summary.distance_traveled - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_exact_zero_crossing_excluded() {
        // v0=10, a=-5 over 2s: velocity reaches zero exactly at the interval
        // end; not an interior reversal.
        let p = params(0.0, 10.0, [(-5.0, 2.0), (0.0, 1.0), (0.0, 1.0)]);
        let summary = analyze(&p);
        assert!(summary.reversals.is_empty());

        // Starting from rest: crossing at t' = 0 is also excluded.
        let p = params(0.0, 0.0, [(3.0, 1.0), (0.0, 1.0), (0.0, 1.0)]);
        let summary = analyze(&p);
        assert!(summary.reversals.is_empty());
    }

    #[test]
    fn test_boundaries_chain_continuously() {
        let p = params(2.0, -4.0, [(3.0, 1.5), (-1.0, 2.0), (0.5, 1.0)]);
        let summary = analyze(&p);
        assert_eq!(summary.boundaries.len(), 3);
        for pair in summary.boundaries.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            assert_eq!(prev.end_time, next.start_time);
            let end = evaluate(&p, prev.end_time);
            assert!((end.position - next.start_position).abs() < 1e-9);
            assert!((end.velocity - next.start_velocity).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reversal_velocity_changes_sign() {
        let p = params(1.0, 6.0, [(-4.0, 2.0), (2.0, 3.0), (-1.0, 2.0)]);
        let summary = analyze(&p);
        for rev in &summary.reversals {
            let before = evaluate(&p, rev.time - 1e-4).velocity;
            let after = evaluate(&p, rev.time + 1e-4).velocity;
            assert!(before * after < 0.0, "no sign change around {}", rev.time);
        }
    }

    fn arb_params() -> impl Strategy<Value = SimulationParameters> {
        (
            -100.0..100.0f64,
            -50.0..50.0f64,
            proptest::array::uniform3((-20.0..20.0f64, 0.1..8.0f64)),
        )
            .prop_map(|(s0, v0, legs)| params(s0, v0, legs))
    }

    proptest! {
        #[test]
        fn prop_distance_bounds_displacement(p in arb_params()) {
            let summary = analyze(&p);
            prop_assert!(
                summary.distance_traveled >= summary.displacement.abs() - 1e-9
            );
        }

        #[test]
        fn prop_reversals_strictly_interior_and_ordered(p in arb_params()) {
            let summary = analyze(&p);
            for rev in &summary.reversals {
                let boundary = summary
                    .boundaries
                    .iter()
                    .find(|b| rev.time > b.start_time && rev.time < b.end_time);
                prop_assert!(boundary.is_some());
            }
            for pair in summary.reversals.windows(2) {
                prop_assert!(pair[0].time < pair[1].time);
            }
        }
    }
}
