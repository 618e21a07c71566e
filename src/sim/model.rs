//! Piecewise motion model
//!
//! Pure closed-form evaluators over a parameter set. The interval containing
//! a global time is half-open `[start, start + duration)`, except the final
//! interval which is closed at its end; times outside `[0, total]` clamp to
//! the nearest endpoint (no extrapolation).

use crate::{accelerate, displace};

use super::params::SimulationParameters;

/// Instantaneous state of the particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Position (m)
    pub position: f64,
    /// Velocity (m/s)
    pub velocity: f64,
}

/// Evaluate position and velocity at global time `t`
pub fn evaluate(params: &SimulationParameters, t: f64) -> MotionState {
    if t <= 0.0 {
        return MotionState {
            position: params.s0,
            velocity: params.v0,
        };
    }
    let t = t.min(params.total_duration());

    let mut start = 0.0;
    let mut s = params.s0;
    let mut v = params.v0;
    for interval in &params.intervals {
        let end = start + interval.duration;
        if t < end {
            let local = t - start;
            return MotionState {
                position: displace(s, v, interval.acceleration, local),
                velocity: accelerate(v, interval.acceleration, local),
            };
        }
        s = displace(s, v, interval.acceleration, interval.duration);
        v = accelerate(v, interval.acceleration, interval.duration);
        start = end;
    }

    // t == total duration (final interval is closed at its end)
    MotionState {
        position: s,
        velocity: v,
    }
}

/// Position at global time `t` (reversal-marker placement helper)
pub fn position_at(params: &SimulationParameters, t: f64) -> f64 {
    evaluate(params, t).position
}
