//! Triphase - three-phase MRUV kinematics simulation core
//!
//! Computes and plays back the motion of a single particle under
//! piecewise-constant acceleration across three consecutive time intervals.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion model, run analysis, axis
//!   scaling, playback clock)
//!
//! Rendering, input collection, and window plumbing live outside this crate;
//! the playback clock hands the renderer time-stamped samples, chart bounds,
//! and reversal markers and expects `tick` to be driven once per frame.

pub mod sim;

pub use sim::analysis::{IntervalBoundary, ReversalEvent, RunSummary};
pub use sim::clock::{ClockPhase, MotionSample, PlaybackClock, PlaybackState, TickOutput};
pub use sim::model::MotionState;
pub use sim::params::{Interval, InvalidParameters, SimulationParameters};
pub use sim::scale::{AxisBounds, ChartBounds};

/// Simulation design constants
pub mod consts {
    /// Number of constant-acceleration intervals per run
    pub const INTERVAL_COUNT: usize = 3;

    /// Tolerance used to exclude boundary-coincident zero crossings and to
    /// detect degenerate axis ranges
    pub const EPSILON: f64 = 1e-6;

    /// Trajectory sampling step for axis-scale estimation (seconds)
    pub const SCALE_SAMPLE_STEP: f64 = 0.05;

    /// Upper bound on a single playback step (seconds); keeps a slow external
    /// clock from visually skipping over reversals
    pub const MAX_TICK_DT: f64 = 0.05;

    /// Fraction of the observed range added as margin on each axis end
    pub const AXIS_MARGIN: f64 = 0.1;

    /// Half-range forced on an axis when the observed range is degenerate
    pub const DEGENERATE_HALF_RANGE: f64 = 1.0;
}

/// Position after `t` seconds of constant acceleration `a` from state `(s, v)`
#[inline]
pub fn displace(s: f64, v: f64, a: f64, t: f64) -> f64 {
    s + v * t + 0.5 * a * t * t
}

/// Velocity after `t` seconds of constant acceleration `a` from velocity `v`
#[inline]
pub fn accelerate(v: f64, a: f64, t: f64) -> f64 {
    v + a * t
}
