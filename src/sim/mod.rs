//! Deterministic simulation module
//!
//! All kinematics logic lives here. This module must be pure and deterministic:
//! - Closed-form arithmetic over a bounded three-interval structure
//! - Per-run artifacts (summary, bounds) computed once and cached immutable
//! - No rendering or platform dependencies

pub mod analysis;
pub mod clock;
pub mod model;
pub mod params;
pub mod scale;
pub mod scenario;

pub use analysis::{IntervalBoundary, ReversalEvent, RunSummary, analyze};
pub use clock::{ClockPhase, MotionSample, PlaybackClock, PlaybackState, TickOutput};
pub use model::{MotionState, evaluate, position_at};
pub use params::{Interval, InvalidParameters, SimulationParameters};
pub use scale::{AxisBounds, ChartBounds, estimate};
pub use scenario::random_parameters;
