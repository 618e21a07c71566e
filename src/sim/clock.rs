//! Playback clock
//!
//! Owns all mutable per-run state: the elapsed-time cursor, the current
//! particle state, and the append-only chart series. An external frame loop
//! drives `tick` once per frame; all calls are synchronous and never invoked
//! concurrently with each other.

use glam::DVec2;

use crate::consts::MAX_TICK_DT;

use super::analysis::{self, ReversalEvent, RunSummary};
use super::model::{self, MotionState};
use super::params::{InvalidParameters, SimulationParameters};
use super::scale::{self, ChartBounds};

/// Where playback currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPhase {
    /// No run started yet
    Idle,
    /// Run in progress, time advancing
    Running,
    /// Run in progress, time frozen
    Paused,
    /// Run reached its total duration; terminal until the next `start`
    Finished,
}

/// Mutable playback cursor, reset on every `start`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Simulation time elapsed since run start (s); monotonic, clamped at
    /// the total duration
    pub elapsed_time: f64,
    /// Particle position at `elapsed_time` (m)
    pub current_position: f64,
    /// Particle velocity at `elapsed_time` (m/s)
    pub current_velocity: f64,
    /// A run is underway (set by `start`, cleared on completion)
    pub running: bool,
    /// Time is frozen (only meaningful while running)
    pub paused: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            elapsed_time: 0.0,
            current_position: 0.0,
            current_velocity: 0.0,
            running: false,
            paused: false,
        }
    }
}

/// Time-stamped state handed to the renderer each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
}

/// Result of one `tick` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput {
    pub phase: ClockPhase,
    /// `None` when the tick was a no-op (idle, paused, or already finished)
    pub sample: Option<MotionSample>,
}

/// Immutable artifacts of the active run, computed once at `start`
#[derive(Debug, Clone)]
struct ActiveRun {
    params: SimulationParameters,
    summary: RunSummary,
    bounds: ChartBounds,
}

/// The playback state machine: `Idle → Running ⇄ Paused → Finished`
#[derive(Debug, Clone, Default)]
pub struct PlaybackClock {
    run: Option<ActiveRun>,
    state: PlaybackState,
    /// Position-vs-time chart points (x = time, y = position), append-only
    position_series: Vec<DVec2>,
    /// Velocity-vs-time chart points (x = time, y = velocity), append-only
    velocity_series: Vec<DVec2>,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new run, superseding any previous one
    ///
    /// Fails atomically: on `InvalidParameters` the prior run (if any) is
    /// left untouched.
    pub fn start(
        &mut self,
        params: SimulationParameters,
    ) -> Result<&RunSummary, InvalidParameters> {
        params.validate()?;

        let summary = analysis::analyze(&params);
        let bounds = scale::estimate(&params);
        log::info!(
            "run started: {:.2}s total, displacement {:.2} m, distance {:.2} m, {} reversal(s)",
            summary.total_duration,
            summary.displacement,
            summary.distance_traveled,
            summary.reversals.len()
        );

        self.state = PlaybackState {
            elapsed_time: 0.0,
            current_position: params.s0,
            current_velocity: params.v0,
            running: true,
            paused: false,
        };
        self.position_series.clear();
        self.velocity_series.clear();
        self.position_series.push(DVec2::new(0.0, params.s0));
        self.velocity_series.push(DVec2::new(0.0, params.v0));

        let run = self.run.insert(ActiveRun {
            params,
            summary,
            bounds,
        });
        Ok(&run.summary)
    }

    /// Freeze time; no-op unless running and not already paused
    pub fn pause(&mut self) {
        if self.state.running && !self.state.paused {
            self.state.paused = true;
            log::debug!("playback paused at t = {:.2}s", self.state.elapsed_time);
        }
    }

    /// Unfreeze time; no-op unless paused
    pub fn resume(&mut self) {
        if self.state.running && self.state.paused {
            self.state.paused = false;
            log::debug!("playback resumed at t = {:.2}s", self.state.elapsed_time);
        }
    }

    /// Advance the time cursor by at most `MAX_TICK_DT` and sample the model
    ///
    /// No-op (not an error) when idle, paused, or finished.
    pub fn tick(&mut self, dt: f64) -> TickOutput {
        let Some(run) = &self.run else {
            return TickOutput {
                phase: ClockPhase::Idle,
                sample: None,
            };
        };
        if !self.state.running || self.state.paused {
            return TickOutput {
                phase: self.phase(),
                sample: None,
            };
        }

        let dt_eff = dt.clamp(0.0, MAX_TICK_DT);
        let total = run.summary.total_duration;
        let mut now = self.state.elapsed_time + dt_eff;
        let finishing = now >= total;
        if finishing {
            now = total;
        }

        let MotionState { position, velocity } = model::evaluate(&run.params, now);
        self.state.elapsed_time = now;
        self.state.current_position = position;
        self.state.current_velocity = velocity;

        // Duplicate sample times would draw zero-width chart segments
        let last_time = self
            .position_series
            .last()
            .map_or(f64::NEG_INFINITY, |p| p.x);
        if now > last_time {
            self.position_series.push(DVec2::new(now, position));
            self.velocity_series.push(DVec2::new(now, velocity));
        }

        let phase = if finishing {
            self.state.running = false;
            self.state.paused = false;
            log::info!("run finished at t = {:.2}s", total);
            ClockPhase::Finished
        } else {
            ClockPhase::Running
        };
        TickOutput {
            phase,
            sample: Some(MotionSample {
                time: now,
                position,
                velocity,
            }),
        }
    }

    pub fn phase(&self) -> ClockPhase {
        match &self.run {
            None => ClockPhase::Idle,
            Some(_) if self.state.running && self.state.paused => ClockPhase::Paused,
            Some(_) if self.state.running => ClockPhase::Running,
            Some(_) => ClockPhase::Finished,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Parameters of the active run, if any
    pub fn params(&self) -> Option<&SimulationParameters> {
        self.run.as_ref().map(|r| &r.params)
    }

    /// Analysis result of the active run, if any
    pub fn summary(&self) -> Option<&RunSummary> {
        self.run.as_ref().map(|r| &r.summary)
    }

    /// Chart bounds of the active run, if any
    pub fn bounds(&self) -> Option<&ChartBounds> {
        self.run.as_ref().map(|r| &r.bounds)
    }

    /// Reversals of the active run, in time order; empty when idle
    pub fn reversals(&self) -> &[ReversalEvent] {
        self.run
            .as_ref()
            .map_or(&[], |r| r.summary.reversals.as_slice())
    }

    /// Position-vs-time points accumulated so far (x = time, y = position)
    pub fn position_series(&self) -> &[DVec2] {
        &self.position_series
    }

    /// Velocity-vs-time points accumulated so far (x = time, y = velocity)
    pub fn velocity_series(&self) -> &[DVec2] {
        &self.velocity_series
    }
}
