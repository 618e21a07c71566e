//! Simulation parameters and their validation
//!
//! Parameters arrive from a validated-input collaborator (a form, a JSON
//! scenario file) and are immutable for the lifetime of a run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::INTERVAL_COUNT;

/// One constant-acceleration leg of the motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Acceleration over the leg (m/s²)
    pub acceleration: f64,
    /// Leg duration (s), must be > 0
    pub duration: f64,
}

impl Interval {
    pub fn new(acceleration: f64, duration: f64) -> Self {
        Self {
            acceleration,
            duration,
        }
    }
}

/// Full parameter set for one run - immutable once a run starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Initial position (m)
    pub s0: f64,
    /// Initial velocity (m/s)
    pub v0: f64,
    /// The three consecutive acceleration legs
    pub intervals: [Interval; INTERVAL_COUNT],
}

/// Validation failure for a parameter set
///
/// `field` names follow the eight user-facing inputs: `s0`, `v0`, `a1..a3`,
/// `dt1..dt3`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameters {
    #[error("input `{field}` is not a finite number")]
    NonFinite { field: &'static str },
    #[error("input `{field}` must be positive, got {value}")]
    NonPositiveDuration { field: &'static str, value: f64 },
}

const ACCEL_FIELDS: [&str; INTERVAL_COUNT] = ["a1", "a2", "a3"];
const DURATION_FIELDS: [&str; INTERVAL_COUNT] = ["dt1", "dt2", "dt3"];

impl SimulationParameters {
    pub fn new(s0: f64, v0: f64, intervals: [Interval; INTERVAL_COUNT]) -> Self {
        Self { s0, v0, intervals }
    }

    /// Check the run invariants: all eight inputs finite, durations > 0
    pub fn validate(&self) -> Result<(), InvalidParameters> {
        if !self.s0.is_finite() {
            return Err(InvalidParameters::NonFinite { field: "s0" });
        }
        if !self.v0.is_finite() {
            return Err(InvalidParameters::NonFinite { field: "v0" });
        }
        for (i, interval) in self.intervals.iter().enumerate() {
            if !interval.acceleration.is_finite() {
                return Err(InvalidParameters::NonFinite {
                    field: ACCEL_FIELDS[i],
                });
            }
            if !interval.duration.is_finite() {
                return Err(InvalidParameters::NonFinite {
                    field: DURATION_FIELDS[i],
                });
            }
            if interval.duration <= 0.0 {
                return Err(InvalidParameters::NonPositiveDuration {
                    field: DURATION_FIELDS[i],
                    value: interval.duration,
                });
            }
        }
        Ok(())
    }

    /// Sum of the three interval durations (s)
    pub fn total_duration(&self) -> f64 {
        self.intervals.iter().map(|i| i.duration).sum()
    }

    /// Global start time of interval `index` (cumulative prior durations)
    pub fn interval_start(&self, index: usize) -> f64 {
        self.intervals[..index].iter().map(|i| i.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_params() -> SimulationParameters {
        SimulationParameters::new(
            0.0,
            10.0,
            [
                Interval::new(-2.0, 3.0),
                Interval::new(0.0, 2.0),
                Interval::new(2.0, 2.0),
            ],
        )
    }

    #[test]
    fn test_valid_params_pass() {
        assert_eq!(valid_params().validate(), Ok(()));
    }

    #[test]
    fn test_total_duration() {
        assert!((valid_params().total_duration() - 7.0).abs() < 1e-12);
        assert!((valid_params().interval_start(0) - 0.0).abs() < 1e-12);
        assert!((valid_params().interval_start(2) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let mut p = valid_params();
        p.s0 = f64::NAN;
        assert_eq!(
            p.validate(),
            Err(InvalidParameters::NonFinite { field: "s0" })
        );

        let mut p = valid_params();
        p.intervals[1].acceleration = f64::INFINITY;
        assert_eq!(
            p.validate(),
            Err(InvalidParameters::NonFinite { field: "a2" })
        );
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let mut p = valid_params();
        p.intervals[2].duration = 0.0;
        assert_eq!(
            p.validate(),
            Err(InvalidParameters::NonPositiveDuration {
                field: "dt3",
                value: 0.0
            })
        );

        p.intervals[2].duration = -1.5;
        assert!(matches!(
            p.validate(),
            Err(InvalidParameters::NonPositiveDuration { field: "dt3", .. })
        ));
    }

    #[test]
    fn test_params_json_round_trip() {
        let p = valid_params();
        let json = serde_json::to_string(&p).unwrap();
        let back: SimulationParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
