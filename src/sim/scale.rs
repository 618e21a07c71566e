//! Axis-scale estimation
//!
//! Samples the full trajectory once at run start to find the position and
//! velocity extents used to normalize chart and animation coordinates. Both
//! endpoints of every interval are visited explicitly so peaks falling
//! between grid samples at the ends are never missed.

use serde::{Deserialize, Serialize};

use crate::consts::{AXIS_MARGIN, DEGENERATE_HALF_RANGE, EPSILON, SCALE_SAMPLE_STEP};
use crate::{accelerate, displace};

use super::params::SimulationParameters;

/// Min/max extent of one charted quantity, margin included
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Start tracking from a single seed value
    fn seed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Widen to include `value`
    fn include(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Apply the degenerate-range fallback or the margin expansion
    fn expand(&mut self) {
        let range = self.max - self.min;
        if range < EPSILON {
            let center = (self.min + self.max) / 2.0;
            self.min = center - DEGENERATE_HALF_RANGE;
            self.max = center + DEGENERATE_HALF_RANGE;
        } else {
            self.min -= range * AXIS_MARGIN;
            self.max += range * AXIS_MARGIN;
        }
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Map `value` from these bounds into `[out_min, out_max]`
    ///
    /// The output range may be inverted (screen-space y grows downward).
    pub fn remap(&self, value: f64, out_min: f64, out_max: f64) -> f64 {
        out_min + (value - self.min) / self.range() * (out_max - out_min)
    }
}

/// Axis bounds for both charted quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub position: AxisBounds,
    pub velocity: AxisBounds,
}

/// Estimate chart bounds for a validated parameter set
pub fn estimate(params: &SimulationParameters) -> ChartBounds {
    let mut position = AxisBounds::seed(params.s0);
    let mut velocity = AxisBounds::seed(params.v0);

    let mut s = params.s0;
    let mut v = params.v0;
    for interval in &params.intervals {
        let a = interval.acceleration;
        let d = interval.duration;

        let mut local = 0.0;
        while local < d {
            position.include(displace(s, v, a, local));
            velocity.include(accelerate(v, a, local));
            local += SCALE_SAMPLE_STEP;
        }
        // Interval end, explicitly (the grid rarely lands on it)
        let s_end = displace(s, v, a, d);
        let v_end = accelerate(v, a, d);
        position.include(s_end);
        velocity.include(v_end);

        s = s_end;
        v = v_end;
    }

    position.expand();
    velocity.expand();

    log::debug!(
        "chart bounds: position [{:.2}, {:.2}] m, velocity [{:.2}, {:.2}] m/s",
        position.min,
        position.max,
        velocity.min,
        velocity.max
    );

    ChartBounds { position, velocity }
}
