//! Seeded scenario generation
//!
//! Deterministic "random" parameter sets: the same seed always yields the
//! same scenario, so a demo run or a bug report can be reproduced by seed
//! alone.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::INTERVAL_COUNT;

use super::params::{Interval, SimulationParameters};

/// Generate a valid parameter set from a seed
///
/// Accelerations land in ±10 m/s² with a bias toward exact zeros so uniform
/// legs show up regularly; durations land in [0.5, 6) s.
pub fn random_parameters(seed: u64) -> SimulationParameters {
    let mut rng = Pcg32::seed_from_u64(seed);

    let s0 = rng.random_range(-20.0..20.0);
    let v0 = rng.random_range(-15.0..15.0);
    let intervals: [Interval; INTERVAL_COUNT] = std::array::from_fn(|_| {
        let acceleration = if rng.random_bool(0.2) {
            0.0
        } else {
            rng.random_range(-10.0..10.0)
        };
        Interval::new(acceleration, rng.random_range(0.5..6.0))
    });

    let params = SimulationParameters::new(s0, v0, intervals);
    log::debug!("scenario from seed {seed}: {params:?}");
    params
}
