//! Triphase entry point
//!
//! Headless stand-in for the animation-frame driver: loads a scenario (JSON
//! file or seed), runs the playback clock to completion at a fixed frame
//! step, and prints the run summary as JSON.
//!
//! Usage:
//!   triphase                  # scenario from seed 0
//!   triphase 1337             # scenario from seed 1337
//!   triphase scenario.json    # scenario from a parameters file

use std::env;
use std::fs;
use std::process::ExitCode;

use triphase::sim::{ClockPhase, PlaybackClock, SimulationParameters, random_parameters};

/// Frame step of the simulated external driver (60 Hz)
const FRAME_DT: f64 = 1.0 / 60.0;

fn load_scenario(arg: Option<String>) -> Result<SimulationParameters, String> {
    match arg {
        None => Ok(random_parameters(0)),
        Some(arg) => {
            if let Ok(seed) = arg.parse::<u64>() {
                return Ok(random_parameters(seed));
            }
            let json = fs::read_to_string(&arg)
                .map_err(|e| format!("cannot read scenario file `{arg}`: {e}"))?;
            serde_json::from_str(&json)
                .map_err(|e| format!("cannot parse scenario file `{arg}`: {e}"))
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let params = match load_scenario(env::args().nth(1)) {
        Ok(params) => params,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut clock = PlaybackClock::new();
    if let Err(e) = clock.start(params) {
        log::error!("invalid parameters: {e}");
        return ExitCode::FAILURE;
    }

    while clock.tick(FRAME_DT).phase == ClockPhase::Running {}

    let state = clock.state();
    log::info!(
        "final state: s = {:.2} m, v = {:.2} m/s, t = {:.2}s ({} chart points)",
        state.current_position,
        state.current_velocity,
        state.elapsed_time,
        clock.position_series().len()
    );

    match clock.summary().map(serde_json::to_string_pretty) {
        Some(Ok(json)) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        _ => {
            log::error!("no summary to print");
            ExitCode::FAILURE
        }
    }
}
