use rayon::prelude::*;

use crate::constants::{THRUST_SCALE_MAX, THRUST_SCALE_MIN, THRUST_SCALE_STEPS};
use crate::control::aircraft::{Aircraft, AircraftParams};
use crate::control::environment::Environment;
use crate::control::simulator::{FlightSimulator, SimulationConfig};
use crate::errors::SimulationError;

/// Sweep settings: thrust-scale range, sample count, and the seed base from
/// which each worker derives its own wind stream.
#[derive(Debug, Clone)]
pub struct SweepSettings {
    pub scale_min: f64,
    pub scale_max: f64,
    pub steps: usize,
    pub base_seed: u64,
}

impl Default for SweepSettings {
    fn default() -> Self {
        SweepSettings {
            scale_min: THRUST_SCALE_MIN,
            scale_max: THRUST_SCALE_MAX,
            steps: THRUST_SCALE_STEPS,
            base_seed: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSample {
    pub thrust_scale: f64,
    pub max_altitude: f64,
}

#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub optimal: SweepSample,
    pub samples: Vec<SweepSample>,
}

/// Evenly spaced values over [start, end], endpoints included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let increment = (end - start) / (steps - 1) as f64;
            (0..steps).map(|i| start + increment * i as f64).collect()
        }
    }
}

/// Thrust-scale parameter sweep. Each sample gets a fresh aircraft and
/// simulator with the rated thrust multiplied by its scale, runs to
/// completion, and reports the maximum altitude over the telemetry. Samples
/// are independent, so they run one worker per scale; each worker seeds its
/// own wind stream from base_seed + index.
pub fn standard_optimization(
    params: &AircraftParams,
    config: &SimulationConfig,
    environment: &Environment,
    settings: &SweepSettings,
) -> Result<SweepOutcome, SimulationError> {
    if settings.steps == 0 {
        return Err(SimulationError::ConfigurationError(
            "thrust sweep needs at least one sample".to_string(),
        ));
    }
    config.validate()?;

    let scales = linspace(settings.scale_min, settings.scale_max, settings.steps);

    let samples: Vec<SweepSample> = scales
        .par_iter()
        .enumerate()
        .map(|(index, &scale)| -> Result<SweepSample, SimulationError> {
            let mut scaled = params.clone();
            scaled.thrust *= scale;

            let aircraft = Aircraft::with_seed(
                scaled,
                config.initial_position,
                config.initial_velocity,
                config.initial_fuel,
                settings.base_seed + index as u64,
            )?;
            let mut simulator = FlightSimulator::new(
                aircraft,
                config.time_step,
                config.max_time,
                environment.clone(),
            )?;
            let telemetry = simulator.run();

            Ok(SweepSample {
                thrust_scale: scale,
                max_altitude: telemetry.max_altitude(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // First maximum wins ties, keeping the lowest optimal scale
    let mut optimal = samples[0];
    for sample in &samples[1..] {
        if sample.max_altitude > optimal.max_altitude {
            optimal = *sample;
        }
    }

    Ok(SweepOutcome { optimal, samples })
}
