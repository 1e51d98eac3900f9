use crate::constants::{
    INITIAL_FUEL_MASS, INITIAL_SPEED_X, LOW_FUEL_ALTITUDE_LIMIT, MAX_SIMULATION_TIME, TIME_STEP,
};
use crate::control::aircraft::Aircraft;
use crate::control::environment::Environment;
use crate::errors::SimulationError;
use crate::telemetry_system::telemetry::Telemetry;
use crate::utils::vector3d::Vector3D;

/// Run-level settings: stepping, horizon, and the vehicle's initial state.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub time_step: f64,
    pub max_time: f64,
    pub initial_position: Vector3D,
    pub initial_velocity: Vector3D,
    pub initial_fuel: f64,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.time_step <= 0.0 || !self.time_step.is_finite() {
            return Err(SimulationError::ConfigurationError(format!(
                "time step must be positive, got {} s",
                self.time_step
            )));
        }
        if self.max_time <= 0.0 || !self.max_time.is_finite() {
            return Err(SimulationError::ConfigurationError(format!(
                "max time must be positive, got {} s",
                self.max_time
            )));
        }
        if self.initial_fuel < 0.0 {
            return Err(SimulationError::ValidationError(format!(
                "initial fuel cannot be negative, got {} kg",
                self.initial_fuel
            )));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_step: TIME_STEP,
            max_time: MAX_SIMULATION_TIME,
            initial_position: Vector3D::zero(),
            initial_velocity: Vector3D::new(INITIAL_SPEED_X, 0.0, 0.0),
            initial_fuel: INITIAL_FUEL_MASS,
        }
    }
}

/// Why a run ended. Checked in this order after each recorded step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopCondition {
    /// Altitude dropped below zero.
    Crash,
    /// Tank empty while below the low-altitude limit.
    LowFuelDescent,
    /// Elapsed time reached the horizon.
    HorizonReached,
}

/// Drives one aircraft from its initial state until a stop condition fires
/// or the horizon is reached, collecting one telemetry record per step.
pub struct FlightSimulator {
    aircraft: Aircraft,
    time_step: f64,
    max_time: f64,
    environment: Environment,
    stop_condition: Option<StopCondition>,
}

impl FlightSimulator {
    pub fn new(
        aircraft: Aircraft,
        time_step: f64,
        max_time: f64,
        environment: Environment,
    ) -> Result<Self, SimulationError> {
        if time_step <= 0.0 || !time_step.is_finite() {
            return Err(SimulationError::ConfigurationError(format!(
                "time step must be positive, got {} s",
                time_step
            )));
        }
        if max_time <= 0.0 || !max_time.is_finite() {
            return Err(SimulationError::ConfigurationError(format!(
                "max time must be positive, got {} s",
                max_time
            )));
        }

        Ok(FlightSimulator {
            aircraft,
            time_step,
            max_time,
            environment,
            stop_condition: None,
        })
    }

    /// Step the vehicle until a terminal condition. The record that triggers
    /// a stop is kept: the crash or low-fuel sample is part of the output.
    /// The simulator is terminal once stopped; calling `run` again yields an
    /// empty sequence.
    pub fn run(&mut self) -> Telemetry {
        let mut telemetry = Telemetry::new();

        while self.stop_condition.is_none() && self.aircraft.get_time() < self.max_time {
            let record = self.aircraft.advance(self.time_step, &self.environment);
            let altitude = record.position.z;
            let fuel = record.fuel;
            telemetry.push(record);

            if altitude < 0.0 {
                self.stop_condition = Some(StopCondition::Crash);
            } else if fuel <= 0.0 && altitude < LOW_FUEL_ALTITUDE_LIMIT {
                self.stop_condition = Some(StopCondition::LowFuelDescent);
            }
        }

        if self.stop_condition.is_none() {
            self.stop_condition = Some(StopCondition::HorizonReached);
        }

        telemetry
    }

    pub fn stop_condition(&self) -> Option<StopCondition> {
        self.stop_condition
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }
}
