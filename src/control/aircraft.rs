use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{
    AIRCRAFT_DRAG_COEFFICIENT, AIRCRAFT_ISP, AIRCRAFT_LIFT_COEFFICIENT, AIRCRAFT_MASS,
    AIRCRAFT_NAME, AIRCRAFT_THRUST, AIRCRAFT_WING_AREA,
};
use crate::control::environment::Environment;
use crate::errors::SimulationError;
use crate::telemetry_system::telemetry::TelemetryRecord;
use crate::trajectory_system::aerodynamics::Aerodynamics;
use crate::trajectory_system::kinematics::Kinematics;
use crate::utils::vector3d::Vector3D;

// Below this speed the velocity carries no usable direction for thrust.
const THRUST_ALIGNMENT_THRESHOLD: f64 = 1e-3;

#[derive(Debug, Clone)]
pub struct AircraftParams {
    pub name: String,
    pub mass: f64,
    pub thrust: f64,
    pub drag_coeff: f64,
    pub lift_coeff: f64,
    pub wing_area: f64,
    pub isp: f64,
}

impl AircraftParams {
    /// Mass, wing area, and isp all appear as divisors; reject them early
    /// instead of letting a division blow up mid-run.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.mass <= 0.0 {
            return Err(SimulationError::ValidationError(format!(
                "mass must be positive, got {} kg",
                self.mass
            )));
        }
        if self.wing_area <= 0.0 {
            return Err(SimulationError::ValidationError(format!(
                "wing area must be positive, got {} m²",
                self.wing_area
            )));
        }
        if self.isp <= 0.0 {
            return Err(SimulationError::ValidationError(format!(
                "specific impulse must be positive, got {} s",
                self.isp
            )));
        }
        if self.thrust < 0.0 {
            return Err(SimulationError::ValidationError(format!(
                "rated thrust cannot be negative, got {} N",
                self.thrust
            )));
        }
        Ok(())
    }
}

impl Default for AircraftParams {
    fn default() -> Self {
        AircraftParams {
            name: AIRCRAFT_NAME.to_string(),
            mass: AIRCRAFT_MASS,
            thrust: AIRCRAFT_THRUST,
            drag_coeff: AIRCRAFT_DRAG_COEFFICIENT,
            lift_coeff: AIRCRAFT_LIFT_COEFFICIENT,
            wing_area: AIRCRAFT_WING_AREA,
            isp: AIRCRAFT_ISP,
        }
    }
}

/// Point-mass vehicle: fixed airframe parameters plus the kinematic and
/// propulsion state mutated by `advance`. Owns its random source so runs
/// are reproducible per instance.
pub struct Aircraft {
    pub name: String,
    pub mass: f64,
    pub rated_thrust: f64,
    pub isp: f64,
    pub aerodynamics: Aerodynamics,
    pub kinematics: Kinematics,
    pub fuel: f64,
    thrust: f64,
    rng: StdRng,
}

impl Aircraft {
    pub fn new(
        params: AircraftParams,
        position: Vector3D,
        velocity: Vector3D,
        fuel: f64,
    ) -> Result<Self, SimulationError> {
        Self::build(params, position, velocity, fuel, StdRng::from_entropy())
    }

    /// Same as `new` but with a fixed wind-sampling seed, for reproducible
    /// runs and independent sweep workers.
    pub fn with_seed(
        params: AircraftParams,
        position: Vector3D,
        velocity: Vector3D,
        fuel: f64,
        seed: u64,
    ) -> Result<Self, SimulationError> {
        Self::build(params, position, velocity, fuel, StdRng::seed_from_u64(seed))
    }

    fn build(
        params: AircraftParams,
        position: Vector3D,
        velocity: Vector3D,
        fuel: f64,
        rng: StdRng,
    ) -> Result<Self, SimulationError> {
        params.validate()?;
        if fuel < 0.0 {
            return Err(SimulationError::ValidationError(format!(
                "initial fuel cannot be negative, got {} kg",
                fuel
            )));
        }

        Ok(Aircraft {
            name: params.name,
            mass: params.mass,
            rated_thrust: params.thrust,
            isp: params.isp,
            aerodynamics: Aerodynamics::new(
                params.drag_coeff,
                params.wing_area,
                params.lift_coeff,
            ),
            kinematics: Kinematics::new(position, velocity),
            fuel,
            thrust: params.thrust,
            rng,
        })
    }

    /// Advance the vehicle by one time step and return the post-step
    /// telemetry snapshot. Never fails: epsilon guards keep every division
    /// defined, and implausible-but-finite states are the runner's problem.
    pub fn advance(&mut self, delta_time: f64, environment: &Environment) -> TelemetryRecord {
        self.consume_fuel(delta_time, environment.gravity);

        let wind = environment.wind.sample(&mut self.rng);
        let relative_velocity = self.kinematics.velocity - wind;

        let drag = self
            .aerodynamics
            .calculate_drag(relative_velocity, environment.air_density);
        let lift = self
            .aerodynamics
            .calculate_lift(relative_velocity, environment.air_density);
        let thrust_vector = self.thrust_vector();
        let gravity_vector = Vector3D::new(0.0, 0.0, -environment.gravity * self.mass);

        let total_force = thrust_vector + drag + lift + gravity_vector;
        let acceleration = total_force / self.mass;

        self.kinematics.integrate(acceleration, delta_time);

        TelemetryRecord {
            time: self.kinematics.time,
            position: self.kinematics.position,
            velocity: self.kinematics.velocity,
            acceleration,
            fuel: self.fuel,
        }
    }

    /// Burn-rate bookkeeping with cutoff on empty. The flow is computed from
    /// the current effective thrust, so a tank that empties mid-step zeroes
    /// the thrust for every later step but not for the step that drained it.
    fn consume_fuel(&mut self, delta_time: f64, gravity: f64) {
        if self.fuel <= 0.0 {
            self.fuel = 0.0;
            self.thrust = 0.0;
            return;
        }

        let fuel_flow = self.thrust / (self.isp * gravity);
        self.fuel -= fuel_flow * delta_time;
        if self.fuel <= 0.0 {
            self.fuel = 0.0;
            self.thrust = 0.0;
        }
    }

    /// Thrust acts along the flight direction when one exists, otherwise
    /// along +x (stationary start).
    fn thrust_vector(&self) -> Vector3D {
        let velocity = self.kinematics.velocity;
        if velocity.magnitude() > THRUST_ALIGNMENT_THRESHOLD {
            velocity.normalize() * self.thrust
        } else {
            Vector3D::new(self.thrust, 0.0, 0.0)
        }
    }

    pub fn get_time(&self) -> f64 {
        self.kinematics.time
    }

    pub fn get_altitude(&self) -> f64 {
        self.kinematics.get_altitude()
    }

    /// Current effective thrust, as opposed to the rated magnitude.
    pub fn get_thrust(&self) -> f64 {
        self.thrust
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel <= 0.0
    }
}
