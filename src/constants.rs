// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³

// Aircraft Constants (Aero3D-X reference airframe)
pub const AIRCRAFT_NAME: &str = "Aero3D-X";
pub const AIRCRAFT_MASS: f64 = 15_000.0; // kg (dry)
pub const AIRCRAFT_THRUST: f64 = 1.5e6; // N (rated)
pub const AIRCRAFT_DRAG_COEFFICIENT: f64 = 0.35;
pub const AIRCRAFT_LIFT_COEFFICIENT: f64 = 0.8;
pub const AIRCRAFT_WING_AREA: f64 = 60.0; // m²
pub const AIRCRAFT_ISP: f64 = 320.0; // s
pub const INITIAL_FUEL_MASS: f64 = 5_000.0; // kg

// Simulation Parameters
pub const TIME_STEP: f64 = 0.05; // s
pub const MAX_SIMULATION_TIME: f64 = 1_200.0; // s
pub const INITIAL_SPEED_X: f64 = 150.0; // m/s (level flight entry)

// Wind Parameters (harsh gust scenario)
pub const WIND_SPEED: f64 = 30.0; // m/s
pub const WIND_VARIATION: f64 = 0.3; // fraction of nominal speed

// Termination Thresholds
pub const LOW_FUEL_ALTITUDE_LIMIT: f64 = 100.0; // m

// Thrust Sweep Parameters
pub const THRUST_SCALE_MIN: f64 = 0.8;
pub const THRUST_SCALE_MAX: f64 = 1.2;
pub const THRUST_SCALE_STEPS: usize = 10;
