pub mod constants;
pub mod control;
pub mod errors;
pub mod optimization_system;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::aircraft::{Aircraft, AircraftParams};
pub use control::environment::{Environment, Wind};
pub use control::simulator::{FlightSimulator, SimulationConfig, StopCondition};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::aerodynamics::Aerodynamics;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{Telemetry, TelemetryRecord};

// Re-export commonly used items from optimization_system
pub use optimization_system::standard::{
    standard_optimization, SweepOutcome, SweepSample, SweepSettings,
};
pub use optimization_system::strategy::{DummyOptimizer, OptimizerStrategy};

// Re-export commonly used utilities
pub use utils::vector3d::Vector3D;
