use crate::optimization_system::standard::SweepSample;
use crate::optimization_system::strategy::OptimizationResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridResult {
    pub thrust_scale: f64,
    pub max_altitude: f64,
}

/// Blend the sweep optimum with a learned recommendation: average the two
/// thrust scales, keep the better of the two altitudes.
pub fn hybrid_optimization(
    standard_optimal: &SweepSample,
    learned: &OptimizationResult,
) -> HybridResult {
    HybridResult {
        thrust_scale: (standard_optimal.thrust_scale + learned.thrust_scale) / 2.0,
        max_altitude: standard_optimal.max_altitude.max(learned.max_altitude),
    }
}
