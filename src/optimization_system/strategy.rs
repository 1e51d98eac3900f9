/// Outcome of an optimization pass: the thrust scaling it recommends and the
/// peak altitude it claims for that setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationResult {
    pub thrust_scale: f64,
    pub max_altitude: f64,
}

/// One point of a training-progress curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearningPoint {
    pub episode: u32,
    pub max_altitude: f64,
}

/// A learned (or pretend-learned) tuning strategy. The simulation core never
/// depends on this; swapping in a real agent only means implementing the
/// trait.
pub trait OptimizerStrategy {
    fn name(&self) -> &'static str;

    fn optimize(&self) -> OptimizationResult;

    /// Training progress for reporting. Strategies without a training phase
    /// may return an empty curve.
    fn learning_curve(&self) -> Vec<LearningPoint>;
}

const DUMMY_THRUST_SCALE: f64 = 1.05;
const DUMMY_MAX_ALTITUDE: f64 = 12_000.0; // m
const DUMMY_EPISODES: u32 = 500;
const DUMMY_EPISODE_STRIDE: u32 = 10;

/// Stand-in for a trained agent. Returns a fixed recommendation and a canned
/// saturating curve; it performs no learning and runs no simulations.
pub struct DummyOptimizer;

impl OptimizerStrategy for DummyOptimizer {
    fn name(&self) -> &'static str {
        "AI-Enhanced"
    }

    fn optimize(&self) -> OptimizationResult {
        OptimizationResult {
            thrust_scale: DUMMY_THRUST_SCALE,
            max_altitude: DUMMY_MAX_ALTITUDE,
        }
    }

    fn learning_curve(&self) -> Vec<LearningPoint> {
        (0..DUMMY_EPISODES)
            .step_by(DUMMY_EPISODE_STRIDE as usize)
            .map(|episode| LearningPoint {
                episode,
                max_altitude: 10_000.0 + 2_000.0 * (f64::from(episode) / 500.0).tanh(),
            })
            .collect()
    }
}
