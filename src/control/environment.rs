use rand::Rng;

use crate::constants::{AIR_DENSITY_SEA_LEVEL, GRAVITY, WIND_SPEED, WIND_VARIATION};
use crate::utils::vector3d::Vector3D;

/// Wind field with a nominal speed and a per-sample gust fraction.
/// The direction is used exactly as supplied and is never re-normalized.
#[derive(Debug, Clone)]
pub struct Wind {
    pub direction: Vector3D,
    pub speed: f64,
    pub variation: f64,
}

impl Wind {
    pub fn new(direction: Vector3D, speed: f64, variation: f64) -> Self {
        Wind {
            direction,
            speed,
            variation,
        }
    }

    pub fn calm() -> Self {
        Wind::new(Vector3D::new(1.0, 0.0, 0.0), 0.0, 0.0)
    }

    /// Draw a fresh wind vector. Gusts are uncorrelated between calls:
    /// speed = nominal × (1 + U), U ~ Uniform[-variation, +variation].
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vector3D {
        let gust = 1.0 + rng.gen_range(-self.variation..=self.variation);
        self.direction * (self.speed * gust)
    }
}

/// Atmospheric conditions seen by the aircraft. A single constant-density
/// layer; only the wind term carries any variability.
#[derive(Debug, Clone)]
pub struct Environment {
    pub gravity: f64,
    pub air_density: f64,
    pub wind: Wind,
}

impl Environment {
    pub fn new(gravity: f64, air_density: f64, wind: Wind) -> Self {
        Environment {
            gravity,
            air_density,
            wind,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(
            GRAVITY,
            AIR_DENSITY_SEA_LEVEL,
            Wind::new(Vector3D::new(1.0, 0.0, 0.0), WIND_SPEED, WIND_VARIATION),
        )
    }
}
