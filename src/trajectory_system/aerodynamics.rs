use crate::utils::vector3d::Vector3D;

// Guard added to the drag denominator so the direction stays defined and
// bounded through v_rel = 0.
const DRAG_EPSILON: f64 = 1e-6;
// Below this relative speed no direction can be extracted reliably.
const DIRECTION_THRESHOLD: f64 = 1e-3;

const UP_AXIS: Vector3D = Vector3D::new(0.0, 0.0, 1.0);
const FALLBACK_AXIS: Vector3D = Vector3D::new(0.0, 1.0, 0.0);

#[derive(Debug, Clone)]
pub struct Aerodynamics {
    pub drag_coefficient: f64,
    pub wing_area: f64,
    pub lift_coefficient: f64,
}

impl Aerodynamics {
    pub fn new(drag_coefficient: f64, wing_area: f64, lift_coefficient: f64) -> Self {
        Aerodynamics {
            drag_coefficient,
            wing_area,
            lift_coefficient,
        }
    }

    /// Drag opposes the relative airflow: 0.5 ρ v² Cd A along
    /// -relative_velocity / (v_rel + ε).
    pub fn calculate_drag(&self, relative_velocity: Vector3D, air_density: f64) -> Vector3D {
        let v_rel = relative_velocity.magnitude();
        let drag_magnitude =
            self.dynamic_pressure(v_rel, air_density) * self.drag_coefficient * self.wing_area;

        -(relative_velocity / (v_rel + DRAG_EPSILON)) * drag_magnitude
    }

    /// Lift acts along a perpendicular to the relative airflow obtained from
    /// a double cross product against a fixed up axis. This is not an
    /// angle-of-attack lift vector; trajectory outputs depend on keeping
    /// this exact construction.
    pub fn calculate_lift(&self, relative_velocity: Vector3D, air_density: f64) -> Vector3D {
        let v_rel = relative_velocity.magnitude();
        let lift_magnitude =
            self.dynamic_pressure(v_rel, air_density) * self.lift_coefficient * self.wing_area;

        Self::lift_direction(relative_velocity) * lift_magnitude
    }

    fn lift_direction(relative_velocity: Vector3D) -> Vector3D {
        if relative_velocity.magnitude() > DIRECTION_THRESHOLD {
            let mut perp = relative_velocity.cross(&UP_AXIS);
            if perp.magnitude() < DIRECTION_THRESHOLD {
                // Airflow parallel to the up axis, cross with it degenerates
                perp = relative_velocity.cross(&FALLBACK_AXIS);
            }
            let lift_direction = perp.cross(&relative_velocity);
            lift_direction / lift_direction.magnitude()
        } else {
            UP_AXIS
        }
    }

    fn dynamic_pressure(&self, relative_speed: f64, air_density: f64) -> f64 {
        0.5 * air_density * relative_speed.powi(2)
    }
}
