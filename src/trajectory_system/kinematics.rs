use crate::utils::vector3d::Vector3D;

/// Translational state of the vehicle. Advanced with explicit Euler steps;
/// the position update uses the already-updated velocity.
#[derive(Debug, Clone)]
pub struct Kinematics {
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub acceleration: Vector3D,
    pub time: f64,
}

impl Kinematics {
    pub fn new(position: Vector3D, velocity: Vector3D) -> Self {
        Kinematics {
            position,
            velocity,
            acceleration: Vector3D::zero(),
            time: 0.0,
        }
    }

    /// One explicit Euler step. Large time steps relative to the dynamics
    /// are not detected here; the telemetry validation pass reports the
    /// resulting non-finite or runaway values after the fact.
    pub fn integrate(&mut self, acceleration: Vector3D, delta_time: f64) {
        self.velocity = self.velocity + acceleration * delta_time;
        self.position = self.position + self.velocity * delta_time;
        self.acceleration = acceleration;
        self.time += delta_time;
    }

    pub fn get_altitude(&self) -> f64 {
        self.position.z
    }

    pub fn get_time(&self) -> f64 {
        self.time
    }

    pub fn get_velocity_magnitude(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn get_acceleration_magnitude(&self) -> f64 {
        self.acceleration.magnitude()
    }
}
