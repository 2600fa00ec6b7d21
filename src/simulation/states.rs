//! Core state types for the trajectory simulation.
//!
//! Defines the snapshot struct shared by every simulated body:
//! - `TrajectoryData` holds one second's full kinematic/dynamic state
//! - `NVec2` is the 2d vector type used throughout the engine
//!
//! A body archives one clone of its snapshot per simulated second; clones
//! are fully independent values, never aliases of the live state.

use std::fmt;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// One instant's complete state of a simulated body.
///
/// Linear quantities are 2d vectors; the angular quantities are scalars in
/// degrees (`angle`), degrees per second (`angular_velocity`), and
/// kg * deg * m^2 / s^2 (`torque`).
#[derive(Debug, Clone)]
pub struct TrajectoryData {
    pub mass: f64, // kg
    pub position: NVec2, // m
    pub velocity: NVec2, // m/s
    pub acceleration: NVec2, // m/s^2
    pub force: NVec2, // N
    pub angle: f64, // deg
    pub angular_velocity: f64, // deg/s
    pub torque: f64, // kg * deg * m^2 / s^2
}

impl TrajectoryData {
    /// New snapshot with the given mass and every other field zeroed.
    pub fn new(mass: f64) -> Self {
        Self {
            mass,
            position: NVec2::zeros(),
            velocity: NVec2::zeros(),
            acceleration: NVec2::zeros(),
            force: NVec2::zeros(),
            angle: 0.0,
            angular_velocity: 0.0,
            torque: 0.0,
        }
    }

    pub fn with_position(self, position: NVec2) -> Self {
        Self { position, ..self }
    }

    pub fn with_velocity(self, velocity: NVec2) -> Self {
        Self { velocity, ..self }
    }

    pub fn with_acceleration(self, acceleration: NVec2) -> Self {
        Self { acceleration, ..self }
    }

    pub fn with_force(self, force: NVec2) -> Self {
        Self { force, ..self }
    }

    pub fn with_angle(self, angle: f64) -> Self {
        Self { angle, ..self }
    }

    pub fn with_angular_velocity(self, angular_velocity: f64) -> Self {
        Self { angular_velocity, ..self }
    }

    pub fn with_torque(self, torque: f64) -> Self {
        Self { torque, ..self }
    }
}

/// Console rendering of a snapshot. Field order and unit labels are part of
/// the output contract and must stay stable.
impl fmt::Display for TrajectoryData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mass: {}", self.mass)?;
        writeln!(f, "Force:        [{}, {}]", self.force.x, self.force.y)?;
        writeln!(
            f,
            "Acceleration: [{}, {}]",
            self.acceleration.x, self.acceleration.y
        )?;
        writeln!(f, "Velocity:     [{}, {}]", self.velocity.x, self.velocity.y)?;
        writeln!(f, "Position:     [{}, {}]", self.position.x, self.position.y)?;
        writeln!(f, "Angle: {} deg", self.angle)?;
        writeln!(f, "Angular Velocity: {} deg/sec", self.angular_velocity)?;
        write!(f, "Torque: {} kg * deg * m^2 / s^2", self.torque)
    }
}
