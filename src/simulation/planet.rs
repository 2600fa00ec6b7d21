//! Static planet body
//!
//! Planets only contribute gravity to the simulation; their own physics is
//! the inert default except for a solid-sphere moment of inertia.

use crate::simulation::body::{BodyFrame, TrajectoryBody};
use crate::simulation::dynamics::Dynamics;
use crate::simulation::states::TrajectoryData;

/// Physics model of a spherical planet.
#[derive(Debug, Clone)]
pub struct PlanetDynamics {
    pub radius: f64, // m
}

impl Dynamics for PlanetDynamics {
    fn inertia(&self, frame: &BodyFrame<'_>) -> f64 {
        // Solid sphere of uniform density about an axis through its center:
        // I = 2/5 * M * R^2
        0.4 * frame.current.mass * self.radius * self.radius
    }
}

pub type Planet = TrajectoryBody<PlanetDynamics>;

impl TrajectoryBody<PlanetDynamics> {
    /// Planet from its initial snapshot and radius. The body length is the
    /// sphere's diameter.
    pub fn new(start: TrajectoryData, radius: f64) -> Self {
        TrajectoryBody::with_dynamics(start, radius * 2.0, PlanetDynamics { radius })
    }

    pub fn radius(&self) -> f64 {
        self.dynamics.radius
    }
}
