//! Physics contributions supplied by each body kind
//!
//! The stepping engine is generic over [`Dynamics`]: it asks the body's
//! model for torque, inertia, net force, and the per-step mass update, and
//! does everything else itself. The default methods reproduce the inert
//! body: gravity-only force, zero torque, unit inertia, constant mass.
//! `Planet` and `Rocket` override what they specialize.

use crate::simulation::body::BodyFrame;
use crate::simulation::params::G;
use crate::simulation::planet::Planet;
use crate::simulation::states::{NVec2, TrajectoryData};

/// Specialization-supplied physics for one body kind.
///
/// All methods receive a [`BodyFrame`] view of the body's live snapshot,
/// length, and current simulation second.
pub trait Dynamics {
    /// Net force on the body this second, in N.
    fn forces(&self, frame: &BodyFrame<'_>, planets: &[Planet]) -> NVec2 {
        gravity(frame.current, planets)
    }

    /// Net torque on the body this second, in kg * m^2 / s^2 * rad.
    fn torque(&self, _frame: &BodyFrame<'_>) -> f64 {
        0.0
    }

    /// Moment of inertia, in kg * m^2.
    fn inertia(&self, _frame: &BodyFrame<'_>) -> f64 {
        1.0
    }

    /// Apply this second's mass change to the live snapshot.
    fn update_mass(&mut self, _current: &mut TrajectoryData, _second: u32) {}
}

/// Net gravitational pull on `current` from every planet in the list.
///
/// For each planet: f = G * (m1 * m2) / r^2, directed along the
/// displacement toward the planet. A planet coincident with the body makes
/// the displacement norm zero and the force non-finite; that singularity is
/// a documented property of the model and is not guarded here.
pub fn gravity(current: &TrajectoryData, planets: &[Planet]) -> NVec2 {
    let mut net_force = NVec2::zeros();

    for planet in planets {
        let displacement = planet.current().position - current.position;
        let sqr_distance = displacement.norm_squared();

        let scalar_force = G * current.mass * planet.current().mass / sqr_distance;

        let direction = displacement.normalize();
        net_force += direction * scalar_force;
    }

    net_force
}
