//! Per-second stepping engine and trajectory history
//!
//! [`TrajectoryBody`] owns a live snapshot and an append-only history of
//! archived snapshots, and advances its state one second at a time. The
//! physics inputs (force, torque, inertia, mass update) come from the
//! body's [`Dynamics`] model; the update order inside [`advance`] is part
//! of the engine's contract and must not be rearranged.
//!
//! [`advance`]: TrajectoryBody::advance

use crate::simulation::dynamics::Dynamics;
use crate::simulation::errors::QueryError;
use crate::simulation::math::lerp_vec;
use crate::simulation::planet::Planet;
use crate::simulation::states::{NVec2, TrajectoryData};

/// Read-only view of a body handed to its [`Dynamics`] model.
#[derive(Debug, Clone, Copy)]
pub struct BodyFrame<'a> {
    pub current: &'a TrajectoryData,
    pub length: f64, // m
    pub second: u32,
}

/// Snapshot vector fields that support time interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LerpField {
    Position,
    Velocity,
    Acceleration,
}

/// Resolved history location for a query time: the two bracketing entries
/// and the interpolation parameter between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameIndex {
    pub pre: usize,
    pub post: usize,
    pub lerp: f64,
}

/// A simulated body: live state, archived trajectory, and a physics model.
#[derive(Debug, Clone)]
pub struct TrajectoryBody<D> {
    pub length: f64, // m
    pub simulation_second: u32,
    pub simulation_resolution: f64, // time units per stored step
    current: TrajectoryData,
    history: Vec<TrajectoryData>,
    pub dynamics: D,
}

impl<D: Dynamics> TrajectoryBody<D> {
    /// Build a body from its initial snapshot. The history opens with a
    /// clone of that snapshot, so `history.len() == simulation_second`
    /// holds from the start.
    pub fn with_dynamics(start: TrajectoryData, length: f64, dynamics: D) -> Self {
        let history = vec![start.clone()];
        Self {
            length,
            simulation_second: 1,
            simulation_resolution: 1.0,
            current: start,
            history,
            dynamics,
        }
    }

    /// The live snapshot.
    pub fn current(&self) -> &TrajectoryData {
        &self.current
    }

    /// All archived snapshots, one per simulated second, oldest first.
    pub fn history(&self) -> &[TrajectoryData] {
        &self.history
    }

    /// Advance the body by one second against the given planet list.
    ///
    /// The ordering below is load-bearing. Forces and acceleration read the
    /// mass as it was at the start of the step; `update_mass` then burns
    /// fuel in place, so the snapshot archived at the end of this step
    /// already carries the post-burn mass that step N+1 will compute with.
    pub fn advance(&mut self, planets: &[Planet]) {
        // Angular half: torque (converted to the engine's degree units),
        // inertia, then the new angular rate and heading.
        // Over a 1 second step the torque numerically equals the angular
        // momentum it imparts, so no extra dt factor appears here.
        let frame = BodyFrame {
            current: &self.current,
            length: self.length,
            second: self.simulation_second,
        };
        let torque = self.dynamics.torque(&frame).to_degrees(); // kg * deg * m^2 / s^2
        let inertia = self.dynamics.inertia(&frame); // kg * m^2
        let new_angular_velocity = self.current.angular_velocity + torque / inertia;
        let new_angle = self.current.angle + new_angular_velocity;

        self.current.torque = torque;
        self.current.angular_velocity = new_angular_velocity;
        self.current.angle = new_angle;

        // Linear half: the force model sees the heading written above and
        // the not-yet-updated mass.
        let frame = BodyFrame {
            current: &self.current,
            length: self.length,
            second: self.simulation_second,
        };
        let force = self.dynamics.forces(&frame, planets);
        let acceleration = force / self.current.mass;
        let new_velocity = self.current.velocity + acceleration;
        let new_position = self.current.position + new_velocity;

        self.dynamics
            .update_mass(&mut self.current, self.simulation_second);

        self.current.force = force;
        self.current.acceleration = acceleration;
        self.current.velocity = new_velocity;
        self.current.position = new_position;

        self.history.push(self.current.clone());
        self.simulation_second += 1;
    }

    /// Map a query time onto the two history entries bracketing it.
    ///
    /// Times past the end of the recorded history clamp to the last entry
    /// with `lerp = 1`; there is no extrapolation.
    pub fn resolve_index(&self, time: f64) -> Result<FrameIndex, QueryError> {
        if time < 0.0 {
            return Err(QueryError::NegativeTime(time));
        }
        let last = self.history.len() - 1;

        let accurate_index = time / self.simulation_resolution;
        let mut pre = accurate_index.floor() as usize;
        let mut post = accurate_index.ceil() as usize;
        let mut lerp = accurate_index - accurate_index.floor();

        if pre > last || post > last {
            pre = last;
            post = last;
            lerp = 1.0;
        }

        Ok(FrameIndex { pre, post, lerp })
    }

    /// Interpolated value of a snapshot vector field at an arbitrary time.
    pub fn lerp_vector_at(&self, time: f64, field: LerpField) -> Result<NVec2, QueryError> {
        let index = self.resolve_index(time)?;

        let (pre, post) = match field {
            LerpField::Position => (
                self.history[index.pre].position,
                self.history[index.post].position,
            ),
            LerpField::Velocity => (
                self.history[index.pre].velocity,
                self.history[index.post].velocity,
            ),
            LerpField::Acceleration => (
                self.history[index.pre].acceleration,
                self.history[index.post].acceleration,
            ),
        };

        Ok(lerp_vec(&pre, &post, index.lerp))
    }
}
