//! Powered rocket body
//!
//! The rocket's physics is driven by two keyframed thrust curves sampled
//! once per simulated second:
//! - the linear curve scales engine thrust along the current heading,
//! - the angular curve scales the torque the attitude system applies.
//!
//! Both also feed the fuel model: burning fuel lowers the snapshot mass
//! until the tank hits zero, after which the rocket coasts.

use crate::simulation::body::{BodyFrame, TrajectoryBody};
use crate::simulation::dynamics::{gravity, Dynamics};
use crate::simulation::errors::ConstructionError;
use crate::simulation::math::dir_from_angle;
use crate::simulation::params::{
    DEFAULT_EXHAUST_VELOCITY, DEFAULT_FUEL_BURN_RATE, DEFAULT_MAX_TORQUE,
};
use crate::simulation::planet::Planet;
use crate::simulation::states::{NVec2, TrajectoryData};

/// One keyframe of a thrust curve: the 0-based second it takes effect and
/// the thrust fraction held from then on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustKey {
    pub time: u32,
    pub value: f64,
}

/// Ordered, non-empty sequence of thrust keyframes sampled with zero-order
/// hold: a key's value applies from its time until the next key's time.
///
/// Values are thrust fractions; the curve does not clamp them to [0, 1],
/// that is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct ThrustCurve {
    keys: Vec<ThrustKey>,
}

impl ThrustCurve {
    /// Curve from explicit keyframes. Key times must be non-decreasing.
    pub fn from_keys(keys: Vec<ThrustKey>) -> Result<Self, ConstructionError> {
        if keys.is_empty() {
            return Err(ConstructionError::EmptyThrustCurve);
        }
        Ok(Self { keys })
    }

    /// Curve from a dense per-second value list; the key time is the
    /// 0-based index of each value.
    pub fn from_levels(levels: &[f64]) -> Result<Self, ConstructionError> {
        Self::from_keys(
            levels
                .iter()
                .enumerate()
                .map(|(index, &value)| ThrustKey {
                    time: index as u32,
                    value,
                })
                .collect(),
        )
    }

    /// Flat curve holding `value` for `seconds` seconds. A curve must hold
    /// at least one key, so `seconds` is treated as at least 1.
    pub fn constant(seconds: u32, value: f64) -> Self {
        let seconds = seconds.max(1);
        Self {
            keys: (0..seconds).map(|time| ThrustKey { time, value }).collect(),
        }
    }

    /// Sample the curve at a simulation second (seconds start at 1, key
    /// times at 0). Holds the last key whose time has been reached; before
    /// the first key, the first key's value applies.
    ///
    /// Curves are short, so this is a forward scan rather than a binary
    /// search.
    pub fn value_at(&self, second: u32) -> f64 {
        let query = second.saturating_sub(1);

        let mut held = self.keys[0].value;
        for key in &self.keys {
            if key.time <= query {
                held = key.value;
            } else {
                break;
            }
        }
        held
    }

    pub fn keys(&self) -> &[ThrustKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Rocket tuning parameters, each with a stated default.
#[derive(Debug, Clone)]
pub struct RocketParameters {
    pub exhaust_velocity: f64, // m/s
    pub fuel_burn_rate: f64,   // kg/s
    pub max_torque: f64,       // kg * m^2 / s^2 * rad
}

impl Default for RocketParameters {
    fn default() -> Self {
        Self {
            exhaust_velocity: DEFAULT_EXHAUST_VELOCITY,
            fuel_burn_rate: DEFAULT_FUEL_BURN_RATE,
            max_torque: DEFAULT_MAX_TORQUE,
        }
    }
}

/// The rocket's two thrust programs.
#[derive(Debug, Clone)]
pub struct ThrustKeys {
    pub linear: ThrustCurve,
    pub angular: ThrustCurve,
}

/// Physics model of a powered rocket.
#[derive(Debug, Clone)]
pub struct RocketDynamics {
    pub ship_mass: f64, // dry mass in kg
    fuel_mass: f64,     // kg, non-negative
    pub exhaust_velocity: f64,
    pub fuel_burn_rate: f64,
    pub max_torque: f64,
    linear_thrust: ThrustCurve,
    angular_thrust: ThrustCurve,
}

impl RocketDynamics {
    pub fn fuel_mass(&self) -> f64 {
        self.fuel_mass
    }

    pub fn linear_thrust(&self) -> &ThrustCurve {
        &self.linear_thrust
    }

    pub fn angular_thrust(&self) -> &ThrustCurve {
        &self.angular_thrust
    }

    /// Engine thrust along the current heading. An empty tank produces no
    /// thrust at all.
    fn thrust(&self, frame: &BodyFrame<'_>) -> NVec2 {
        if self.fuel_mass == 0.0 {
            return NVec2::zeros();
        }
        let direction = dir_from_angle(frame.current.angle);
        let fraction = self.linear_thrust.value_at(frame.second);

        // F = v_e * (dm/dt), scaled by the commanded thrust fraction
        let force = self.exhaust_velocity * self.fuel_burn_rate * fraction;

        direction * force
    }
}

impl Dynamics for RocketDynamics {
    fn forces(&self, frame: &BodyFrame<'_>, planets: &[Planet]) -> NVec2 {
        gravity(frame.current, planets) + self.thrust(frame)
    }

    fn torque(&self, frame: &BodyFrame<'_>) -> f64 {
        let fraction = self.angular_thrust.value_at(frame.second);
        let force = self.max_torque * fraction;

        // Lever-arm torque about the rocket's center: the attitude force
        // acts at half the body length, at full perpendicular extension.
        force * (std::f64::consts::FRAC_PI_2).sin() * frame.length / 2.0
    }

    fn inertia(&self, frame: &BodyFrame<'_>) -> f64 {
        // Thin uniform rod about its center: I = 1/12 * M * L^2
        frame.current.mass * frame.length * frame.length / 12.0
    }

    fn update_mass(&mut self, current: &mut TrajectoryData, second: u32) {
        if self.fuel_mass == 0.0 {
            return;
        }

        let linear = self.linear_thrust.value_at(second);
        let angular = self.angular_thrust.value_at(second);

        // Attitude burns draw a tenth of the linear rate at full command
        let fuel_loss = self.fuel_burn_rate * (linear + angular * 0.1);

        self.fuel_mass -= fuel_loss;
        if self.fuel_mass < 0.0 {
            self.fuel_mass = 0.0;
        }
        current.mass = self.fuel_mass + self.ship_mass;
    }
}

pub type Rocket = TrajectoryBody<RocketDynamics>;

impl TrajectoryBody<RocketDynamics> {
    /// Rocket from its initial snapshot, body length, dry ship mass, tuning
    /// parameters, and thrust programs.
    ///
    /// The fuel load is whatever the starting mass leaves after the ship
    /// itself; a ship heavier than the whole rocket is rejected.
    pub fn new(
        start: TrajectoryData,
        length: f64,
        ship_mass: f64,
        params: RocketParameters,
        thrust: ThrustKeys,
    ) -> Result<Self, ConstructionError> {
        let fuel_mass = start.mass - ship_mass;
        if fuel_mass < 0.0 {
            return Err(ConstructionError::NegativeFuelMass {
                total_mass: start.mass,
                ship_mass,
            });
        }

        let dynamics = RocketDynamics {
            ship_mass,
            fuel_mass,
            exhaust_velocity: params.exhaust_velocity,
            fuel_burn_rate: params.fuel_burn_rate,
            max_torque: params.max_torque,
            linear_thrust: thrust.linear,
            angular_thrust: thrust.angular,
        };

        Ok(TrajectoryBody::with_dynamics(start, length, dynamics))
    }

    /// Fuel currently on board, in kg.
    pub fn fuel_mass(&self) -> f64 {
        self.dynamics.fuel_mass()
    }
}
