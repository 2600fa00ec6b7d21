//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! the driver steps:
//! - the rocket with its thrust programs resolved,
//! - the planet list,
//! - the number of seconds to simulate
//!
//! Optional config fields resolve here, once, to the same defaults the
//! body constructors document; nothing downstream sees a missing value.

use crate::configuration::config::{PlanetConfig, RocketConfig, ScenarioConfig, ThrustCurveConfig};
use crate::simulation::errors::ConstructionError;
use crate::simulation::params::{
    DEFAULT_EXHAUST_VELOCITY, DEFAULT_FUEL_BURN_RATE, DEFAULT_MAX_TORQUE,
};
use crate::simulation::planet::Planet;
use crate::simulation::rocket::{Rocket, RocketParameters, ThrustCurve, ThrustKey, ThrustKeys};
use crate::simulation::states::{NVec2, TrajectoryData};

/// A fully-initialized runtime scenario: one powered rocket, the planets
/// pulling on it, and the run length.
#[derive(Debug)]
pub struct Scenario {
    pub steps: u32,
    pub rocket: Rocket,
    pub planets: Vec<Planet>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConstructionError> {
        let rocket = build_rocket(cfg.rocket)?;
        let planets = cfg.planets.into_iter().map(build_planet).collect();

        Ok(Self {
            steps: cfg.parameters.steps,
            rocket,
            planets,
        })
    }
}

fn build_rocket(cfg: RocketConfig) -> Result<Rocket, ConstructionError> {
    let mut start = TrajectoryData::new(cfg.mass);
    if let Some(x) = &cfg.position {
        start = start.with_position(NVec2::new(x[0], x[1]));
    }
    if let Some(v) = &cfg.velocity {
        start = start.with_velocity(NVec2::new(v[0], v[1]));
    }
    if let Some(angle) = cfg.angle {
        start = start.with_angle(angle);
    }

    let params = RocketParameters {
        exhaust_velocity: cfg.exhaust_velocity.unwrap_or(DEFAULT_EXHAUST_VELOCITY),
        fuel_burn_rate: cfg.fuel_burn_rate.unwrap_or(DEFAULT_FUEL_BURN_RATE),
        max_torque: cfg.max_torque.unwrap_or(DEFAULT_MAX_TORQUE),
    };

    let thrust = ThrustKeys {
        linear: build_curve(&cfg.linear_thrust)?,
        angular: build_curve(&cfg.angular_thrust)?,
    };

    Rocket::new(start, cfg.length, cfg.ship_mass, params, thrust)
}

fn build_planet(cfg: PlanetConfig) -> Planet {
    let mut start = TrajectoryData::new(cfg.mass);
    if let Some(x) = &cfg.position {
        start = start.with_position(NVec2::new(x[0], x[1]));
    }
    Planet::new(start, cfg.radius)
}

fn build_curve(cfg: &ThrustCurveConfig) -> Result<ThrustCurve, ConstructionError> {
    match cfg {
        ThrustCurveConfig::Levels(levels) => ThrustCurve::from_levels(levels),
        ThrustCurveConfig::Keys(keys) => ThrustCurve::from_keys(
            keys.iter()
                .map(|&(time, value)| ThrustKey { time, value })
                .collect(),
        ),
    }
}
