//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – run length
//! - [`RocketConfig`]     – the rocket's initial state, tuning, and thrust programs
//! - [`PlanetConfig`]     – one entry per planet contributing gravity
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   steps: 20                  # simulated seconds to run
//!
//! rocket:
//!   mass: 1000.0               # total starting mass, fuel included (kg)
//!   position: [ 0.0, 0.0 ]     # optional, defaults to the origin
//!   velocity: [ 0.0, 0.0 ]     # optional
//!   angle: 45.0                # optional heading in degrees
//!   length: 100.0              # body length (m)
//!   ship_mass: 400.0           # dry mass (kg); the rest is fuel
//!   exhaust_velocity: 100.0    # optional (m/s)
//!   fuel_burn_rate: 10.0       # optional (kg/s)
//!   max_torque: 200.0          # optional
//!   linear_thrust: [ 1.0, 1.0, 0.5 ]           # dense per-second fractions...
//!   angular_thrust: [ [0, 0.0], [3, 0.25] ]    # ...or sparse [second, fraction] keys
//!
//! planets:
//!   - mass: 100000000000.0
//!     position: [ 0.0, -1000.0 ]
//!     radius: 25.0
//! ```
//!
//! The scenario builder maps this configuration into the runtime bodies the
//! engine steps; optional fields resolve to the same defaults the body
//! constructors use.

use serde::Deserialize;

/// Run-length parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub steps: u32, // simulated seconds to advance the rocket
}

/// A thrust curve in either of its two accepted spellings: a dense list of
/// per-second fractions, or explicit `[second, fraction]` keyframes.
/// Anything else fails deserialization.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum ThrustCurveConfig {
    Levels(Vec<f64>),
    Keys(Vec<(u32, f64)>),
}

/// Configuration for the rocket's initial state and tuning.
#[derive(Deserialize, Debug)]
pub struct RocketConfig {
    pub mass: f64,                    // total starting mass in kg
    pub position: Option<Vec<f64>>,   // initial position, defaults to origin
    pub velocity: Option<Vec<f64>>,   // initial velocity, defaults to rest
    pub angle: Option<f64>,           // initial heading in degrees
    pub length: f64,                  // body length in m
    pub ship_mass: f64,               // dry mass in kg
    pub exhaust_velocity: Option<f64>,
    pub fuel_burn_rate: Option<f64>,
    pub max_torque: Option<f64>,
    pub linear_thrust: ThrustCurveConfig,
    pub angular_thrust: ThrustCurveConfig,
}

/// Configuration for a single planet's state.
#[derive(Deserialize, Debug)]
pub struct PlanetConfig {
    pub mass: f64,                  // kg
    pub position: Option<Vec<f64>>, // defaults to origin
    pub radius: f64,                // m
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // run length
    pub rocket: RocketConfig,         // the powered body being simulated
    pub planets: Vec<PlanetConfig>,   // gravity sources
}
