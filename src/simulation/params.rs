//! Physical constants and rocket tuning defaults
//!
//! Central place for the numbers the engine and the rocket model fall back
//! to when a scenario does not override them:
//! - gravitational constant `G`,
//! - default exhaust velocity, fuel burn rate, and maximum torque

/// Gravitational constant in N * m^2 / kg^2.
pub const G: f64 = 0.0000000000667408;

/// Exhaust velocity of the rocket's gases in m/s.
pub const DEFAULT_EXHAUST_VELOCITY: f64 = 100.0;

/// Fuel burn rate in kg/s.
pub const DEFAULT_FUEL_BURN_RATE: f64 = 10.0;

/// Maximum torque the rocket can apply, in kg * m^2 / s^2 * rad.
pub const DEFAULT_MAX_TORQUE: f64 = 200.0;
