//! Error types for body construction and history queries
//!
//! Both kinds are fail-fast and synchronous: they surface immediately at the
//! call that produced them and carry no retry semantics. Numeric edge cases
//! (zero fuel, out-of-range interpolation times) are handled by policy in
//! the engine and are deliberately not errors.

use std::error::Error;
use std::fmt;

/// A body could not be constructed from the given inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// The rocket's ship mass exceeds its total starting mass, which would
    /// leave a negative fuel load.
    NegativeFuelMass { total_mass: f64, ship_mass: f64 },
    /// A thrust curve with no keys cannot be sampled.
    EmptyThrustCurve,
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeFuelMass {
                total_mass,
                ship_mass,
            } => write!(
                f,
                "negative fuel mass: ship mass {ship_mass} kg exceeds total mass {total_mass} kg"
            ),
            Self::EmptyThrustCurve => write!(f, "thrust curve holds no keys"),
        }
    }
}

impl Error for ConstructionError {}

/// A trajectory-history query was given an invalid input.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// History starts at time 0; negative query times are rejected.
    NegativeTime(f64),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeTime(time) => write!(f, "negative time {time} passed to history query"),
        }
    }
}

impl Error for QueryError {}
