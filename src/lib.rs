pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{NVec2, TrajectoryData};
pub use simulation::body::{BodyFrame, FrameIndex, LerpField, TrajectoryBody};
pub use simulation::dynamics::{gravity, Dynamics};
pub use simulation::planet::{Planet, PlanetDynamics};
pub use simulation::rocket::{
    Rocket, RocketDynamics, RocketParameters, ThrustCurve, ThrustKey, ThrustKeys,
};
pub use simulation::collision::detect;
pub use simulation::errors::{ConstructionError, QueryError};
pub use simulation::scenario::Scenario;
pub use simulation::params::G;

pub use configuration::config::{
    ParametersConfig, PlanetConfig, RocketConfig, ScenarioConfig, ThrustCurveConfig,
};

pub use benchmark::benchmark::bench_advance;
