pub mod states;
pub mod params;
pub mod math;
pub mod errors;
pub mod dynamics;
pub mod body;
pub mod planet;
pub mod rocket;
pub mod collision;
pub mod scenario;
