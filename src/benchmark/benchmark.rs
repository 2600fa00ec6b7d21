//! Wall-clock benchmarks for the stepping engine
//!
//! Times the per-second advance loop at several run lengths. History grows
//! by one archived snapshot per step, so long runs also exercise the
//! append path, not just the physics.

use std::time::Instant;

use crate::simulation::planet::Planet;
use crate::simulation::rocket::{Rocket, RocketParameters, ThrustCurve, ThrustKeys};
use crate::simulation::states::{NVec2, TrajectoryData};

pub fn bench_advance() {
    // Different run lengths to test
    let step_counts = [1_000, 10_000, 100_000];

    for steps in step_counts {
        let mut rocket = bench_rocket();
        let planets = vec![bench_planet()];

        // Warm up
        rocket.advance(&planets);

        let t0 = Instant::now();
        for _ in 0..steps {
            rocket.advance(&planets);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "steps = {steps:7}, elapsed = {elapsed:9.6} s, rate = {:10.0} steps/s",
            steps as f64 / elapsed
        );
    }
}

/// Rocket under light constant thrust; the fuel runs out a few hundred
/// steps in, so both the burning and coasting paths get timed.
fn bench_rocket() -> Rocket {
    let start = TrajectoryData::new(1000.0).with_angle(45.0);
    let thrust = ThrustKeys {
        linear: ThrustCurve::constant(1, 0.1),
        angular: ThrustCurve::constant(1, 0.05),
    };
    Rocket::new(start, 100.0, 400.0, RocketParameters::default(), thrust)
        .expect("benchmark rocket parameters are valid")
}

/// Massive planet far enough away that the rocket never reaches it within
/// the longest benchmark run.
fn bench_planet() -> Planet {
    let start = TrajectoryData::new(1.0e11).with_position(NVec2::new(0.0, -1.0e9));
    Planet::new(start, 25.0)
}
