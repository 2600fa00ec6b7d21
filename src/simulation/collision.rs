//! Continuous line–circle collision test
//!
//! Checks whether the straight displacement a body covers during one
//! discrete step crosses a planet's surface, rather than only testing the
//! sampled endpoints. The test runs once per (body, planet) pair; looping
//! over a planet list and picking the earliest hit is the caller's job.

use crate::simulation::math::{epsilon_round, sign};
use crate::simulation::states::NVec2;

/// Where the displacement `velocity` starting at `rocket_position` first
/// crosses the circle of `planet_radius` around `planet_position`, if it
/// does so within this step.
///
/// The problem is framed relative to the rocket: the step is a line through
/// the origin with slope `v.y / v.x`, and the planet sits at `(h, k)`.
/// Substituting `y = slope * x` into the circle equation gives a quadratic
/// in x:
///
///   (slope^2 + 1) * x^2 + (-2h - 2*slope*k) * x + (h^2 + k^2 - r^2) = 0
///
/// A negative discriminant means the line misses the circle entirely. Of
/// the two roots, the one on the near side in the direction of travel is
/// taken; it counts as a hit only if it lies in the direction actually
/// traveled and within this step's displacement.
pub fn detect(
    rocket_position: NVec2,
    velocity: NVec2,
    planet_position: NVec2,
    planet_radius: f64,
) -> Option<NVec2> {
    let relative = planet_position - rocket_position; // (h, k)
    let slope = velocity.y / velocity.x;

    if slope.is_finite() {
        let a = slope * slope + 1.0;
        let b = -2.0 * relative.x - 2.0 * slope * relative.y;
        let c = relative.x * relative.x + relative.y * relative.y
            - planet_radius * planet_radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Near root: sqrt term signed against the travel direction
        let x = epsilon_round(
            (-b - sign(velocity.x) * discriminant.sqrt()) / (2.0 * a),
            6,
        );

        if sign(x) != sign(velocity.x) {
            return None; // intersection lies behind the travel direction
        }
        if x.abs() > velocity.x.abs() {
            return None; // intersection lies beyond this step
        }

        let y = slope * x;
        Some(rocket_position + NVec2::new(x, y))
    } else {
        // Vertical travel: the step line is the y-axis in the rocket frame,
        // which can only meet the circle if the planet is centered on it.
        if relative.x != 0.0 {
            return None;
        }

        let y = epsilon_round(-sign(velocity.y) * planet_radius + relative.y, 6);

        if sign(y) != sign(velocity.y) {
            return None;
        }
        if y.abs() > velocity.y.abs() {
            return None;
        }

        Some(rocket_position + NVec2::new(0.0, y))
    }
}
