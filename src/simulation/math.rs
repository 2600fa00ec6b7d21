//! Scalar and vector math helpers used across the engine
//!
//! Everything here is a pure function over `f64`/`NVec2`:
//! - `sign`, `lerp`, `lerp_vec` interpolation primitives,
//! - `epsilon_round` for suppressing float noise before sign/equality checks,
//! - `angle_deg` / `dir_from_angle` for the degree-based heading convention

use super::states::NVec2;

/// Sign of `value`: 1 for positive, -1 for negative, 0 for zero.
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Linear interpolation between `a` and `b` at parameter `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Component-wise linear interpolation between two vectors.
pub fn lerp_vec(a: &NVec2, b: &NVec2, t: f64) -> NVec2 {
    NVec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Round `value` to `decimal_places` decimals with a machine-epsilon bias,
/// so values sitting a hair under a rounding boundary land on it.
/// An exact `-0` result is normalized to `0`.
pub fn epsilon_round(value: f64, decimal_places: u32) -> f64 {
    let scale = 10f64.powi(decimal_places as i32);
    let rounded = ((value + f64::EPSILON) * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Direction of `v` in degrees.
///
/// `atan(y/x)` only covers (-90, 90); the offset shifts the base into the
/// quadrant the component signs select. The zero vector maps to 0.
pub fn angle_deg(v: &NVec2) -> f64 {
    let base = (v.y / v.x).atan().to_degrees();

    let offset = if v.x > 0.0 && v.y > 0.0 {
        0.0
    } else if v.x > 0.0 {
        360.0
    } else if v.x != 0.0 && v.y > 0.0 {
        180.0
    } else if v.x < 0.0 && v.y < 0.0 {
        180.0
    } else {
        0.0
    };

    let total = offset + base;

    // 0/0 above is NaN, which happens only for vectors on the y-axis with
    // no x extent at all
    if total.is_nan() {
        if v.y == 0.0 {
            0.0
        } else if v.y > 0.0 {
            90.0
        } else {
            180.0
        }
    } else {
        total
    }
}

/// Unit vector pointing along a heading given in degrees.
pub fn dir_from_angle(degrees: f64) -> NVec2 {
    let radians = degrees.to_radians();
    NVec2::new(radians.cos(), radians.sin())
}
