//! Snapping values to fixed increments
//!
//! Positions snap to the grid spacing, angles to the snap angle. Both use
//! [`round_to`], which rounds half-way cases away from zero.

use glam::Vec3;

/// Round `value` to the nearest multiple of `divisor`.
///
/// Ties round away from zero, so `round_to(2.5, 5.0)` is `5.0` and
/// `round_to(-2.5, 5.0)` is `-5.0`. A result of negative zero is returned
/// as positive zero.
pub fn round_to(value: f32, divisor: f32) -> f32 {
    // Adding 0.0 turns -0.0 into +0.0
    (value / divisor).round() * divisor + 0.0
}

/// Snap every coordinate of `point` to the nearest multiple of `spacing`.
pub fn snap_point(point: Vec3, spacing: f32) -> Vec3 {
    Vec3::new(
        round_to(point.x, spacing),
        round_to(point.y, spacing),
        round_to(point.z, spacing),
    )
}
