//! Yaw angle helpers
//!
//! All angles are radians about the world up axis.

use std::f32::consts::{PI, TAU};

/// Wrap an angle into [-π, π].
pub fn wrap_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can land exactly on TAU through rounding
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Signed shortest-arc difference `to - from`, in [-π, π].
pub fn shortest_arc(from: f32, to: f32) -> f32 {
    wrap_angle(to - from)
}

/// Rotate `current` toward `target` along the shortest arc by at most `max_step`.
///
/// Never overshoots: if the remaining arc is smaller than `max_step` the result
/// is exactly `target` (wrapped).
pub fn rotate_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let delta = shortest_arc(current, target);
    let max_step = max_step.max(0.0);
    if delta.abs() <= max_step {
        wrap_angle(target)
    } else {
        wrap_angle(current + max_step.copysign(delta))
    }
}
