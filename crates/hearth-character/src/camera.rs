//! Follow camera that orbits and trails the character

use hearth_core::{CameraOrientation, Vec3};

/// Closest the camera may orbit to its target
pub const MIN_DISTANCE: f32 = 3.0;
/// Farthest the camera may orbit from its target
pub const MAX_DISTANCE: f32 = 20.0;

/// An orbit camera whose target trails the character.
///
/// The character's displacement is applied to both camera and target, so the
/// framing stays fixed while the player orbits with the mouse.
#[derive(Debug, Clone, PartialEq)]
pub struct FollowCamera {
    pub position: Vec3,
    pub target: Vec3,
}

impl FollowCamera {
    /// Place the camera at `target + offset`, with the distance clamped to the orbit limits.
    pub fn new(target: Vec3, offset: Vec3) -> Self {
        let mut camera = Self {
            position: target + offset,
            target,
        };
        camera.set_distance(offset.length());
        camera
    }

    /// Move camera and target together
    pub fn follow(&mut self, displacement: Vec3) {
        self.position += displacement;
        self.target += displacement;
    }

    /// Rotate the camera around the target's vertical axis by `delta_yaw` radians.
    pub fn orbit(&mut self, delta_yaw: f32) {
        let arm = self.position - self.target;
        let (sin, cos) = delta_yaw.sin_cos();
        let rotated = Vec3::new(
            arm.x * cos + arm.z * sin,
            arm.y,
            -arm.x * sin + arm.z * cos,
        );
        self.position = self.target + rotated;
    }

    /// Move toward (`delta < 0`) or away from the target, within the orbit limits.
    pub fn zoom(&mut self, delta: f32) {
        let distance = self.distance() + delta;
        self.set_distance(distance);
    }

    pub fn distance(&self) -> f32 {
        (self.position - self.target).length()
    }

    fn set_distance(&mut self, distance: f32) {
        let arm = (self.position - self.target).normalized();
        let arm = if arm == Vec3::ZERO {
            Vec3::new(0.0, 0.0, -1.0)
        } else {
            arm
        };
        self.position = self.target + arm * distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Heading snapshot for this frame, flattened to the ground plane
    pub fn orientation(&self) -> CameraOrientation {
        CameraOrientation::from_forward(self.target - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn behind() -> FollowCamera {
        // Behind and above a character at the origin, looking along +Z
        FollowCamera::new(Vec3::ZERO, Vec3::new(0.0, 2.0, -5.0))
    }

    #[test]
    fn looks_along_plus_z() {
        let camera = behind();
        assert!(camera.orientation().yaw.abs() < 1e-6);
    }

    #[test]
    fn follow_keeps_heading() {
        let mut camera = behind();
        camera.follow(Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(camera.target, Vec3::new(1.0, 0.0, 2.0));
        assert!(camera.orientation().yaw.abs() < 1e-6);
    }

    #[test]
    fn orbit_turns_heading() {
        let mut camera = behind();
        let distance = camera.distance();
        camera.orbit(FRAC_PI_2);
        // Camera now sits at -X looking toward +X
        assert!((camera.orientation().yaw - FRAC_PI_2).abs() < 1e-5);
        assert!((camera.distance() - distance).abs() < 1e-5);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = behind();
        camera.zoom(-100.0);
        assert!((camera.distance() - MIN_DISTANCE).abs() < 1e-5);
        camera.zoom(100.0);
        assert!((camera.distance() - MAX_DISTANCE).abs() < 1e-4);
    }

    #[test]
    fn offset_too_close_is_pushed_out() {
        let camera = FollowCamera::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!((camera.distance() - MIN_DISTANCE).abs() < 1e-5);
    }
}
