//! The controllable actor's transform

use hearth_core::angle::wrap_angle;
use hearth_core::Vec3;
use serde::{Deserialize, Serialize};

/// Name of the skinned mesh the render backend draws for an actor
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub String);

impl MeshHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// World-space position and yaw of the character, plus its mesh.
///
/// Created once the character asset has loaded; the scene owns the node the
/// mesh is attached to, this only holds what the controller writes each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub position: Vec3,
    /// Yaw in radians, kept in [-π, π]
    pub yaw: f32,
    pub mesh: MeshHandle,
}

impl Actor {
    pub fn new(mesh: MeshHandle) -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            mesh,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = wrap_angle(yaw);
        self
    }

    /// Move by a world-space displacement
    pub fn translate(&mut self, displacement: Vec3) {
        self.position += displacement;
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = wrap_angle(yaw);
    }

    /// Unit vector the actor is facing on the ground plane
    pub fn forward(&self) -> Vec3 {
        Vec3::from_yaw(self.yaw)
    }
}
