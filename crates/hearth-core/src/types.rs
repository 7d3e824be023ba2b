//! Spatial and common types

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub};

/// A 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const UP: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Unit vector on the ground plane for a yaw angle (radians).
    ///
    /// Yaw 0 points along +Z, positive yaw turns toward +X.
    pub fn from_yaw(yaw: f32) -> Self {
        Self {
            x: yaw.sin(),
            y: 0.0,
            z: yaw.cos(),
        }
    }

    /// Yaw of this vector's ground-plane projection, or `None` if it is vertical.
    pub fn yaw(&self) -> Option<f32> {
        if self.x.abs() < 1e-6 && self.z.abs() < 1e-6 {
            return None;
        }
        Some(self.x.atan2(self.z))
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
                z: self.z / len,
            }
        } else {
            Self::ZERO
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

/// Read-only camera snapshot taken at the top of each frame.
///
/// Only the heading matters for movement: pitch and roll are flattened away.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraOrientation {
    /// Ground-plane heading in radians (0 = looking along +Z)
    pub yaw: f32,
}

impl CameraOrientation {
    pub const fn new(yaw: f32) -> Self {
        Self { yaw }
    }

    /// Build from a world-space forward vector, projected onto the ground plane.
    /// A straight up/down forward has no heading and falls back to yaw 0.
    pub fn from_forward(forward: Vec3) -> Self {
        Self {
            yaw: forward.yaw().unwrap_or(0.0),
        }
    }

    /// Ground-plane unit vector the camera is looking along
    pub fn forward(&self) -> Vec3 {
        Vec3::from_yaw(self.yaw)
    }
}
