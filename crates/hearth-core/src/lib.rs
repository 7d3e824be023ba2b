//! Hearth Core - Foundational types for the Hearth character controller
//!
//! This crate provides the core types that all other Hearth crates depend on:
//! - `Vec3` - Spatial vector
//! - `CameraOrientation` - Per-frame camera heading snapshot
//! - Angle helpers for yaw wrapping and bounded rotation
//! - Error types and Result alias

pub mod angle;
mod error;
mod types;

pub use error::{HearthError, Result};
pub use types::{CameraOrientation, Vec3};
