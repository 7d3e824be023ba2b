//! Runtime system trait

use crate::input::InputState;
use hearth_core::{CameraOrientation, Result};

/// Snapshot handed to systems at the top of each frame.
///
/// The camera is read once per frame, before any system runs, so systems that
/// move the camera cannot change what others see mid-frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub input: &'a InputState,
    pub camera: CameraOrientation,
}

/// A system that can be ticked by the frame driver
pub trait RuntimeSystem {
    /// Called once before the first update
    fn initialize(&mut self) -> Result<()>;

    /// Called once per frame with the clamped frame delta in seconds
    fn update(&mut self, frame: &FrameInput<'_>, dt: f32) -> Result<()>;

    /// Called once when the driver stops
    fn shutdown(&mut self) -> Result<()>;

    /// Human-readable name for this system
    fn name(&self) -> &str;
}
