//! Headless replay of scripted input
//!
//! A replay is a TOML list of steps. Each step presses/releases keys, sets
//! the camera heading, then runs a number of frames at a fixed delta.

use anyhow::{Context, Result};
use hearth_animation::AnimationEvent;
use hearth_character::{CharacterController, CharacterState};
use hearth_core::{CameraOrientation, Vec3};
use hearth_runtime::{FrameDriver, InputState};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    /// Seconds per simulated frame
    #[serde(default = "default_frame_delta")]
    pub frame_delta: f64,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

fn default_frame_delta() -> f64 {
    1.0 / 60.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayStep {
    pub frames: u32,
    #[serde(default)]
    pub keys_down: Vec<String>,
    #[serde(default)]
    pub keys_up: Vec<String>,
    /// Camera heading in radians; keeps the previous heading when omitted
    pub camera_yaw: Option<f32>,
}

/// Where the character ended up
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub frames: u64,
    pub position: Vec3,
    pub facing: f32,
    pub state: CharacterState,
    pub events: Vec<AnimationEvent>,
}

impl ReplayScript {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Invalid replay script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Drive `controller` through every step.
    pub fn run(&self, controller: &mut CharacterController) -> Result<ReplayReport> {
        let mut driver = FrameDriver::default();
        let mut input = InputState::new();
        input.set_run_key(&controller.config().keys.run_toggle);
        let mut camera = CameraOrientation::default();
        let mut events = Vec::new();

        for (i, step) in self.steps.iter().enumerate() {
            for key in &step.keys_down {
                input.on_key_down(key);
            }
            for key in &step.keys_up {
                input.on_key_up(key);
            }
            if let Some(yaw) = step.camera_yaw {
                camera = CameraOrientation::new(yaw);
            }

            driver
                .run_frames(step.frames, self.frame_delta, controller, &input, camera)
                .with_context(|| format!("Replay step {} failed", i + 1))?;
            let _ = input.drain_events();
            events.extend(controller.drain_animation_events());
        }
        driver.shutdown(controller)?;

        Ok(ReplayReport {
            frames: driver.frame_count(),
            position: controller.actor().position,
            facing: controller.actor().yaw,
            state: controller.state().clone(),
            events,
        })
    }
}
