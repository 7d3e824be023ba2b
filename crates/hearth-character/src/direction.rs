//! Directional key snapshot and camera-relative heading offsets

use crate::config::KeyBindings;
use hearth_runtime::InputState;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

/// Which of the four directional keys are held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementKeys {
    pub fn from_input(input: &InputState, keys: &KeyBindings) -> Self {
        Self {
            forward: input.is_pressed(&keys.forward),
            backward: input.is_pressed(&keys.backward),
            left: input.is_pressed(&keys.left),
            right: input.is_pressed(&keys.right),
        }
    }

    /// Is any directional key held?
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Heading offset from the camera's heading, or `None` with no keys held.
    ///
    /// Opposing keys resolve by fixed precedence: forward beats backward and
    /// left beats right. Positive offsets turn toward the camera's left.
    pub fn direction_offset(&self) -> Option<f32> {
        let offset = if self.forward {
            if self.left {
                FRAC_PI_4
            } else if self.right {
                -FRAC_PI_4
            } else {
                0.0
            }
        } else if self.backward {
            if self.left {
                FRAC_PI_4 + FRAC_PI_2
            } else if self.right {
                -FRAC_PI_4 - FRAC_PI_2
            } else {
                PI
            }
        } else if self.left {
            FRAC_PI_2
        } else if self.right {
            -FRAC_PI_2
        } else {
            return None;
        };
        Some(offset)
    }
}
