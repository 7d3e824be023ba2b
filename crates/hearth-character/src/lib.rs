//! Character control for Hearth
//!
//! Turns held keys plus the camera heading into a smoothly rotated,
//! camera-relative movement for an actor, and picks the clip (idle, walk,
//! run, or a one-shot action) that the animation registry cross-fades to.

pub mod actor;
pub mod camera;
pub mod config;
pub mod controller;
pub mod direction;
pub mod motion;

pub use actor::{Actor, MeshHandle};
pub use camera::FollowCamera;
pub use config::{CharacterConfig, ClipNames, KeyBindings, OneShotBinding};
pub use controller::CharacterController;
pub use direction::MovementKeys;
pub use motion::{CharacterState, MotionModel, MotionState, MotionStep};
