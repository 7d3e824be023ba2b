//! Hearth Player - host library for the character controller
//!
//! Provides the `PlayerApp` winit application handler, headless replay of
//! scripted input, and the default clip set used when no manifest is given.

pub mod defaults;
pub mod key_display;
mod player_app;
pub mod replay;

pub use key_display::KeyDisplay;
pub use player_app::PlayerApp;
