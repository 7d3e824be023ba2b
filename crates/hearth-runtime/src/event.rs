//! Events published by the input tracker

/// Something happened on the input side this frame.
///
/// Consumed by overlays (key display) and logging; the motion model reads
/// `InputState` directly and never depends on these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A key went down (normalized identifier)
    KeyDown(String),
    /// A key was released
    KeyUp(String),
    /// The run toggle flipped; carries the new value
    RunToggled(bool),
}
