//! Hearth Runtime - Frame loop infrastructure
//!
//! Provides the per-frame building blocks:
//! - `FrameClock` - wall-clock delta with clamping for clock anomalies
//! - `FrameDriver` - ticks a `RuntimeSystem` once per host frame, with a stop hook
//! - `InputState` - lowercase key tracking plus the edge-triggered run toggle
//! - `GameEvent` / `EventBus` - key events for overlays such as a key display
//! - `RuntimeSystem` - trait for systems ticked by the frame driver

mod clock;
mod driver;
mod event;
mod event_bus;
mod input;
mod system;

pub use clock::{FrameClock, DEFAULT_MAX_DELTA};
pub use driver::{FrameDriver, FrameStatus, StopHandle};
pub use event::GameEvent;
pub use event_bus::{EventBus, MAX_PENDING_EVENTS};
pub use input::{key_identifier, InputState, DEFAULT_RUN_KEY};
pub use system::{FrameInput, RuntimeSystem};
