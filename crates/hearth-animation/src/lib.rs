//! Animation clip registry for Hearth
//!
//! Tracks the named clips of one skeletal actor and the weights the render
//! backend should sample them with:
//! - `ClipInfo` / `ClipManifest` - clip descriptions supplied by the asset loader
//! - `CrossFade` - linear weight ramp between two clips
//! - `AnimationRegistry` - lookup, `play` with cross-fade, per-frame `advance`
//!
//! Pose sampling itself happens in the render backend, which reads
//! [`AnimationRegistry::samples`] each frame.

pub mod blend;
pub mod clip;
pub mod event;
pub mod registry;

pub use blend::CrossFade;
pub use clip::{ClipInfo, ClipManifest};
pub use event::AnimationEvent;
pub use registry::{AnimationRegistry, ClipSample, DEFAULT_FADE_DURATION};
