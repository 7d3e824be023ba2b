//! Notifications emitted by the registry

/// Emitted by [`AnimationRegistry`](crate::AnimationRegistry) and drained by the owner.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationEvent {
    /// A cross-fade was requested. `from` is `None` when nothing was playing.
    CrossFade {
        from: Option<String>,
        to: String,
        duration: f32,
    },
    /// A non-looping clip reached its end
    Finished { clip: String },
}
