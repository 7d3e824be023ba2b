//! Clip registry and cross-fade playback for one actor

use crate::blend::CrossFade;
use crate::clip::ClipInfo;
use crate::event::AnimationEvent;
use hearth_core::{HearthError, Result};
use std::collections::HashMap;

/// Cross-fade duration used unless the caller asks otherwise
pub const DEFAULT_FADE_DURATION: f32 = 0.2;

/// Playback state of one registered clip
#[derive(Debug, Clone)]
struct ClipState {
    info: ClipInfo,
    weight: f32,
    time: f64,
    finished: bool,
}

/// What the render backend should sample this frame
#[derive(Debug, Clone, PartialEq)]
pub struct ClipSample {
    pub name: String,
    pub time: f64,
    pub weight: f32,
}

/// Named clips for one skeletal actor plus the active cross-fade.
///
/// At most two clips carry weight at any time: the active clip and, while a
/// fade runs, the one fading out.
#[derive(Debug)]
pub struct AnimationRegistry {
    clips: HashMap<String, ClipState>,
    /// Clip that one-shots return to
    default_clip: String,
    active: Option<String>,
    fade: Option<CrossFade>,
    /// Duration of the most recent `play`, reused for the return from a one-shot
    last_fade_duration: f32,
    events: Vec<AnimationEvent>,
}

impl AnimationRegistry {
    pub fn new(default_clip: impl Into<String>) -> Self {
        Self {
            clips: HashMap::new(),
            default_clip: default_clip.into(),
            active: None,
            fade: None,
            last_fade_duration: DEFAULT_FADE_DURATION,
            events: Vec::new(),
        }
    }

    /// Register a clip. Overwrites any existing clip with the same name but
    /// keeps its current weight and time so an active clip keeps playing.
    pub fn register(&mut self, info: ClipInfo) {
        match self.clips.get_mut(&info.name) {
            Some(state) => state.info = info,
            None => {
                self.clips.insert(
                    info.name.clone(),
                    ClipState {
                        info,
                        weight: 0.0,
                        time: 0.0,
                        finished: false,
                    },
                );
            }
        }
    }

    /// Snap to the default clip at full weight. Fails if it was never registered.
    pub fn activate(&mut self) -> Result<()> {
        if !self.clips.contains_key(&self.default_clip) {
            return Err(HearthError::MissingRequiredClip(self.default_clip.clone()));
        }
        for state in self.clips.values_mut() {
            state.weight = 0.0;
            state.time = 0.0;
            state.finished = false;
        }
        if let Some(state) = self.clips.get_mut(&self.default_clip) {
            state.weight = 1.0;
        }
        self.fade = None;
        self.active = Some(self.default_clip.clone());
        Ok(())
    }

    /// Cross-fade from the active clip to `name` over `fade_duration` seconds.
    ///
    /// Playing the clip that is already active does nothing, so callers can
    /// request their desired clip every frame without restarting it.
    pub fn play(&mut self, name: &str, fade_duration: f32) -> Result<()> {
        if !self.clips.contains_key(name) {
            return Err(HearthError::UnknownClip(name.to_string()));
        }
        if self.active.as_deref() == Some(name) {
            return Ok(());
        }

        let fade_duration = fade_duration.max(0.0);
        self.last_fade_duration = fade_duration;

        // An interrupted fade drops its outgoing clip entirely
        if let Some(old) = self.fade.take() {
            if old.from != name {
                if let Some(state) = self.clips.get_mut(&old.from) {
                    state.weight = 0.0;
                }
            }
        }

        if let Some(state) = self.clips.get_mut(name) {
            state.time = 0.0;
            state.finished = false;
        }

        let from = self.active.replace(name.to_string());
        log::debug!(
            "cross-fade {} -> {} over {:.2}s",
            from.as_deref().unwrap_or("<none>"),
            name,
            fade_duration
        );
        self.events.push(AnimationEvent::CrossFade {
            from: from.clone(),
            to: name.to_string(),
            duration: fade_duration,
        });

        match from {
            Some(from) => {
                let fade = CrossFade::new(
                    from.clone(),
                    name,
                    fade_duration,
                    self.weight(&from).unwrap_or(0.0),
                    self.weight(name).unwrap_or(0.0),
                );
                self.fade = Some(fade);
                self.apply_fade_weights();
            }
            None => {
                if let Some(state) = self.clips.get_mut(name) {
                    state.weight = 1.0;
                }
            }
        }
        Ok(())
    }

    /// Step the cross-fade and clip playback by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        if let Some(fade) = &mut self.fade {
            fade.advance(dt);
        }
        self.apply_fade_weights();

        let mut finished = None;
        for (name, state) in self.clips.iter_mut() {
            if state.weight <= 0.0 || state.finished {
                continue;
            }
            state.time += dt as f64;
            let duration = state.info.duration;
            if state.info.looping {
                if duration > 0.0 {
                    state.time %= duration;
                }
            } else if state.time >= duration {
                state.time = duration;
                state.finished = true;
                if self.active.as_deref() == Some(name.as_str()) {
                    finished = Some(name.clone());
                }
            }
        }

        if let Some(clip) = finished {
            log::debug!("one-shot '{}' finished", clip);
            self.events.push(AnimationEvent::Finished { clip: clip.clone() });
            if clip != self.default_clip {
                let default = self.default_clip.clone();
                let duration = self.last_fade_duration;
                if let Err(e) = self.play(&default, duration) {
                    log::warn!("cannot return to '{}': {}", default, e);
                }
            }
        }
    }

    fn apply_fade_weights(&mut self) {
        let Some(fade) = &self.fade else {
            return;
        };
        let (from, to) = (fade.from_weight(), fade.to_weight());
        let complete = fade.is_complete();
        let (from_name, to_name) = (fade.from.clone(), fade.to.clone());

        if let Some(state) = self.clips.get_mut(&from_name) {
            state.weight = from;
        }
        if let Some(state) = self.clips.get_mut(&to_name) {
            state.weight = to;
        }
        if complete {
            self.fade = None;
        }
    }

    // --- Query methods ---

    /// Name of the clip currently playing (or being faded into)
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn default_clip(&self) -> &str {
        &self.default_clip
    }

    pub fn get_clip(&self, name: &str) -> Option<&ClipInfo> {
        self.clips.get(name).map(|state| &state.info)
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn weight(&self, name: &str) -> Option<f32> {
        self.clips.get(name).map(|state| state.weight)
    }

    /// Playback time of a clip in seconds
    pub fn time(&self, name: &str) -> Option<f64> {
        self.clips.get(name).map(|state| state.time)
    }

    /// Has the named non-looping clip reached its end since it was last played?
    pub fn is_finished(&self, name: &str) -> bool {
        self.clips.get(name).is_some_and(|state| state.finished)
    }

    pub fn is_transitioning(&self) -> bool {
        self.fade.is_some()
    }

    /// Clips with nonzero weight, heaviest first
    pub fn samples(&self) -> Vec<ClipSample> {
        let mut samples: Vec<ClipSample> = self
            .clips
            .iter()
            .filter(|(_, state)| state.weight > 0.0)
            .map(|(name, state)| ClipSample {
                name: name.clone(),
                time: state.time,
                weight: state.weight,
            })
            .collect();
        samples.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.name.cmp(&b.name))
        });
        samples
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soldier() -> AnimationRegistry {
        let mut registry = AnimationRegistry::new("Idle");
        registry.register(ClipInfo::looping("Idle", 2.0));
        registry.register(ClipInfo::looping("Walk", 1.0));
        registry.register(ClipInfo::looping("Run", 0.7));
        registry.register(ClipInfo::one_shot("Jump", 0.5));
        registry.activate().unwrap();
        registry
    }

    fn total_weight(registry: &AnimationRegistry) -> f32 {
        registry.samples().iter().map(|s| s.weight).sum()
    }

    #[test]
    fn activate_requires_default_clip() {
        let mut registry = AnimationRegistry::new("Idle");
        registry.register(ClipInfo::looping("Walk", 1.0));
        let err = registry.activate().unwrap_err();
        assert!(matches!(err, HearthError::MissingRequiredClip(name) if name == "Idle"));
    }

    #[test]
    fn activate_snaps_idle() {
        let registry = soldier();
        assert_eq!(registry.active(), Some("Idle"));
        assert_eq!(registry.weight("Idle"), Some(1.0));
        assert_eq!(registry.weight("Walk"), Some(0.0));
        assert!(!registry.is_transitioning());
    }

    #[test]
    fn unknown_clip_is_an_error() {
        let mut registry = soldier();
        let err = registry.play("Swim", 0.2).unwrap_err();
        assert!(matches!(err, HearthError::UnknownClip(name) if name == "Swim"));
        assert_eq!(registry.active(), Some("Idle"));
    }

    #[test]
    fn register_overwrites() {
        let mut registry = soldier();
        registry.register(ClipInfo::looping("Walk", 3.0));
        assert_eq!(registry.clip_count(), 4);
        assert_eq!(registry.get_clip("Walk").unwrap().duration, 3.0);
    }

    #[test]
    fn crossfade_ramps_over_duration() {
        let mut registry = soldier();
        registry.play("Walk", 0.2).unwrap();
        assert!(registry.is_transitioning());

        registry.advance(0.1);
        assert!((registry.weight("Idle").unwrap() - 0.5).abs() < 1e-5);
        assert!((registry.weight("Walk").unwrap() - 0.5).abs() < 1e-5);
        assert!((total_weight(&registry) - 1.0).abs() < 1e-5);

        registry.advance(0.1);
        assert_eq!(registry.weight("Idle"), Some(0.0));
        assert_eq!(registry.weight("Walk"), Some(1.0));
        assert!(!registry.is_transitioning());
        assert_eq!(registry.samples().len(), 1);
    }

    #[test]
    fn play_active_clip_is_noop() {
        let mut registry = soldier();
        registry.play("Walk", 0.2).unwrap();
        registry.advance(0.3);
        let time = registry.time("Walk").unwrap();
        let _ = registry.drain_events();

        registry.play("Walk", 0.2).unwrap();
        assert!(registry.drain_events().is_empty());
        assert!(!registry.is_transitioning());
        assert_eq!(registry.time("Walk"), Some(time));
    }

    #[test]
    fn one_event_per_change() {
        let mut registry = soldier();
        registry.play("Walk", 0.2).unwrap();
        registry.play("Walk", 0.2).unwrap();
        registry.advance(0.5);
        registry.play("Run", 0.2).unwrap();

        let events = registry.drain_events();
        assert_eq!(
            events,
            vec![
                AnimationEvent::CrossFade {
                    from: Some("Idle".into()),
                    to: "Walk".into(),
                    duration: 0.2,
                },
                AnimationEvent::CrossFade {
                    from: Some("Walk".into()),
                    to: "Run".into(),
                    duration: 0.2,
                },
            ]
        );
    }

    #[test]
    fn interrupted_fade_keeps_two_weights() {
        let mut registry = soldier();
        registry.play("Walk", 0.2).unwrap();
        registry.advance(0.1);
        registry.play("Run", 0.2).unwrap();

        // Idle was the outgoing clip of the interrupted fade
        assert_eq!(registry.weight("Idle"), Some(0.0));
        registry.advance(0.05);
        let samples = registry.samples();
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.name == "Walk" || s.name == "Run"));

        registry.advance(0.2);
        assert_eq!(registry.weight("Run"), Some(1.0));
        assert_eq!(registry.weight("Walk"), Some(0.0));
        assert!((total_weight(&registry) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reversing_a_fade_keeps_partial_weight() {
        let mut registry = soldier();
        registry.play("Walk", 0.2).unwrap();
        registry.advance(0.05);
        registry.play("Idle", 0.2).unwrap();
        assert!((registry.weight("Idle").unwrap() - 0.75).abs() < 1e-5);
        registry.advance(0.2);
        assert_eq!(registry.weight("Idle"), Some(1.0));
        assert_eq!(registry.weight("Walk"), Some(0.0));
    }

    #[test]
    fn zero_duration_fade_is_instant() {
        let mut registry = soldier();
        registry.play("Run", 0.0).unwrap();
        assert_eq!(registry.weight("Run"), Some(1.0));
        assert_eq!(registry.weight("Idle"), Some(0.0));
        assert!(!registry.is_transitioning());
    }

    #[test]
    fn looping_clip_wraps() {
        let mut registry = soldier();
        registry.play("Run", 0.0).unwrap();
        for _ in 0..10 {
            registry.advance(0.1);
        }
        let time = registry.time("Run").unwrap();
        assert!((0.0..0.7).contains(&time));
        assert!((time - 0.3).abs() < 1e-4);
    }

    #[test]
    fn one_shot_returns_to_default() {
        let mut registry = soldier();
        registry.play("Jump", 0.2).unwrap();
        for _ in 0..5 {
            registry.advance(0.1);
        }
        let events = registry.drain_events();
        assert!(events.contains(&AnimationEvent::Finished { clip: "Jump".into() }));
        assert_eq!(registry.active(), Some("Idle"));
        assert!(registry.is_finished("Jump"));
        assert!(events.contains(&AnimationEvent::CrossFade {
            from: Some("Jump".into()),
            to: "Idle".into(),
            duration: 0.2,
        }));

        for _ in 0..3 {
            registry.advance(0.1);
        }
        assert_eq!(registry.weight("Idle"), Some(1.0));
        assert_eq!(registry.weight("Jump"), Some(0.0));
    }

    #[test]
    fn negative_dt_does_not_rewind() {
        let mut registry = soldier();
        registry.advance(0.5);
        registry.advance(-1.0);
        assert!((registry.time("Idle").unwrap() - 0.5).abs() < 1e-6);
    }
}
