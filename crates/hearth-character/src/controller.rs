//! Character controller: owns the actor and its clips, applies motion each frame

use crate::actor::Actor;
use crate::config::CharacterConfig;
use crate::motion::{CharacterState, MotionModel, MotionStep};
use hearth_animation::{AnimationEvent, AnimationRegistry};
use hearth_core::{CameraOrientation, HearthError, Result};
use hearth_runtime::{EventBus, FrameInput, InputState, RuntimeSystem};

/// Drives one actor from input and the camera heading.
///
/// Per frame, in order: read input and camera, update motion state and
/// rotation, apply the displacement, then advance the animation registry.
pub struct CharacterController {
    actor: Actor,
    registry: AnimationRegistry,
    model: MotionModel,
    last_step: Option<MotionStep>,
    events: EventBus<AnimationEvent>,
}

impl CharacterController {
    /// Wire up a controller. Fails if the config is invalid or the idle,
    /// walk, or run clip is missing from `registry`.
    pub fn new(
        actor: Actor,
        mut registry: AnimationRegistry,
        config: CharacterConfig,
    ) -> Result<Self> {
        config.validate()?;

        for name in config.clips.required() {
            if !registry.has_clip(name) {
                return Err(HearthError::MissingRequiredClip(name.to_string()));
            }
        }
        if registry.default_clip() != config.clips.idle {
            return Err(HearthError::InvalidConfig(format!(
                "registry returns to '{}' but the idle clip is '{}'",
                registry.default_clip(),
                config.clips.idle
            )));
        }
        registry.activate()?;

        let locomotion: Vec<String> = config
            .clips
            .required()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let mut model = MotionModel::new(config, actor.yaw);
        model.retain_one_shots(|binding| {
            let problem = match registry.get_clip(&binding.clip) {
                None => "is not loaded",
                Some(_) if locomotion.contains(&binding.clip) => "is a locomotion clip",
                Some(info) if info.looping => "loops and would never finish",
                Some(_) => return true,
            };
            log::warn!(
                "ignoring one-shot key '{}': clip '{}' {}",
                binding.key,
                binding.clip,
                problem
            );
            false
        });

        Ok(Self {
            actor,
            registry,
            model,
            last_step: None,
            events: EventBus::new(),
        })
    }

    /// Run one frame. `dt` is clamped before use.
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputState,
        camera: CameraOrientation,
    ) -> Result<&MotionStep> {
        let step = self.model.update(dt, input, camera);

        if self.registry.active() != Some(step.animation.as_str()) {
            self.registry
                .play(&step.animation, self.model.config().fade_duration)?;
        }

        self.actor.set_yaw(step.facing);
        self.actor.translate(step.displacement);

        self.registry.advance(step.dt);
        for event in self.registry.drain_events() {
            if let AnimationEvent::Finished { clip } = &event {
                self.model.end_action(clip);
            }
            self.events.push(event);
        }

        Ok(&*self.last_step.insert(step))
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn registry(&self) -> &AnimationRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CharacterConfig {
        self.model.config()
    }

    /// Current state; a finished one-shot reads as `Idle` until the next frame
    pub fn state(&self) -> &CharacterState {
        &self.model.state().state
    }

    /// Clip the registry is playing or fading into
    pub fn active_clip(&self) -> Option<&str> {
        self.registry.active()
    }

    pub fn last_step(&self) -> Option<&MotionStep> {
        self.last_step.as_ref()
    }

    /// Cross-fade and finish notifications since the last drain
    pub fn drain_animation_events(&mut self) -> Vec<AnimationEvent> {
        self.events.drain()
    }
}

impl RuntimeSystem for CharacterController {
    fn initialize(&mut self) -> Result<()> {
        log::info!(
            "character controller ready ({} clips, {} one-shot keys, mesh '{}')",
            self.registry.clip_count(),
            self.model.one_shots().len(),
            self.actor.mesh.as_str()
        );
        Ok(())
    }

    fn update(&mut self, frame: &FrameInput<'_>, dt: f32) -> Result<()> {
        CharacterController::update(self, dt, frame.input, frame.camera)?;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        log::info!(
            "character controller stopped at ({:.2}, {:.2}, {:.2})",
            self.actor.position.x,
            self.actor.position.y,
            self.actor.position.z
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "character"
    }
}
