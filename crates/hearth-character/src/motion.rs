//! Character motion state machine
//!
//! One call to [`MotionModel::update`] per frame decides the character state
//! (idle, walk, run, or a one-shot action), turns the facing toward the
//! camera-relative desired heading, and produces this frame's displacement.
//! It never touches the animation registry or the actor; the controller
//! applies the returned [`MotionStep`].

use crate::config::{CharacterConfig, OneShotBinding};
use crate::direction::MovementKeys;
use hearth_core::angle::{rotate_towards, shortest_arc, wrap_angle};
use hearth_core::{CameraOrientation, Vec3};
use hearth_runtime::InputState;
use std::collections::HashSet;

/// What the character is doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterState {
    Idle,
    Walk,
    Run,
    /// A one-shot clip (jump, dance) playing until it finishes
    Action(String),
}

impl CharacterState {
    /// Clip the registry should be playing for this state
    pub fn clip_name<'a>(&'a self, config: &'a CharacterConfig) -> &'a str {
        match self {
            CharacterState::Idle => config.clips.idle.as_str(),
            CharacterState::Walk => config.clips.walk.as_str(),
            CharacterState::Run => config.clips.run.as_str(),
            CharacterState::Action(clip) => clip.as_str(),
        }
    }

    /// Ground speed for this state, units per second
    pub fn speed(&self, config: &CharacterConfig) -> f32 {
        match self {
            CharacterState::Walk => config.walk_speed,
            CharacterState::Run => config.run_speed,
            CharacterState::Idle | CharacterState::Action(_) => 0.0,
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, CharacterState::Walk | CharacterState::Run)
    }
}

/// Private per-character state, mutated once per frame
#[derive(Debug, Clone)]
pub struct MotionState {
    /// Facing yaw in radians, in [-π, π]
    pub facing: f32,
    pub state: CharacterState,
    /// Clip name the model last asked for
    pub animation: String,
    /// Turn rate applied last frame, radians per second
    pub angular_velocity: f32,
    /// One-shot keys held last frame, for press-edge detection
    held_one_shots: HashSet<String>,
}

/// Result of one motion update
#[derive(Debug, Clone, PartialEq)]
pub struct MotionStep {
    pub state: CharacterState,
    /// New facing yaw
    pub facing: f32,
    /// World-space translation for this frame
    pub displacement: Vec3,
    /// Clip that should be active
    pub animation: String,
    /// The delta actually used, after clamping
    pub dt: f32,
}

/// Camera-relative motion for one character
#[derive(Debug, Clone)]
pub struct MotionModel {
    config: CharacterConfig,
    one_shots: Vec<OneShotBinding>,
    state: MotionState,
}

impl MotionModel {
    pub fn new(config: CharacterConfig, facing: f32) -> Self {
        let one_shots = config.one_shots.clone();
        let animation = config.clips.idle.clone();
        Self {
            config,
            one_shots,
            state: MotionState {
                facing: wrap_angle(facing),
                state: CharacterState::Idle,
                animation,
                angular_velocity: 0.0,
                held_one_shots: HashSet::new(),
            },
        }
    }

    /// Limit one-shot keys to those whose clip passes `keep`
    pub fn retain_one_shots(&mut self, mut keep: impl FnMut(&OneShotBinding) -> bool) {
        self.one_shots.retain(|binding| keep(binding));
    }

    pub fn one_shots(&self) -> &[OneShotBinding] {
        &self.one_shots
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Clamp a raw frame delta into `[0, max_frame_delta]`
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0.0;
        }
        dt.min(self.config.max_frame_delta)
    }

    /// Advance one frame.
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputState,
        camera: CameraOrientation,
    ) -> MotionStep {
        let dt = self.clamp_dt(dt);
        let keys = MovementKeys::from_input(input, &self.config.keys);

        if let Some(clip) = self.poll_one_shots(input) {
            if !matches!(self.state.state, CharacterState::Action(_)) {
                log::debug!("one-shot '{}' triggered", clip);
                self.state.state = CharacterState::Action(clip);
            }
        }

        if !matches!(self.state.state, CharacterState::Action(_)) {
            let next = if !keys.any() {
                CharacterState::Idle
            } else if input.is_run_toggled() {
                CharacterState::Run
            } else {
                CharacterState::Walk
            };
            if next != self.state.state {
                log::debug!("{:?} -> {:?}", self.state.state, next);
            }
            self.state.state = next;
        }
        self.state.animation = self.state.state.clip_name(&self.config).to_string();

        let mut turned = 0.0;
        if self.state.state.is_moving() {
            if let Some(offset) = keys.direction_offset() {
                let desired = wrap_angle(camera.yaw + offset);
                turned = self.turn_towards(desired, dt);
            }
        }
        self.state.angular_velocity = if dt > 0.0 { turned / dt } else { 0.0 };

        let speed = self.state.state.speed(&self.config);
        let displacement = if speed > 0.0 {
            Vec3::from_yaw(self.state.facing) * (speed * dt)
        } else {
            Vec3::ZERO
        };

        MotionStep {
            state: self.state.state.clone(),
            facing: self.state.facing,
            displacement,
            animation: self.state.animation.clone(),
            dt,
        }
    }

    /// The registry reported `clip` finished; fall back to locomotion.
    pub fn end_action(&mut self, clip: &str) {
        if let CharacterState::Action(current) = &self.state.state {
            if current == clip {
                self.state.state = CharacterState::Idle;
                self.state.animation = self.config.clips.idle.clone();
            }
        }
    }

    /// Rotate facing toward `desired`; returns the signed angle turned.
    fn turn_towards(&mut self, desired: f32, dt: f32) -> f32 {
        let gap = shortest_arc(self.state.facing, desired);
        let smoothing = (self.config.rotation_speed * dt).min(1.0);
        let step = (gap.abs() * smoothing).min(self.config.max_rotation_speed * dt);
        let before = self.state.facing;
        self.state.facing = rotate_towards(before, desired, step);
        shortest_arc(before, self.state.facing)
    }

    /// First one-shot key pressed this frame (down now, up last frame)
    fn poll_one_shots(&mut self, input: &InputState) -> Option<String> {
        let mut triggered = None;
        for binding in &self.one_shots {
            let down = input.is_pressed(&binding.key);
            let was_down = if down {
                !self.state.held_one_shots.insert(binding.key.clone())
            } else {
                self.state.held_one_shots.remove(&binding.key)
            };
            if down && !was_down && triggered.is_none() {
                triggered = Some(binding.clip.clone());
            }
        }
        triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn model() -> MotionModel {
        MotionModel::new(CharacterConfig::default(), 0.0)
    }

    fn held(keys: &[&str]) -> InputState {
        let mut input = InputState::new();
        for key in keys {
            input.on_key_down(key);
        }
        input
    }

    #[test]
    fn idle_never_moves() {
        let mut m = model();
        let mut input = held(&[]);
        input.on_key_down("shift");
        for dt in [0.0, 0.016, 0.1, 3.0] {
            let step = m.update(dt, &input, CameraOrientation::new(1.0));
            assert_eq!(step.state, CharacterState::Idle);
            assert_eq!(step.displacement, Vec3::ZERO);
            assert_eq!(step.animation, "Idle");
        }
        // Idle does not turn toward the camera
        assert_eq!(m.state().facing, 0.0);
    }

    #[test]
    fn forward_with_camera_at_zero() {
        let mut m = model();
        let step = m.update(0.1, &held(&["w"]), CameraOrientation::new(0.0));
        assert_eq!(step.state, CharacterState::Walk);
        assert!(step.facing.abs() < 1e-6);
        assert!((step.displacement.z - 0.2).abs() < 1e-6);
        assert!(step.displacement.x.abs() < 1e-6);
        assert_eq!(step.displacement.y, 0.0);
    }

    #[test]
    fn run_toggle_selects_run_speed() {
        let mut m = model();
        let step = m.update(0.1, &held(&["w", "shift"]), CameraOrientation::default());
        assert_eq!(step.state, CharacterState::Run);
        assert_eq!(step.animation, "Run");
        assert!((step.displacement.length() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn facing_follows_camera_heading() {
        let mut m = model();
        let input = held(&["w"]);
        let camera = CameraOrientation::new(FRAC_PI_2);
        let mut last = m.update(0.1, &input, camera);
        for _ in 0..30 {
            last = m.update(0.1, &input, camera);
        }
        assert!((last.facing - FRAC_PI_2).abs() < 1e-3);
        assert!(last.displacement.x > 0.0);
        assert!(last.displacement.z.abs() < 1e-3);
    }

    #[test]
    fn backward_turns_around_the_short_way() {
        let mut m = MotionModel::new(CharacterConfig::default(), 0.2);
        let step = m.update(0.05, &held(&["s"]), CameraOrientation::new(0.0));
        // Target is π; from 0.2 the short arc is positive
        assert!(step.facing > 0.2);
        assert!(m.state().angular_velocity > 0.0);
    }

    #[test]
    fn rotation_is_rate_limited() {
        let config = CharacterConfig::default();
        let max = config.max_rotation_speed;
        let mut m = MotionModel::new(config, 0.0);
        let input = held(&["s"]);
        let mut facing = 0.0;
        for i in 0..=20 {
            let dt = i as f32 * 0.005;
            let step = m.update(dt, &input, CameraOrientation::new(0.0));
            let turned = shortest_arc(facing, step.facing).abs();
            assert!(turned <= max * dt + 1e-5, "dt {dt}: turned {turned}");
            facing = step.facing;
        }
    }

    #[test]
    fn rotation_never_overshoots() {
        let mut m = model();
        let input = held(&["a"]);
        let camera = CameraOrientation::new(0.0);
        for _ in 0..200 {
            let step = m.update(0.1, &input, camera);
            assert!(step.facing <= FRAC_PI_2 + 1e-6);
        }
        assert!((m.state().facing - FRAC_PI_2).abs() < 1e-4);
    }

    #[test]
    fn large_delta_is_clamped() {
        let mut m = model();
        let step = m.update(5.0, &held(&["w"]), CameraOrientation::default());
        assert!((step.dt - 0.1).abs() < 1e-6);
        assert!((step.displacement.z - 0.2).abs() < 1e-5);

        let step = m.update(-1.0, &held(&["w"]), CameraOrientation::default());
        assert_eq!(step.dt, 0.0);
        assert_eq!(step.displacement, Vec3::ZERO);
    }

    #[test]
    fn opposing_keys_use_precedence() {
        let mut m = model();
        let step = m.update(0.1, &held(&["w", "s"]), CameraOrientation::default());
        assert_eq!(step.state, CharacterState::Walk);
        assert!(step.facing.abs() < 1e-6);
        assert!(step.displacement.z > 0.0);
    }

    #[test]
    fn one_shot_triggers_on_press_edge() {
        let mut m = model();
        let mut input = held(&["space"]);
        let step = m.update(0.1, &input, CameraOrientation::default());
        assert_eq!(step.state, CharacterState::Action("Jump".into()));
        assert_eq!(step.animation, "Jump");

        input.on_key_down("w");
        let step = m.update(0.1, &input, CameraOrientation::default());
        assert_eq!(step.displacement, Vec3::ZERO);

        m.end_action("Jump");
        input.on_key_up("w");
        // Space still held: no retrigger
        let step = m.update(0.1, &input, CameraOrientation::default());
        assert_eq!(step.state, CharacterState::Idle);

        input.on_key_up("space");
        m.update(0.1, &input, CameraOrientation::default());
        input.on_key_down("space");
        let step = m.update(0.1, &input, CameraOrientation::default());
        assert_eq!(step.state, CharacterState::Action("Jump".into()));
    }

    #[test]
    fn end_action_ignores_other_clips() {
        let mut m = model();
        m.update(0.1, &held(&["e"]), CameraOrientation::default());
        m.end_action("Jump");
        assert_eq!(m.state().state, CharacterState::Action("Dance".into()));
    }

    #[test]
    fn initial_facing_is_wrapped() {
        let m = MotionModel::new(CharacterConfig::default(), 3.0 * PI);
        assert!((m.state().facing.abs() - PI).abs() < 1e-4);
    }
}
