//! Character tuning and key bindings, loaded from TOML

use hearth_core::{HearthError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning for one controllable character.
///
/// Every field has a default, so a TOML file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Walk speed in units per second
    pub walk_speed: f32,
    /// Run speed in units per second (must exceed `walk_speed`)
    pub run_speed: f32,
    /// Cross-fade duration between clips, in seconds
    pub fade_duration: f32,
    /// Rate (1/s) at which facing closes the gap to the desired heading
    pub rotation_speed: f32,
    /// Hard cap on turning, radians per second
    pub max_rotation_speed: f32,
    /// Frame deltas above this are clamped, in seconds
    pub max_frame_delta: f32,
    pub clips: ClipNames,
    pub keys: KeyBindings,
    pub one_shots: Vec<OneShotBinding>,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            walk_speed: 2.0,
            run_speed: 5.0,
            fade_duration: 0.2,
            rotation_speed: 10.0,
            max_rotation_speed: 12.0,
            max_frame_delta: 0.1,
            clips: ClipNames::default(),
            keys: KeyBindings::default(),
            one_shots: vec![
                OneShotBinding::new("space", "Jump"),
                OneShotBinding::new("e", "Dance"),
            ],
        }
    }
}

/// Names of the locomotion clips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipNames {
    pub idle: String,
    pub walk: String,
    pub run: String,
}

impl Default for ClipNames {
    fn default() -> Self {
        Self {
            idle: "Idle".into(),
            walk: "Walk".into(),
            run: "Run".into(),
        }
    }
}

impl ClipNames {
    /// Clips that must exist before the controller can start
    pub fn required(&self) -> [&str; 3] {
        [self.idle.as_str(), self.walk.as_str(), self.run.as_str()]
    }
}

/// Key identifiers (as reported by `InputState`) for each logical action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: String,
    pub backward: String,
    pub left: String,
    pub right: String,
    pub run_toggle: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "w".into(),
            backward: "s".into(),
            left: "a".into(),
            right: "d".into(),
            run_toggle: hearth_runtime::DEFAULT_RUN_KEY.into(),
        }
    }
}

impl KeyBindings {
    pub fn movement(&self) -> [&str; 4] {
        [
            self.forward.as_str(),
            self.backward.as_str(),
            self.left.as_str(),
            self.right.as_str(),
        ]
    }
}

/// A key that plays a one-shot clip (jump, dance) on press
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneShotBinding {
    pub key: String,
    pub clip: String,
}

impl OneShotBinding {
    pub fn new(key: impl Into<String>, clip: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            clip: clip.into(),
        }
    }
}

impl CharacterConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject values the motion model cannot work with.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("rotation_speed", self.rotation_speed),
            ("max_rotation_speed", self.max_rotation_speed),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{field} must be positive, got {value}")));
            }
        }
        if !self.fade_duration.is_finite() || self.fade_duration < 0.0 {
            return Err(invalid(format!(
                "fade_duration must not be negative, got {}",
                self.fade_duration
            )));
        }
        if self.run_speed <= self.walk_speed {
            return Err(invalid(format!(
                "run_speed ({}) must exceed walk_speed ({})",
                self.run_speed, self.walk_speed
            )));
        }

        for name in self.clips.required() {
            if name.is_empty() {
                return Err(invalid("clip names must not be empty".into()));
            }
        }

        let run = self.keys.run_toggle.to_lowercase();
        if run.is_empty() {
            return Err(invalid("run_toggle key must not be empty".into()));
        }
        for key in self.keys.movement() {
            if key.is_empty() {
                return Err(invalid("movement keys must not be empty".into()));
            }
            if key.to_lowercase() == run {
                return Err(invalid(format!(
                    "'{key}' is bound to both movement and run_toggle"
                )));
            }
        }
        for binding in &self.one_shots {
            if binding.key.is_empty() || binding.clip.is_empty() {
                return Err(invalid("one-shot bindings need a key and a clip".into()));
            }
        }
        Ok(())
    }
}

fn invalid(msg: String) -> HearthError {
    HearthError::InvalidConfig(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = CharacterConfig::default();
        config.validate().unwrap();
        assert_eq!(config.fade_duration, 0.2);
        assert_eq!(config.clips.required(), ["Idle", "Walk", "Run"]);
        assert_eq!(config.keys.movement(), ["w", "s", "a", "d"]);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = CharacterConfig::from_toml_str(
            r#"
walk_speed = 1.5

[keys]
forward = "arrowup"
"#,
        )
        .unwrap();
        assert_eq!(config.walk_speed, 1.5);
        assert_eq!(config.run_speed, 5.0);
        assert_eq!(config.keys.forward, "arrowup");
        assert_eq!(config.keys.backward, "s");
        assert_eq!(config.one_shots.len(), 2);
    }

    #[test]
    fn one_shots_replace_defaults() {
        let config = CharacterConfig::from_toml_str(
            r#"
[[one_shots]]
key = "j"
clip = "Wave"
"#,
        )
        .unwrap();
        assert_eq!(config.one_shots, vec![OneShotBinding::new("j", "Wave")]);
    }

    #[test]
    fn run_must_be_faster_than_walk() {
        let err = CharacterConfig::from_toml_str("walk_speed = 5.0\nrun_speed = 4.0").unwrap_err();
        assert!(matches!(err, HearthError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_non_positive_clamp() {
        let err = CharacterConfig::from_toml_str("max_frame_delta = 0.0").unwrap_err();
        assert!(matches!(err, HearthError::InvalidConfig(msg) if msg.contains("max_frame_delta")));
    }

    #[test]
    fn rejects_run_key_bound_to_movement() {
        let config = CharacterConfig {
            keys: KeyBindings {
                run_toggle: "W".into(),
                ..KeyBindings::default()
            },
            ..CharacterConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_toml_is_parse_error() {
        let err = CharacterConfig::from_toml_str("walk_speed = \"fast\"").unwrap_err();
        assert!(matches!(err, HearthError::TomlParseError(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "run_speed = 6.5").unwrap();
        let config = CharacterConfig::load(file.path()).unwrap();
        assert_eq!(config.run_speed, 6.5);
    }
}
