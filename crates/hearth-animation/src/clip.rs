//! Clip descriptions and the TOML clip manifest

use crate::registry::AnimationRegistry;
use hearth_core::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One playable clip bound to the actor's skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipInfo {
    /// Unique name, e.g. "Idle"
    pub name: String,
    /// Length in seconds
    pub duration: f64,
    /// Looping clips wrap; one-shots stop at the end and report `Finished`
    #[serde(default = "default_looping")]
    pub looping: bool,
}

fn default_looping() -> bool {
    true
}

impl ClipInfo {
    pub fn looping(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            looping: true,
        }
    }

    pub fn one_shot(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            looping: false,
        }
    }
}

/// The clip list an asset loader hands over, as TOML:
///
/// ```toml
/// exclude = ["TPose"]
///
/// [[clips]]
/// name = "Idle"
/// duration = 2.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipManifest {
    /// Clip names that are never registered (bind poses and the like)
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub clips: Vec<ClipInfo>,
}

fn default_exclude() -> Vec<String> {
    vec!["TPose".to_string()]
}

impl Default for ClipManifest {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            clips: Vec::new(),
        }
    }
}

impl ClipManifest {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Register every non-excluded clip. Returns how many were registered.
    pub fn register_into(&self, registry: &mut AnimationRegistry) -> usize {
        let mut count = 0;
        for clip in &self.clips {
            if self.exclude.iter().any(|name| name == &clip.name) {
                log::debug!("skipping excluded clip '{}'", clip.name);
                continue;
            }
            registry.register(clip.clone());
            count += 1;
        }
        count
    }
}
