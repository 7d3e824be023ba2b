//! Built-in clip set and controller wiring

use anyhow::{Context, Result};
use hearth_animation::{AnimationRegistry, ClipInfo, ClipManifest};
use hearth_character::{Actor, CharacterConfig, CharacterController, MeshHandle};
use std::path::Path;

/// Clip set of the stock soldier character
pub fn default_manifest() -> ClipManifest {
    ClipManifest {
        clips: vec![
            ClipInfo::looping("Idle", 2.0),
            ClipInfo::looping("Walk", 1.0),
            ClipInfo::looping("Run", 0.7),
            ClipInfo::one_shot("Jump", 0.8),
            ClipInfo::one_shot("Dance", 2.5),
        ],
        ..ClipManifest::default()
    }
}

/// Load the config and clip manifest (falling back to defaults) and build a controller.
pub fn build_controller(
    config_path: Option<&Path>,
    clips_path: Option<&Path>,
) -> Result<CharacterController> {
    let config = match config_path {
        Some(path) => CharacterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CharacterConfig::default(),
    };

    let manifest = match clips_path {
        Some(path) => ClipManifest::load(path)
            .with_context(|| format!("Failed to load clip manifest {}", path.display()))?,
        None => default_manifest(),
    };

    let mut registry = AnimationRegistry::new(config.clips.idle.clone());
    let count = manifest.register_into(&mut registry);
    log::info!("Registered {} animation clips", count);

    let actor = Actor::new(MeshHandle::new("Soldier"));
    CharacterController::new(actor, registry, config).context("Failed to set up character")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_build() {
        let ctrl = build_controller(None, None).unwrap();
        assert_eq!(ctrl.registry().clip_count(), 5);
        assert_eq!(ctrl.active_clip(), Some("Idle"));
    }

    #[test]
    fn bundled_data_files_load() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
        let ctrl = build_controller(
            Some(&data.join("character.toml")),
            Some(&data.join("clips.toml")),
        )
        .unwrap();
        assert_eq!(ctrl.registry().clip_count(), 5);
        assert!(!ctrl.registry().has_clip("TPose"));
    }

    #[test]
    fn manifest_without_run_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[clips]]
name = "Idle"
duration = 2.0

[[clips]]
name = "Walk"
duration = 1.0
"#
        )
        .unwrap();
        let err = build_controller(None, Some(file.path())).err().unwrap();
        assert!(format!("{err:#}").contains("Run"));
    }
}
