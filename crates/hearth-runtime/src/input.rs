//! Input state management

use crate::event::GameEvent;
use crate::event_bus::EventBus;
use std::collections::HashMap;
use winit::keyboard::{Key, NamedKey};

/// Key that flips run mode unless rebound
pub const DEFAULT_RUN_KEY: &str = "shift";

/// Tracks which keys are held plus the run-mode toggle.
///
/// Keys are lowercase identifiers created lazily on first event. The run key
/// is edge-triggered: it flips run mode once per press and is never recorded
/// as a held key itself.
#[derive(Debug)]
pub struct InputState {
    /// Key identifier -> pressed
    keys: HashMap<String, bool>,
    /// Identifier of the run toggle key
    run_key: String,
    /// Current run mode
    run_toggled: bool,
    /// Whether the run key is physically down (edge detection)
    run_key_down: bool,
    /// Outgoing events for the key display overlay
    events: EventBus,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashMap::new(),
            run_key: DEFAULT_RUN_KEY.to_string(),
            run_toggled: false,
            run_key_down: false,
            events: EventBus::new(),
        }
    }

    /// Rebind the run toggle
    pub fn set_run_key(&mut self, key: &str) {
        self.run_key = normalize(key);
        self.run_key_down = false;
    }

    pub fn run_key(&self) -> &str {
        &self.run_key
    }

    /// Process a key press event
    pub fn on_key_down(&mut self, key: &str) {
        let key = normalize(key);
        self.events.push(GameEvent::KeyDown(key.clone()));

        if key == self.run_key {
            // Auto-repeat delivers more downs without an up in between
            if !self.run_key_down {
                self.run_key_down = true;
                self.run_toggled = !self.run_toggled;
                log::debug!("run mode {}", if self.run_toggled { "on" } else { "off" });
                self.events.push(GameEvent::RunToggled(self.run_toggled));
            }
            return;
        }

        self.keys.insert(key, true);
    }

    /// Process a key release event
    pub fn on_key_up(&mut self, key: &str) {
        let key = normalize(key);
        self.events.push(GameEvent::KeyUp(key.clone()));

        if key == self.run_key {
            self.run_key_down = false;
            return;
        }

        self.keys.insert(key, false);
    }

    /// Release every held key, e.g. when the window loses focus.
    /// Run mode is a toggle and survives.
    pub fn release_all(&mut self) {
        let held: Vec<String> = self
            .keys
            .iter()
            .filter(|(_, pressed)| **pressed)
            .map(|(key, _)| key.clone())
            .collect();
        for key in held {
            self.on_key_up(&key);
        }
        self.run_key_down = false;
    }

    // --- Query methods ---

    /// Is a key currently held? Unseen keys report false.
    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(&normalize(key)).copied().unwrap_or(false)
    }

    pub fn is_run_toggled(&self) -> bool {
        self.run_toggled
    }

    /// Number of keys currently held
    pub fn pressed_count(&self) -> usize {
        self.keys.values().filter(|pressed| **pressed).count()
    }

    /// Take the events produced since the last drain. Undrained events are
    /// capped at `MAX_PENDING_EVENTS`, oldest dropped first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }
}

fn normalize(key: &str) -> String {
    key.to_lowercase()
}

/// Map a winit logical key to the identifier `InputState` expects.
///
/// Characters are lowercased so Shift+W and W land on the same key.
pub fn key_identifier(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.as_str().to_lowercase()),
        Key::Named(NamedKey::Shift) => Some("shift".to_string()),
        Key::Named(NamedKey::Space) => Some("space".to_string()),
        Key::Named(named) => Some(format!("{named:?}").to_lowercase()),
        _ => None,
    }
}
