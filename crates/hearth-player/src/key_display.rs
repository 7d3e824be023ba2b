//! On-screen key display fed by input events

use hearth_runtime::GameEvent;

/// Keys currently shown to the player, in press order.
#[derive(Debug, Default)]
pub struct KeyDisplay {
    shown: Vec<String>,
    running: bool,
}

impl KeyDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::KeyDown(key) => {
                    if !self.shown.contains(key) {
                        self.shown.push(key.clone());
                    }
                }
                GameEvent::KeyUp(key) => self.shown.retain(|k| k != key),
                GameEvent::RunToggled(on) => self.running = *on,
            }
        }
    }

    /// e.g. `[W] [SHIFT] run`
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = self
            .shown
            .iter()
            .map(|k| format!("[{}]", k.to_uppercase()))
            .collect();
        if self.running {
            parts.push("run".into());
        }
        parts.join(" ")
    }
}
