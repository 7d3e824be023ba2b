//! Event bus for broadcasting runtime events

use crate::event::GameEvent;
use std::collections::VecDeque;

/// Events kept before the oldest is dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// A bounded event queue that producers push to and consumers drain.
///
/// Draining is optional: once `MAX_PENDING_EVENTS` are queued, each push
/// drops the oldest event.
#[derive(Debug)]
pub struct EventBus<E = GameEvent> {
    events: VecDeque<E>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Queue an event for the next drain
    pub fn push(&mut self, event: E) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Hand over everything queued so far, oldest first
    pub fn drain(&mut self) -> Vec<E> {
        self.events.drain(..).collect()
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());

        bus.push(GameEvent::KeyDown("w".into()));
        bus.push(GameEvent::KeyUp("w".into()));

        assert_eq!(bus.len(), 2);

        let events = bus.drain();
        assert_eq!(
            events,
            vec![GameEvent::KeyDown("w".into()), GameEvent::KeyUp("w".into())]
        );
        assert!(bus.is_empty());
    }

    #[test]
    fn test_drain_clears() {
        let mut bus = EventBus::new();
        bus.push(GameEvent::RunToggled(true));

        let _ = bus.drain();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_undrained_bus_is_bounded() {
        let mut bus: EventBus<u32> = EventBus::new();
        for i in 0..(MAX_PENDING_EVENTS as u32 + 10) {
            bus.push(i);
        }
        assert_eq!(bus.len(), MAX_PENDING_EVENTS);

        let events = bus.drain();
        assert_eq!(events[0], 10);
        assert_eq!(events.last(), Some(&(MAX_PENDING_EVENTS as u32 + 9)));
    }
}
