//! Audio cues for the terminal: game events mapped to the bell.

use crate::core::GameEvent;

/// Cue played for an event, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    ShapeLocked,
    GameOver,
}

/// Map an engine event to the cue it triggers.
pub fn cue_for(event: &GameEvent) -> Option<Cue> {
    match event {
        GameEvent::ShapeLocked => Some(Cue::ShapeLocked),
        GameEvent::GameOver => Some(Cue::GameOver),
        _ => None,
    }
}

/// Decide whether a tick's events should ring the bell.
#[derive(Debug, Clone, Copy)]
pub struct CuePlayer {
    enabled: bool,
}

impl CuePlayer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// At most one bell per tick, however many cues fired.
    pub fn should_ring<'a>(&self, events: impl IntoIterator<Item = &'a GameEvent>) -> bool {
        self.enabled && events.into_iter().any(|e| cue_for(e).is_some())
    }
}
