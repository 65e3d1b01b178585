//! Single-slot handoff between the input producer and the tick consumer.
//!
//! Each slot holds at most one pending request. The producer overwrites it
//! (the latest request before a tick wins) and the engine reads-and-clears it
//! once per tick. This is not a queue: requests made between two ticks replace
//! each other.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::types::{GameAction, Movement};

const NO_MOVEMENT: u8 = 0;

fn encode(movement: Movement) -> u8 {
    match movement {
        Movement::Down => 1,
        Movement::Left => 2,
        Movement::Right => 3,
        Movement::RotateCw => 4,
    }
}

fn decode(raw: u8) -> Option<Movement> {
    match raw {
        1 => Some(Movement::Down),
        2 => Some(Movement::Left),
        3 => Some(Movement::Right),
        4 => Some(Movement::RotateCw),
        _ => None,
    }
}

/// Pending player requests. Share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct Controls {
    movement: AtomicU8,
    pause: AtomicBool,
    new_game: AtomicBool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_movement(&self, movement: Movement) {
        self.movement.store(encode(movement), Ordering::Release);
    }

    /// Read and clear the pending movement.
    pub fn take_movement(&self) -> Option<Movement> {
        decode(self.movement.swap(NO_MOVEMENT, Ordering::AcqRel))
    }

    pub fn request_pause(&self) {
        self.pause.store(true, Ordering::Release);
    }

    /// Read and clear the pending pause toggle.
    pub fn take_pause(&self) -> bool {
        self.pause.swap(false, Ordering::AcqRel)
    }

    pub fn request_new_game(&self) {
        self.new_game.store(true, Ordering::Release);
    }

    /// Read and clear the pending new-game request.
    pub fn take_new_game(&self) -> bool {
        self.new_game.swap(false, Ordering::AcqRel)
    }

    /// Route a decoded player action to its slot.
    pub fn submit(&self, action: GameAction) {
        match action {
            GameAction::Move(movement) => self.request_movement(movement),
            GameAction::Pause => self.request_pause(),
            GameAction::NewGame => self.request_new_game(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_take_clears_slot() {
        let controls = Controls::new();
        controls.request_movement(Movement::Left);
        assert_eq!(controls.take_movement(), Some(Movement::Left));
        assert_eq!(controls.take_movement(), None);
    }

    #[test]
    fn test_latest_movement_wins() {
        let controls = Controls::new();
        controls.request_movement(Movement::Left);
        controls.request_movement(Movement::RotateCw);
        controls.request_movement(Movement::Right);
        assert_eq!(controls.take_movement(), Some(Movement::Right));
    }

    #[test]
    fn test_every_movement_survives_the_slot() {
        let controls = Controls::new();
        for m in Movement::ALL {
            controls.request_movement(m);
            assert_eq!(controls.take_movement(), Some(m));
        }
    }

    #[test]
    fn test_pause_and_new_game_flags() {
        let controls = Controls::new();
        assert!(!controls.take_pause());
        controls.submit(GameAction::Pause);
        controls.submit(GameAction::Pause);
        assert!(controls.take_pause());
        assert!(!controls.take_pause());

        controls.submit(GameAction::NewGame);
        assert!(controls.take_new_game());
        assert!(!controls.take_new_game());
    }

    #[test]
    fn test_handoff_across_threads() {
        let controls = Arc::new(Controls::new());
        let producer = Arc::clone(&controls);
        thread::spawn(move || producer.submit(GameAction::Move(Movement::Down)))
            .join()
            .unwrap();
        assert_eq!(controls.take_movement(), Some(Movement::Down));
    }
}
