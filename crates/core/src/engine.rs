//! Engine module - the per-tick state machine
//!
//! `update` is called at a fixed cadence by an external scheduler. Each call
//! advances the game by at most one logical step:
//!
//! 1. Game over: no-op.
//! 2. No current shape: wait until `speed` ms have passed since the last lock,
//!    then clear complete rows (score, level, speed) and spawn the next shape.
//!    A spawn that cannot descend locks right away, possibly ending the game.
//! 3. A pending movement is applied. DOWN always moves (a live shape can always
//!    descend, otherwise it would have locked); LEFT/RIGHT/ROTATE are applied
//!    only when [`can_shape_move`] allows it and are dropped otherwise.
//! 4. Every applied movement is followed by a lock check; a lock ends the tick.
//! 5. Gravity: once `speed` ms have passed since the last automatic move, the
//!    shape descends by one.
//!
//! Movements follow validate-then-commit: a candidate shape is built from the
//! current one, checked, and only then written to the board and adopted.

use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::clock::{Clock, SystemClock};
use crate::controls::Controls;
use crate::factory::{RandomShapeFactory, ShapeFactory};
use crate::game_state::{GameEvent, GameState};
use crate::scoring::apply_batch;
use crate::types::{Movement, GAME_OVER_ROW};

/// Whether the current shape could be transformed by `movement`.
///
/// Every candidate cell must be inside the board and either empty or owned by
/// the current shape itself. Returns false when no shape is falling.
pub fn can_shape_move(state: &GameState, movement: Movement) -> bool {
    let Some(current) = state.current.as_ref() else {
        return false;
    };

    let candidate = current.transformed(movement);
    candidate
        .blocks()
        .iter()
        .all(|block| match state.board.get(block.pos) {
            None => false,
            Some(None) => true,
            Some(Some(occupant)) => occupant.shape == current.id(),
        })
}

/// Lock the current shape if it cannot descend any further.
///
/// Returns true when the shape is no longer falling: either it was frozen into
/// the board (current shape cleared, lock time recorded) or the lock left a
/// block on the game-over row, in which case the shape stays where it is and
/// the game ends.
pub fn check_shape_is_locked(state: &mut GameState, now_ms: u64) -> bool {
    if state.current.is_none() || can_shape_move(state, Movement::Down) {
        return false;
    }

    if state.board.has_block_in_row(GAME_OVER_ROW) {
        state.game_over = true;
        state.push_event(GameEvent::GameOver);
        info!(
            score = state.score,
            level = state.level,
            rows = state.completed_rows,
            "game over"
        );
    } else {
        if let Some(shape) = state.current.take() {
            debug!(
                kind = shape.kind().as_str(),
                x = shape.origin().x,
                y = shape.origin().y,
                "shape locked"
            );
        }
        state.last_lock_ms = Some(now_ms);
        state.push_event(GameEvent::ShapeLocked);
    }

    true
}

/// Clear every complete row as one batch and update score, level and speed.
///
/// Returns the number of rows cleared.
pub fn clear_complete_rows(state: &mut GameState) -> usize {
    let rows = state.board.complete_rows();
    if rows.is_empty() {
        return 0;
    }

    state.board.clear_rows(&rows);

    let before = state.score;
    let result = apply_batch(
        rows.len(),
        state.score,
        state.completed_rows,
        state.level,
        state.speed_ms,
    );
    state.score = result.score;
    state.completed_rows = result.completed_rows;
    state.level = result.level;
    state.speed_ms = result.speed_ms;

    let gained = result.score - before;
    info!(rows = rows.len(), score = gained, total = state.score, "rows cleared");
    state.push_event(GameEvent::RowsCleared {
        rows: rows.len() as u32,
        score: gained,
    });

    if result.leveled_up {
        info!(level = state.level, speed_ms = state.speed_ms, "level up");
        state.push_event(GameEvent::LevelUp {
            level: state.level,
            speed_ms: state.speed_ms,
        });
    }

    rows.len()
}

/// The tick orchestrator.
///
/// Owns the shape factory, the clock and the input handoff. Game state is
/// passed in on every call so a new game can replace it wholesale.
pub struct Engine<F = RandomShapeFactory, C = SystemClock> {
    factory: F,
    clock: C,
    controls: Arc<Controls>,
}

impl Engine {
    /// Random shapes and wall-clock time.
    pub fn with_seed(seed: u32) -> Self {
        Engine::new(RandomShapeFactory::new(seed), SystemClock::new())
    }
}

impl<F: ShapeFactory, C: Clock> Engine<F, C> {
    pub fn new(factory: F, clock: C) -> Self {
        Self::with_controls(factory, clock, Arc::new(Controls::new()))
    }

    pub fn with_controls(factory: F, clock: C, controls: Arc<Controls>) -> Self {
        Self {
            factory,
            clock,
            controls,
        }
    }

    /// Handle for input producers.
    pub fn controls(&self) -> Arc<Controls> {
        Arc::clone(&self.controls)
    }

    /// A fresh game ready to spawn on its first tick.
    pub fn new_game(&mut self) -> GameState {
        let state = GameState::new(self.factory.create());
        info!(next = state.next.kind().as_str(), "new game");
        state
    }

    /// Advance the game by one tick.
    pub fn update(&mut self, state: &mut GameState) {
        // Both slots are consumed every tick, whatever happens next.
        let movement = self.controls.take_movement();
        let pause = self.controls.take_pause();

        if state.game_over {
            return;
        }

        state.events.clear();

        if pause {
            state.paused = !state.paused;
            info!(paused = state.paused, "pause toggled");
            state.push_event(GameEvent::Paused(state.paused));
        }

        if state.paused {
            return;
        }

        let now = self.clock.now_ms();

        if !self.handle_next_shape(state, now) {
            return;
        }

        if let Some(movement) = movement {
            if !handle_movement(state, movement, now) {
                return;
            }
        }

        if now.saturating_sub(state.last_move_ms) >= state.speed_ms {
            trace!(now, "gravity");
            move_shape(state, Movement::Down, now);
            state.last_move_ms = now;
        }
    }

    /// Make sure a shape is falling. Returns false if the tick should stop.
    fn handle_next_shape(&mut self, state: &mut GameState, now: u64) -> bool {
        if state.current.is_some() {
            return true;
        }

        let ready = match state.last_lock_ms {
            None => true,
            Some(locked_at) => now.saturating_sub(locked_at) >= state.speed_ms,
        };
        if !ready {
            return false;
        }

        clear_complete_rows(state);
        self.spawn(state, now);

        !check_shape_is_locked(state, now)
    }

    fn spawn(&mut self, state: &mut GameState, now: u64) {
        let next = self.factory.create();
        let shape = std::mem::replace(&mut state.next, next);

        state.board.place_shape(&shape);
        state.statistics[shape.kind().index()] += 1;
        state.last_move_ms = now;
        state.current = Some(shape);

        debug!(
            kind = shape.kind().as_str(),
            next = state.next.kind().as_str(),
            "shape spawned"
        );
        state.push_event(GameEvent::ShapeSpawned(shape.kind()));
    }
}

/// Apply a requested movement. Returns false if the shape locked.
fn handle_movement(state: &mut GameState, movement: Movement, now: u64) -> bool {
    if movement == Movement::Down || can_shape_move(state, movement) {
        return move_shape(state, movement, now);
    }

    debug!(movement = movement.as_str(), "movement rejected");
    true
}

/// Commit the candidate for `movement`. Returns false if the shape locked.
fn move_shape(state: &mut GameState, movement: Movement, now: u64) -> bool {
    let Some(current) = state.current else {
        return false;
    };

    let candidate = current.transformed(movement);
    state.board.remove_shape(&current);
    state.board.place_shape(&candidate);
    state.current = Some(candidate);

    !check_shape_is_locked(state, now)
}
