//! Game state module - the aggregate the engine mutates every tick
//!
//! Holds the occupancy board, the current and next shapes, score/level/row
//! counters, gravity speed and timestamps, pause and game-over flags and the
//! per-kind spawn statistics. The engine is the only writer; everything else
//! reads through the accessors or a [`GameSnapshot`].
//!
//! A new game is a new `GameState` value: nothing here resets itself.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::shape::Shape;
use crate::snapshot::{GameSnapshot, ShapeSnapshot};
use crate::types::{ShapeKind, INITIAL_SPEED_MS};

/// Upper bound on events produced by a single tick.
pub const MAX_TICK_EVENTS: usize = 8;

/// Something observable that happened during the last tick.
///
/// Audio and visual cue layers react to these instead of diffing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    ShapeSpawned(ShapeKind),
    ShapeLocked,
    RowsCleared { rows: u32, score: u32 },
    LevelUp { level: u32, speed_ms: u64 },
    Paused(bool),
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    /// `None` while waiting to spawn.
    pub(crate) current: Option<Shape>,
    pub(crate) next: Shape,
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) completed_rows: u32,
    /// Milliseconds between automatic descents.
    pub(crate) speed_ms: u64,
    pub(crate) last_move_ms: u64,
    /// `None` until the first lock; the first spawn does not wait.
    pub(crate) last_lock_ms: Option<u64>,
    pub(crate) game_over: bool,
    pub(crate) paused: bool,
    pub(crate) statistics: [u32; 7],
    pub(crate) events: ArrayVec<GameEvent, MAX_TICK_EVENTS>,
}

impl GameState {
    /// A fresh game: empty board, nothing falling, `next` queued.
    pub fn new(next: Shape) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next,
            score: 0,
            level: 0,
            completed_rows: 0,
            speed_ms: INITIAL_SPEED_MS,
            last_move_ms: 0,
            last_lock_ms: None,
            game_over: false,
            paused: false,
            statistics: [0; 7],
            events: ArrayVec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions before play.
    ///
    /// Use [`Board::fill_static`] so pre-filled blocks never alias a shape.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_shape(&self) -> Option<&Shape> {
        self.current.as_ref()
    }

    pub fn next_shape(&self) -> &Shape {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn completed_rows(&self) -> u32 {
        self.completed_rows
    }

    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    pub fn last_move_ms(&self) -> u64 {
        self.last_move_ms
    }

    pub fn last_lock_ms(&self) -> Option<u64> {
        self.last_lock_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// How many shapes of `kind` have spawned this game.
    pub fn shape_count(&self, kind: ShapeKind) -> u32 {
        self.statistics[kind.index()]
    }

    /// Spawn counts in [`ShapeKind::ALL`] order.
    pub fn statistics(&self) -> &[u32; 7] {
        &self.statistics
    }

    /// Events produced by the most recent tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take the events of the most recent tick.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        // Bounded per tick; the engine clears the list at the start of a tick.
        let _ = self.events.try_push(event);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_kind_grid(&mut out.board);
        out.current = self.current.as_ref().map(ShapeSnapshot::from);
        out.next = ShapeSnapshot::from(&self.next);
        out.score = self.score;
        out.level = self.level;
        out.completed_rows = self.completed_rows;
        out.speed_ms = self.speed_ms;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.statistics = self.statistics;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
