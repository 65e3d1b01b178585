//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the authoritative game: the occupancy board, shape
//! geometry, the shape factory, scoring and the per-tick engine. It has no
//! dependency on rendering, audio or terminal I/O; those layers read
//! [`GameSnapshot`]s and [`GameEvent`]s and write player intents into
//! [`Controls`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x22 occupancy grid with row detection and clearing
//! - [`shape`]: rotation tables and the immutable [`Shape`] value
//! - [`factory`]: uniform random (and scripted) shape sources
//! - [`rng`]: small seeded LCG
//! - [`scoring`]: batch scores, level thresholds and speed-up
//! - [`controls`]: single-slot input handoff
//! - [`clock`]: millisecond time sources
//! - [`game_state`]: the aggregate mutated by the engine
//! - [`engine`]: the tick state machine
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::{Engine, ManualClock, SequenceShapeFactory};
//! use falling_blocks_core::types::{Movement, ShapeKind};
//!
//! let clock = ManualClock::new(0);
//! let mut engine = Engine::new(SequenceShapeFactory::repeat(ShapeKind::T), clock.clone());
//! let controls = engine.controls();
//!
//! let mut game = engine.new_game();
//! engine.update(&mut game); // spawns the first shape
//!
//! controls.request_movement(Movement::Left);
//! engine.update(&mut game);
//!
//! clock.advance(game.speed_ms());
//! engine.update(&mut game); // gravity
//!
//! assert!(game.current_shape().is_some());
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The engine never sleeps. Call [`Engine::update`] every tick (about 60 Hz);
//! timestamps come from the engine's [`Clock`].

pub mod board;
pub mod clock;
pub mod controls;
pub mod engine;
pub mod factory;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Occupant};
pub use clock::{Clock, ManualClock, SystemClock};
pub use controls::Controls;
pub use engine::{can_shape_move, check_shape_is_locked, clear_complete_rows, Engine};
pub use factory::{RandomShapeFactory, SequenceShapeFactory, ShapeFactory};
pub use game_state::{GameEvent, GameState};
pub use rng::SimpleRng;
pub use scoring::{accelerate, batch_score};
pub use shape::{cells_for, Block, Shape, ShapeId};
pub use snapshot::{GameSnapshot, ShapeSnapshot};
