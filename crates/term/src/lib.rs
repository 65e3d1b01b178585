//! Terminal front-end: framebuffer rendering and audio cues.
//!
//! Renders `core::GameSnapshot`s into a framebuffer that can be flushed to a
//! terminal backend. Nothing here mutates game state.
//!
//! - Keep `core` deterministic and testable
//! - Draw with 2 characters per board cell for a squarer look
//! - Stand in for sound with the terminal bell

pub mod config;
pub mod cue;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use config::RunConfig;
pub use cue::{cue_for, Cue, CuePlayer};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{kind_color, GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
