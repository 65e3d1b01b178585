//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so the engine, the
//! input mapping and the terminal front-end can share them freely.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21)
//! - **Spawn buffer**: rows 0 and 1 are hidden above the visible board
//! - **Spawn origin**: (3, 0) for every shape kind
//!
//! # Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROWS_PER_LEVEL` | 10 | Completed rows needed per level |
//! | `INITIAL_SPEED_MS` | 1000 | Gravity interval at level 0 |
//! | `LINE_SCORES` | 40/100/300/1200 | Points per batch, times (level + 1) |
//! | `TICK_MS` | 16 | Scheduler cadence (~60 Hz) |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{Movement, Point, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(Movement::Down.translate(Point::new(4, 2)), Point::new(4, 3));
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells, spawn buffer included (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Number of hidden rows above the visible board
pub const SPAWN_BUFFER_ROWS: u8 = 2;

/// A lock that leaves a block on this row ends the game
pub const GAME_OVER_ROW: u8 = SPAWN_BUFFER_ROWS;

/// Rows to complete per level
pub const ROWS_PER_LEVEL: u32 = 10;

/// Milliseconds between automatic descents at level 0
pub const INITIAL_SPEED_MS: u64 = 1000;

/// Fixed scheduler interval in milliseconds (16ms ≈ 60 Hz)
pub const TICK_MS: u64 = 16;

/// Origin of every freshly spawned shape (top-left of its rotation box)
pub const SPAWN_ORIGIN: Point = Point::new(3, 0);

/// Score for clearing N rows in one batch at level 0
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A board coordinate. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The seven shape kinds
///
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Every kind, in statistics order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Position of this kind in [`ShapeKind::ALL`].
    pub const fn index(self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// Rotation states, advanced only clockwise by the engine
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use falling_blocks_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// The closed set of transforms a shape can undergo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Down,
    Left,
    Right,
    RotateCw,
}

impl Movement {
    pub const ALL: [Movement; 4] = [
        Movement::Down,
        Movement::Left,
        Movement::Right,
        Movement::RotateCw,
    ];

    /// Apply the point transform of this movement.
    ///
    /// Rotation is a whole-shape transform (it needs the shape's origin and
    /// rotation table), so a single point is returned unchanged.
    pub const fn translate(self, p: Point) -> Point {
        match self {
            Movement::Down => p.offset(0, 1),
            Movement::Left => p.offset(-1, 0),
            Movement::Right => p.offset(1, 0),
            Movement::RotateCw => p,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" => Some(Movement::Down),
            "left" => Some(Movement::Left),
            "right" => Some(Movement::Right),
            "rotatecw" | "rotate" => Some(Movement::RotateCw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::Down => "down",
            Movement::Left => "left",
            Movement::Right => "right",
            Movement::RotateCw => "rotateCw",
        }
    }
}

/// Player intents produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a movement of the current shape
    Move(Movement),
    /// Toggle pause
    Pause,
    /// Replace the running game with a fresh one
    NewGame,
}
