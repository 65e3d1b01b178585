use crate::shape::Shape;
use crate::types::{Point, Rotation, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_SPEED_MS};

/// Read-only view of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeSnapshot {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub origin: Point,
    pub cells: [Point; 4],
}

impl From<&Shape> for ShapeSnapshot {
    fn from(value: &Shape) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            origin: value.origin(),
            cells: value.blocks().map(|b| b.pos),
        }
    }
}

impl From<Shape> for ShapeSnapshot {
    fn from(value: Shape) -> Self {
        Self::from(&value)
    }
}

pub type KindGrid = [[Option<ShapeKind>; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Immutable copy of everything renderers and cue layers may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Occupancy by kind, including the falling shape's cells.
    pub board: KindGrid,
    pub current: Option<ShapeSnapshot>,
    pub next: ShapeSnapshot,
    pub score: u32,
    pub level: u32,
    pub completed_rows: u32,
    pub speed_ms: u64,
    pub paused: bool,
    pub game_over: bool,
    pub statistics: [u32; 7],
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: ShapeSnapshot {
                kind: ShapeKind::I,
                rotation: Rotation::North,
                origin: Point::default(),
                cells: [Point::default(); 4],
            },
            score: 0,
            level: 0,
            completed_rows: 0,
            speed_ms: INITIAL_SPEED_MS,
            paused: false,
            game_over: false,
            statistics: [0; 7],
        }
    }
}
