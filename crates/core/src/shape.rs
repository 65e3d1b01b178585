//! Shape module - rotation tables and the immutable Shape value
//!
//! A shape is placed by the top-left corner of its rotation box (`origin`);
//! each rotation state lists the four cell offsets inside that box. Rotating
//! clockwise advances the rotation state and recomputes the cells from the same
//! origin. There are no wall kicks: a rotation whose cells collide is rejected
//! by the caller, never corrected.

use crate::types::{Movement, Point, Rotation, ShapeKind, SPAWN_ORIGIN};

/// Offset of a single cell relative to the shape origin
pub type CellOffset = (i8, i8);

/// Four cell offsets for one rotation state
pub type ShapeCells = [CellOffset; 4];

/// Instance id of a spawned shape.
///
/// Carried unchanged by every transformed copy of the shape and stamped on the
/// board cells it occupies, so collision checks can tell "my own cell" from a
/// foreign one by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl ShapeId {
    /// Owner of blocks that never belonged to a falling shape (scenario setup).
    pub const STATIC: ShapeId = ShapeId(0);
}

/// Get the cell offsets for a shape kind and rotation
pub fn cells_for(kind: ShapeKind, rotation: Rotation) -> ShapeCells {
    match kind {
        ShapeKind::I => i_cells(rotation),
        ShapeKind::O => o_cells(rotation),
        ShapeKind::T => t_cells(rotation),
        ShapeKind::S => s_cells(rotation),
        ShapeKind::Z => z_cells(rotation),
        ShapeKind::J => j_cells(rotation),
        ShapeKind::L => l_cells(rotation),
    }
}

fn i_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

// Same cells in every state.
fn o_cells(_rotation: Rotation) -> ShapeCells {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn t_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn s_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn l_cells(rotation: Rotation) -> ShapeCells {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// One occupied cell of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub pos: Point,
    pub kind: ShapeKind,
    /// Shape the block belongs to. Used for self-overlap checks only.
    pub shape: ShapeId,
}

/// A piece instance: kind, rotation, origin and the four blocks it occupies.
///
/// Shapes are values. [`Shape::transformed`] returns a new candidate and never
/// touches `self`; the engine commits a candidate by replacing the current
/// shape with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    rotation: Rotation,
    origin: Point,
    blocks: [Block; 4],
}

impl Shape {
    /// Build a shape at an arbitrary origin and rotation.
    pub fn new(id: ShapeId, kind: ShapeKind, rotation: Rotation, origin: Point) -> Self {
        let cells = cells_for(kind, rotation);
        let blocks = cells.map(|(dx, dy)| Block {
            pos: origin.offset(dx, dy),
            kind,
            shape: id,
        });

        Self {
            id,
            kind,
            rotation,
            origin,
            blocks,
        }
    }

    /// A shape in rotation zero at the spawn origin.
    pub fn spawn(id: ShapeId, kind: ShapeKind) -> Self {
        Self::new(id, kind, Rotation::North, SPAWN_ORIGIN)
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.blocks.iter().map(|b| b.pos)
    }

    /// Candidate shape after applying `movement`.
    pub fn transformed(&self, movement: Movement) -> Shape {
        match movement {
            Movement::RotateCw => {
                Shape::new(self.id, self.kind, self.rotation.rotate_cw(), self.origin)
            }
            _ => Shape::new(
                self.id,
                self.kind,
                self.rotation,
                movement.translate(self.origin),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position() {
        let shape = Shape::spawn(ShapeId(1), ShapeKind::I);
        assert_eq!(shape.rotation(), Rotation::North);
        assert_eq!(shape.origin(), SPAWN_ORIGIN);
        let positions: Vec<Point> = shape.positions().collect();
        assert_eq!(
            positions,
            vec![
                Point::new(3, 1),
                Point::new(4, 1),
                Point::new(5, 1),
                Point::new(6, 1)
            ]
        );
    }

    #[test]
    fn test_blocks_carry_shape_id_and_kind() {
        let shape = Shape::spawn(ShapeId(9), ShapeKind::S);
        for block in shape.blocks() {
            assert_eq!(block.shape, ShapeId(9));
            assert_eq!(block.kind, ShapeKind::S);
        }
    }

    #[test]
    fn test_translations_move_every_block() {
        let shape = Shape::spawn(ShapeId(1), ShapeKind::T);
        for movement in [Movement::Down, Movement::Left, Movement::Right] {
            let moved = shape.transformed(movement);
            for (before, after) in shape.blocks().iter().zip(moved.blocks()) {
                assert_eq!(after.pos, movement.translate(before.pos));
            }
            assert_eq!(moved.id(), shape.id());
            assert_eq!(moved.rotation(), shape.rotation());
        }
    }

    #[test]
    fn test_transform_leaves_original_untouched() {
        let shape = Shape::spawn(ShapeId(1), ShapeKind::L);
        let copy = shape;
        let _ = shape.transformed(Movement::RotateCw);
        assert_eq!(shape, copy);
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        for kind in ShapeKind::ALL {
            let start = Shape::new(ShapeId(1), kind, Rotation::North, Point::new(4, 5));
            let mut shape = start;
            for _ in 0..4 {
                shape = shape.transformed(Movement::RotateCw);
            }
            assert_eq!(shape, start, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_rotation_keeps_origin() {
        let shape = Shape::spawn(ShapeId(1), ShapeKind::J);
        let rotated = shape.transformed(Movement::RotateCw);
        assert_eq!(rotated.origin(), shape.origin());
        assert_eq!(rotated.rotation(), Rotation::East);
    }

    #[test]
    fn test_o_rotation_is_identity_on_cells() {
        let shape = Shape::spawn(ShapeId(1), ShapeKind::O);
        let rotated = shape.transformed(Movement::RotateCw);
        let a: Vec<Point> = shape.positions().collect();
        let b: Vec<Point> = rotated.positions().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_table_has_distinct_cells_in_box() {
        for kind in ShapeKind::ALL {
            for rotation in [
                Rotation::North,
                Rotation::East,
                Rotation::South,
                Rotation::West,
            ] {
                let cells = cells_for(kind, rotation);
                for (i, a) in cells.iter().enumerate() {
                    assert!((0..4).contains(&a.0) && (0..4).contains(&a.1));
                    for b in &cells[i + 1..] {
                        assert_ne!(a, b, "{:?} {:?}", kind, rotation);
                    }
                }
            }
        }
    }
}
