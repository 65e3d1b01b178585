//! Board module - the occupancy grid
//!
//! The board is a 10x22 grid where each cell is empty or occupied by exactly
//! one block. Uses a flat array indexed by coordinate, so a block's position
//! is always its cell index and can never disagree with it.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..21
//! (top to bottom). Rows 0 and 1 are the hidden spawn buffer.

use arrayvec::ArrayVec;

use crate::shape::{Block, Shape, ShapeId};
use crate::types::{Point, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_BUFFER_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// What occupies a cell: the display kind and the owning shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub kind: ShapeKind,
    pub shape: ShapeId,
}

/// A board cell. `None` is empty.
pub type Cell = Option<Occupant>;

/// Row indices, bounded by the board height.
pub type RowList = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// The occupancy grid - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from a point
    #[inline(always)]
    fn index(p: Point) -> Option<usize> {
        if Self::is_out_of_bounds(p) {
            return None;
        }
        Some((p.y as usize) * (BOARD_WIDTH as usize) + (p.x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    pub fn is_out_of_bounds(p: Point) -> bool {
        p.x < 0 || p.x >= BOARD_WIDTH as i8 || p.y < 0 || p.y >= BOARD_HEIGHT as i8
    }

    /// Get the cell at a point. Returns None if out of bounds.
    pub fn get(&self, p: Point) -> Option<Cell> {
        Self::index(p).map(|idx| self.cells[idx])
    }

    /// Occupant at a point, `None` for empty or out-of-bounds cells.
    pub fn occupant(&self, p: Point) -> Option<Occupant> {
        self.get(p).flatten()
    }

    /// The block at a point, with its position taken from the cell.
    pub fn block_at(&self, p: Point) -> Option<Block> {
        self.occupant(p).map(|o| Block {
            pos: p,
            kind: o.kind,
            shape: o.shape,
        })
    }

    /// Set the cell at a point. Returns false if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        match Self::index(p) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, p: Point) -> bool {
        matches!(self.get(p), Some(Some(_)))
    }

    /// Occupy a cell with a block that belongs to no falling shape.
    pub fn fill_static(&mut self, p: Point, kind: ShapeKind) -> bool {
        self.set(
            p,
            Some(Occupant {
                kind,
                shape: ShapeId::STATIC,
            }),
        )
    }

    /// Write every block of a shape into the grid.
    pub fn place_shape(&mut self, shape: &Shape) {
        for block in shape.blocks() {
            self.set(
                block.pos,
                Some(Occupant {
                    kind: block.kind,
                    shape: block.shape,
                }),
            );
        }
    }

    /// Empty the cells a shape occupies.
    ///
    /// Cells that currently belong to another shape are left alone.
    pub fn remove_shape(&mut self, shape: &Shape) {
        for block in shape.blocks() {
            if let Some(Some(o)) = self.get(block.pos) {
                if o.shape == block.shape {
                    self.set(block.pos, None);
                }
            }
        }
    }

    fn row_slice(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, y: u8) -> bool {
        if y >= BOARD_HEIGHT {
            return false;
        }
        self.row_slice(y as usize).iter().all(|cell| cell.is_some())
    }

    /// Check if any cell of a row is occupied
    pub fn has_block_in_row(&self, y: u8) -> bool {
        if y >= BOARD_HEIGHT {
            return false;
        }
        self.row_slice(y as usize).iter().any(|cell| cell.is_some())
    }

    /// Complete rows among the playable rows, in ascending order.
    pub fn complete_rows(&self) -> RowList {
        (SPAWN_BUFFER_ROWS..BOARD_HEIGHT)
            .filter(|&y| self.is_row_complete(y))
            .collect()
    }

    /// Empty a row and shift every block above it down by one cell.
    pub fn clear_row(&mut self, y: u8) {
        if y >= BOARD_HEIGHT {
            return;
        }

        let width = BOARD_WIDTH as usize;
        let y = y as usize;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);

        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Clear a batch of rows given in ascending order.
    ///
    /// Each clear only moves rows above it, so lower indices stay valid and a
    /// stack above N cleared rows ends up N cells lower.
    pub fn clear_rows(&mut self, rows: &[u8]) {
        debug_assert!(rows.windows(2).all(|w| w[0] < w[1]));
        for &y in rows {
            self.clear_row(y);
        }
    }

    /// Every block on the board, row by row.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|o| Block {
                pos: Point::new(
                    (idx % BOARD_WIDTH as usize) as i8,
                    (idx / BOARD_WIDTH as usize) as i8,
                ),
                kind: o.kind,
                shape: o.shape,
            })
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write a kind-only grid (used by snapshots).
    pub fn write_kind_grid(
        &self,
        out: &mut [[Option<ShapeKind>; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = self.cells[y * BOARD_WIDTH as usize + x].map(|o| o.kind);
            }
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(Point::new(0, 0)), Some(0));
        assert_eq!(Board::index(Point::new(9, 0)), Some(9));
        assert_eq!(Board::index(Point::new(0, 1)), Some(10));
        assert_eq!(Board::index(Point::new(9, 21)), Some(219));
        assert_eq!(Board::index(Point::new(-1, 0)), None);
        assert_eq!(Board::index(Point::new(10, 0)), None);
        assert_eq!(Board::index(Point::new(0, 22)), None);
    }

    #[test]
    fn test_block_position_matches_cell() {
        let mut board = Board::new();
        board.fill_static(Point::new(7, 13), ShapeKind::Z);

        let blocks: Vec<Block> = board.blocks().collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].pos, Point::new(7, 13));
        assert_eq!(board.block_at(Point::new(7, 13)), Some(blocks[0]));
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::new();
        for x in 0..10 {
            board.fill_static(Point::new(x, 21), ShapeKind::I);
        }
        board.fill_static(Point::new(2, 20), ShapeKind::T);
        board.fill_static(Point::new(5, 0), ShapeKind::O);

        board.clear_row(21);

        assert!(board.is_occupied(Point::new(2, 21)));
        assert!(board.is_occupied(Point::new(5, 1)));
        assert!(!board.has_block_in_row(0));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_complete_rows_skip_spawn_buffer() {
        let mut board = Board::new();
        for y in [0u8, 1, 5, 21] {
            for x in 0..10 {
                board.fill_static(Point::new(x, y as i8), ShapeKind::L);
            }
        }
        assert_eq!(board.complete_rows().as_slice(), &[5, 21]);
    }

    #[test]
    fn test_remove_shape_keeps_foreign_cells() {
        let mut board = Board::new();
        let shape = Shape::spawn(ShapeId(3), ShapeKind::O);
        board.place_shape(&shape);
        // A foreign block overwrote one of the shape's cells.
        let stolen = shape.blocks()[0].pos;
        board.fill_static(stolen, ShapeKind::I);

        board.remove_shape(&shape);

        assert_eq!(board.occupied_count(), 1);
        assert_eq!(board.occupant(stolen).map(|o| o.shape), Some(ShapeId::STATIC));
    }

    const FULL_ROW: u16 = (1 << BOARD_WIDTH) - 1;

    proptest! {
        #[test]
        fn clearing_every_complete_row_leaves_none(
            masks in prop::collection::vec(
                prop_oneof![Just(FULL_ROW), 0u16..FULL_ROW],
                (BOARD_HEIGHT - SPAWN_BUFFER_ROWS) as usize,
            ),
        ) {
            let mut board = Board::new();
            for (i, mask) in masks.iter().enumerate() {
                let y = i as i8 + SPAWN_BUFFER_ROWS as i8;
                for x in 0..BOARD_WIDTH as i8 {
                    if mask & (1 << x) != 0 {
                        board.fill_static(Point::new(x, y), ShapeKind::T);
                    }
                }
            }
            let before = board.occupied_count();
            let full = masks.iter().filter(|&&m| m == FULL_ROW).count();

            let rows = board.complete_rows();
            prop_assert_eq!(rows.len(), full);
            board.clear_rows(&rows);

            prop_assert_eq!(board.occupied_count(), before - full * BOARD_WIDTH as usize);
            prop_assert!(board.complete_rows().is_empty());
            // Everything above the top cleared row moved down, so the top
            // `full` rows are empty.
            for y in 0..(SPAWN_BUFFER_ROWS as usize + full) as u8 {
                prop_assert!(!board.has_block_in_row(y));
            }
        }
    }
}
