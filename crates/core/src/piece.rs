//! Tetromino shapes and the active piece.
//!
//! Shape offsets are relative to the first block, which is always `(0, 0)`
//! and doubles as the rotation pivot. The piece never mutates the grid; it
//! only queries it and commits moves to its own blocks, all-or-nothing.

use gridfall_types::{ShapeKind, COLUMNS, ROWS, SPAWN_OFFSET};

use crate::block::Block;
use crate::grid::Grid;

/// Relative block offsets for each shape.
pub fn shape_offsets(kind: ShapeKind) -> [(i8, i8); 4] {
    match kind {
        ShapeKind::T => [(0, 0), (-1, 0), (1, 0), (0, -1)],
        ShapeKind::O => [(0, 0), (0, -1), (1, 0), (1, -1)],
        ShapeKind::J => [(0, 0), (0, -1), (0, 1), (-1, 1)],
        ShapeKind::L => [(0, 0), (0, -1), (0, 1), (1, 1)],
        ShapeKind::I => [(0, 0), (0, -1), (0, -2), (0, 1)],
        ShapeKind::S => [(0, 0), (-1, 0), (0, -1), (1, -1)],
        ShapeKind::Z => [(0, 0), (1, 0), (0, -1), (-1, -1)],
    }
}

/// Outcome of a gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    Falling,
    Landed,
}

/// The active tetromino: four blocks sharing one shape tag.
#[derive(Debug, Clone)]
pub struct Piece {
    kind: ShapeKind,
    blocks: [Block; 4],
}

impl Piece {
    /// Spawn at the fixed offset: horizontally centered, one row above the
    /// visible grid.
    pub fn spawn(kind: ShapeKind) -> Self {
        let (ox, oy) = SPAWN_OFFSET;
        let blocks = shape_offsets(kind).map(|(dx, dy)| Block::new(ox + dx, oy + dy, kind));
        Self { kind, blocks }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    /// True if any block sits on an occupied grid cell.
    pub fn overlaps(&self, grid: &Grid) -> bool {
        self.blocks.iter().any(|b| grid.occupied(b.x, b.y))
    }

    /// Shift the piece one column left or right. Commits to all four blocks
    /// or to none.
    pub fn move_horizontal(&mut self, delta: i8, grid: &Grid) -> bool {
        if self
            .blocks
            .iter()
            .any(|b| b.collides_horizontally(b.x + delta, grid))
        {
            return false;
        }
        for block in &mut self.blocks {
            block.x += delta;
        }
        true
    }

    /// Advance one row, or report that the piece has landed. Locking a
    /// landed piece is the caller's responsibility.
    pub fn try_descend(&mut self, grid: &Grid) -> Descent {
        if self
            .blocks
            .iter()
            .any(|b| b.collides_vertically(b.y + 1, grid))
        {
            return Descent::Landed;
        }
        for block in &mut self.blocks {
            block.y += 1;
        }
        Descent::Falling
    }

    /// Rotate 90° about the first block. A no-op for the square shape.
    ///
    /// Every candidate position must stay within the side walls, land on an
    /// unoccupied cell, and satisfy `y <= ROWS`; one row past the floor is
    /// accepted, a deliberate quirk of the floor bound. Any failure rejects
    /// the whole rotation.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        if self.kind == ShapeKind::O {
            return false;
        }

        let pivot = (self.blocks[0].x, self.blocks[0].y);
        let mut candidates = [(0i8, 0i8); 4];
        for (slot, block) in candidates.iter_mut().zip(&self.blocks) {
            *slot = block.rotated_about(pivot);
        }

        for &(x, y) in &candidates {
            if x < 0 || x >= COLUMNS as i8 {
                return false;
            }
            if grid.occupied(x, y) {
                return false;
            }
            if y > ROWS as i8 {
                return false;
            }
        }

        for (block, (x, y)) in self.blocks.iter_mut().zip(candidates) {
            block.x = x;
            block.y = y;
        }
        true
    }
}
