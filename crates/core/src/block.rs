//! A single occupied grid cell.

use gridfall_types::{ShapeKind, COLUMNS, ROWS};

use crate::grid::Grid;

/// One cell of a tetromino. Owned by the active piece while falling; moved
/// into the grid when the piece locks.
///
/// Coordinates are grid-space: `x` in `0..COLUMNS` left to right, `y` in
/// `0..ROWS` top to bottom. `y` may be negative while a piece is still above
/// the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub x: i8,
    pub y: i8,
    pub kind: ShapeKind,
}

impl Block {
    pub fn new(x: i8, y: i8, kind: ShapeKind) -> Self {
        Self { x, y, kind }
    }

    /// Position after a 90° rotation about `pivot`. One fixed handedness:
    /// `(dx, dy) -> (-dy, dx)`.
    pub fn rotated_about(&self, pivot: (i8, i8)) -> (i8, i8) {
        let dx = self.x - pivot.0;
        let dy = self.y - pivot.1;
        (pivot.0 - dy, pivot.1 + dx)
    }

    /// Would this block collide after a sideways move to `target_x`?
    ///
    /// Rows above the visible grid count as unoccupied, so a freshly
    /// spawned piece can always be steered.
    pub fn collides_horizontally(&self, target_x: i8, grid: &Grid) -> bool {
        if target_x < 0 || target_x >= COLUMNS as i8 {
            return true;
        }
        grid.occupied(target_x, self.y)
    }

    /// Would this block collide after descending to `target_y`?
    ///
    /// Negative `target_y` never collides; pieces spawn above the grid and
    /// fall into it.
    pub fn collides_vertically(&self, target_y: i8, grid: &Grid) -> bool {
        if target_y >= ROWS as i8 {
            return true;
        }
        target_y >= 0 && grid.occupied(self.x, target_y)
    }
}
