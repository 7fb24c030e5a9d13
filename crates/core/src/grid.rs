//! The locked-block grid.
//!
//! A 20x10 arena of blocks addressed by grid index, flat row-major storage.
//! Invariants: a cell holds at most one block, and a block's recorded
//! position always matches the cell it occupies.

use arrayvec::ArrayVec;

use gridfall_types::{COLUMNS, ROWS};

use crate::block::Block;

const GRID_SIZE: usize = (COLUMNS as usize) * (ROWS as usize);

#[derive(Debug, Clone)]
pub struct Grid {
    cells: [Option<Block>; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= COLUMNS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((y as usize) * (COLUMNS as usize) + (x as usize))
    }

    /// The block at `(x, y)`, if the cell is inside the grid and occupied.
    pub fn get(&self, x: i8, y: i8) -> Option<Block> {
        Self::index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Whether the cell at `(x, y)` holds a block. Positions outside the
    /// grid are reported unoccupied; bounds are the callers' concern.
    pub fn occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some()
    }

    /// Place a block at its own coordinates. Returns `false` (and leaves the
    /// grid untouched) if the position is outside the grid or already taken.
    pub fn insert(&mut self, block: Block) -> bool {
        match Self::index(block.x, block.y) {
            Some(idx) if self.cells[idx].is_none() => {
                self.cells[idx] = Some(block);
                true
            }
            _ => false,
        }
    }

    pub fn is_row_full(&self, y: i8) -> bool {
        if y < 0 || y >= ROWS as i8 {
            return false;
        }
        let start = (y as usize) * (COLUMNS as usize);
        self.cells[start..start + COLUMNS as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Iterate over all locked blocks.
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Clear every full row and settle the survivors.
    ///
    /// For each cleared row, every block strictly above it moves down one
    /// row; with several simultaneous clears the shifts accumulate. The
    /// index is then rebuilt wholesale by re-inserting every surviving
    /// block at its new position. Returns the number of rows cleared (0-4).
    pub fn clear_finished_rows(&mut self) -> usize {
        let mut full_rows: ArrayVec<i8, 4> = ArrayVec::new();
        for y in 0..ROWS as i8 {
            if self.is_row_full(y) {
                full_rows.push(y);
            }
        }
        if full_rows.is_empty() {
            return 0;
        }

        let mut survivors: Vec<Block> = self
            .blocks()
            .filter(|block| !full_rows.contains(&block.y))
            .collect();

        // Row indices are ascending, so shifts against already-shifted
        // blocks accumulate exactly once per cleared row above a block.
        for &row in &full_rows {
            for block in &mut survivors {
                if block.y < row {
                    block.y += 1;
                }
            }
        }

        self.cells = [None; GRID_SIZE];
        for block in survivors {
            self.insert(block);
        }

        full_rows.len()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfall_types::ShapeKind;

    fn fill_row(grid: &mut Grid, y: i8) {
        for x in 0..COLUMNS as i8 {
            grid.insert(Block::new(x, y, ShapeKind::I));
        }
    }

    #[test]
    fn insert_rejects_taken_and_out_of_bounds_cells() {
        let mut grid = Grid::new();

        assert!(grid.insert(Block::new(3, 7, ShapeKind::T)));
        assert!(!grid.insert(Block::new(3, 7, ShapeKind::O)));
        assert_eq!(grid.get(3, 7).map(|b| b.kind), Some(ShapeKind::T));

        assert!(!grid.insert(Block::new(-1, 0, ShapeKind::T)));
        assert!(!grid.insert(Block::new(0, ROWS as i8, ShapeKind::T)));
    }

    #[test]
    fn row_fullness() {
        let mut grid = Grid::new();
        assert!(!grid.is_row_full(19));

        fill_row(&mut grid, 19);
        assert!(grid.is_row_full(19));

        // One gap is enough to keep a row open.
        for x in 0..COLUMNS as i8 - 1 {
            grid.insert(Block::new(x, 18, ShapeKind::O));
        }
        assert!(!grid.is_row_full(18));
    }

    #[test]
    fn clearing_a_single_row_shifts_blocks_above() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 19);
        grid.insert(Block::new(2, 17, ShapeKind::L));
        grid.insert(Block::new(4, 18, ShapeKind::J));

        assert_eq!(grid.clear_finished_rows(), 1);

        assert!(grid.get(2, 17).is_none());
        assert_eq!(grid.get(2, 18).map(|b| b.kind), Some(ShapeKind::L));
        assert_eq!(grid.get(4, 19).map(|b| b.kind), Some(ShapeKind::J));
    }

    #[test]
    fn simultaneous_clears_shift_cumulatively() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 15);
        fill_row(&mut grid, 17);
        fill_row(&mut grid, 19);
        grid.insert(Block::new(0, 14, ShapeKind::S)); // above all three
        grid.insert(Block::new(1, 16, ShapeKind::Z)); // above two
        grid.insert(Block::new(2, 18, ShapeKind::T)); // above one

        assert_eq!(grid.clear_finished_rows(), 3);

        assert_eq!(grid.get(0, 17).map(|b| b.kind), Some(ShapeKind::S));
        assert_eq!(grid.get(1, 18).map(|b| b.kind), Some(ShapeKind::Z));
        assert_eq!(grid.get(2, 19).map(|b| b.kind), Some(ShapeKind::T));
    }

    #[test]
    fn blocks_below_a_cleared_row_do_not_move() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 10);
        grid.insert(Block::new(6, 15, ShapeKind::O));

        assert_eq!(grid.clear_finished_rows(), 1);
        assert_eq!(grid.get(6, 15).map(|b| b.kind), Some(ShapeKind::O));
    }

    #[test]
    fn no_full_rows_is_a_no_op() {
        let mut grid = Grid::new();
        grid.insert(Block::new(3, 12, ShapeKind::T));
        assert_eq!(grid.clear_finished_rows(), 0);
        assert!(grid.occupied(3, 12));
    }

    #[test]
    fn rebuilt_index_matches_block_positions() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 19);
        grid.insert(Block::new(0, 17, ShapeKind::J));
        grid.insert(Block::new(9, 16, ShapeKind::L));
        grid.clear_finished_rows();

        for block in grid.blocks() {
            assert_eq!(grid.get(block.x, block.y), Some(block));
        }
    }
}
