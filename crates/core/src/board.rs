//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of a
//! settled piece. Uses a flat array for cache locality and cheap copies.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Collision, merge and line clear are defined here. `merge` and `clear_lines`
//! return new boards and leave `self` untouched; the caller decides whether to
//! commit the result.

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Cell, PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Upper bound on rows cleared in one pass
const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Check if a row is completely empty
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_none()))
            .unwrap_or(false)
    }

    /// Borrow one row (top row is 0)
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Whether `shape` placed with its origin at (x, y) hits a wall, the floor
    /// or a settled cell.
    ///
    /// Cells above the visible grid (negative y) never collide, which lets a
    /// piece spawn partly above the top edge.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.occupied().any(|(r, c)| {
            let px = x + c;
            let py = y + r;
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Stamp `shape` at (x, y) with `color` onto a copy of this board.
    ///
    /// Cells outside the grid (including rows above the top) are dropped.
    pub fn merge(&self, shape: &Shape, x: i8, y: i8, color: PieceColor) -> Board {
        let mut merged = *self;
        for (r, c) in shape.occupied() {
            merged.set(x + c, y + r, Some(color));
        }
        merged
    }

    /// Remove full rows from a copy of this board.
    ///
    /// Returns the new board and the number of rows removed. Remaining rows
    /// keep their order and empty rows are added at the top.
    pub fn clear_lines(&self) -> (Board, usize) {
        let mut cleared = *self;
        let rows = cleared.clear_full_rows();
        (cleared, rows.len())
    }

    /// Clear all full rows in place and return the row indices that were
    /// cleared (sorted bottom to top).
    ///
    /// Uses a two-pointer compaction with no allocation.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, BOARD_ROWS> {
        let mut cleared_rows = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Rows above the last kept row are now empty
        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Number of settled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Fill row `y` with `color`, leaving the listed columns empty.
    pub fn fill_row_except(&mut self, y: i8, color: PieceColor, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if holes.contains(&x) { None } else { Some(color) };
            self.set(x, y, cell);
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

    fn o_shape() -> Shape {
        Shape::from_rows(&[&[1, 1], &[1, 1]])
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_collides_walls_and_floor() {
        let board = Board::new();
        let o = o_shape();

        assert!(!board.collides(&o, 0, 0));
        assert!(!board.collides(&o, 8, 18));
        assert!(board.collides(&o, -1, 0));
        assert!(board.collides(&o, 9, 0));
        assert!(board.collides(&o, 0, 19));
    }

    #[test]
    fn test_collides_ignores_rows_above_top() {
        let mut board = Board::new();
        board.fill_row_except(0, PieceColor::Red, &[]);
        let o = o_shape();

        // Entirely above the grid.
        assert!(!board.collides(&o, 4, -2));
        // Lower half of the piece reaches row 0.
        assert!(board.collides(&o, 4, -1));
    }

    #[test]
    fn test_merge_does_not_touch_input() {
        let board = Board::new();
        let merged = board.merge(&o_shape(), 3, 18, PieceColor::Yellow);

        assert_eq!(board.filled_count(), 0);
        assert_eq!(merged.filled_count(), 4);
        assert_eq!(merged.get(3, 18), Some(Some(PieceColor::Yellow)));
        assert_eq!(merged.get(4, 19), Some(Some(PieceColor::Yellow)));
    }

    #[test]
    fn test_merge_drops_cells_above_top() {
        let merged = Board::new().merge(&o_shape(), 0, -1, PieceColor::Yellow);
        assert_eq!(merged.filled_count(), 2);
        assert_eq!(merged.get(0, 0), Some(Some(PieceColor::Yellow)));
        assert_eq!(merged.get(1, 0), Some(Some(PieceColor::Yellow)));
    }

    #[test]
    fn test_clear_full_rows_compacts() {
        let mut board = Board::new();
        board.fill_row_except(19, PieceColor::Cyan, &[]);
        board.fill_row_except(18, PieceColor::Blue, &[2]);
        board.fill_row_except(17, PieceColor::Cyan, &[]);
        board.set(5, 16, Some(PieceColor::Red));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);

        // Row 18 (with hole) drops to 19, marker at 16 drops to 18.
        assert_eq!(board.get(2, 19), Some(None));
        assert_eq!(board.get(0, 19), Some(Some(PieceColor::Blue)));
        assert_eq!(board.get(5, 18), Some(Some(PieceColor::Red)));
        assert!(board.is_row_empty(0));
        assert!(board.is_row_empty(17));
    }

    #[test]
    fn test_clear_lines_handles_tall_stacks() {
        let mut board = Board::new();
        for y in 10..20 {
            board.fill_row_except(y, PieceColor::Green, &[]);
        }
        let (cleared, count) = board.clear_lines();
        assert_eq!(count, 10);
        assert_eq!(cleared, Board::new());
        // Input untouched.
        assert_eq!(board.filled_count(), 100);
    }
}
