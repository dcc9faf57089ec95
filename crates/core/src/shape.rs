//! Square shape matrices
//!
//! Every tetromino is stored as an N x N matrix of filled/empty cells, where N
//! is the larger of the piece's height and width. Shorter rows and missing rows
//! are zero padded on the right and bottom. A square matrix keeps rotation a
//! pure index remap with no re-centering.

/// Largest supported matrix size (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// An N x N matrix of occupied cells, N in `1..=MAX_SHAPE_SIZE`.
///
/// Cells outside the `size x size` window are always empty, so derived
/// equality compares shapes exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a normalized square shape from rows of 0/1 values.
    ///
    /// Any non-zero value counts as filled. Input beyond 4x4 is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]);
    /// assert_eq!(t.size(), 3);
    /// assert!(t.is_filled(0, 1));
    /// assert!(!t.is_filled(2, 1));
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len().min(MAX_SHAPE_SIZE);
        let width = rows
            .iter()
            .take(height)
            .map(|row| row.len())
            .max()
            .unwrap_or(0)
            .min(MAX_SHAPE_SIZE);
        let size = height.max(width).max(1);

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().take(height).enumerate() {
            for (c, &v) in row.iter().take(width).enumerate() {
                cells[r][c] = v != 0;
            }
        }

        Self {
            size: size as u8,
            cells,
        }
    }

    /// Matrix dimension N.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether cell (row, col) is filled. Out-of-range cells are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.cells[row][col]
    }

    /// Rotate 90° clockwise: source (r, c) lands on (c, N-1-r).
    pub fn rotate_cw(&self) -> Self {
        let n = self.size();
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for r in 0..n {
            for c in 0..n {
                if self.cells[r][c] {
                    cells[c][n - 1 - r] = true;
                }
            }
        }
        Self {
            size: self.size,
            cells,
        }
    }

    /// Occupied cells as (row, col) offsets from the piece origin.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |r| {
            (0..n)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.occupied().count()
    }

    /// Index of the lowest row holding an occupied cell.
    pub fn lowest_filled_row(&self) -> Option<usize> {
        (0..self.size())
            .rev()
            .find(|&r| self.cells[r][..self.size()].iter().any(|&v| v))
    }
}
