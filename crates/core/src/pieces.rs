//! Pieces module - tetromino shapes and rotation with wall kicks
//!
//! Each piece kind has one canonical shape, normalized into a square matrix.
//! Rotation is a plain 90° clockwise matrix turn followed by a short list of
//! horizontal kick offsets tried in order.

use crate::board::Board;
use crate::shape::Shape;
use crate::types::{PieceColor, PieceKind, SPAWN_POSITION};

/// Horizontal offsets tried after a rotation, in priority order.
pub const WALL_KICKS: [i8; 5] = [0, -1, 1, -2, 2];

/// Canonical (spawn) shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// An unpositioned piece: what the next-piece preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: PieceColor,
}

impl Tetromino {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: spawn_shape(kind),
            color: kind.color(),
        }
    }
}

/// The falling piece: a shape in its current rotation plus a board origin.
///
/// `y` may be negative while a piece is entering from above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: PieceColor,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place a tetromino at the spawn position
    pub fn spawn(piece: Tetromino) -> Self {
        Self::at(piece, SPAWN_POSITION.0, SPAWN_POSITION.1)
    }

    pub fn at(piece: Tetromino, x: i8, y: i8) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape,
            color: piece.color,
            x,
            y,
        }
    }

    /// Same piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Check whether the piece overlaps a wall, the floor or a settled cell
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Lowest y the piece can fall to from its current position.
    pub fn landing_y(&self, board: &Board) -> i8 {
        let mut y = self.y;
        while !board.collides(&self.shape, self.x, y + 1) {
            y += 1;
        }
        y
    }

    /// Board with this piece stamped on top
    pub fn merged_into(&self, board: &Board) -> Board {
        board.merge(&self.shape, self.x, self.y, self.color)
    }
}

/// Rotate the piece clockwise, trying each wall kick offset at the same row.
///
/// Returns the rotated piece at the first offset that fits, or `None` if all
/// offsets collide (the caller keeps the unrotated piece).
pub fn try_rotate(board: &Board, piece: &ActivePiece) -> Option<ActivePiece> {
    let rotated = piece.shape.rotate_cw();

    WALL_KICKS.iter().find_map(|&dx| {
        let x = piece.x + dx;
        if board.collides(&rotated, x, piece.y) {
            None
        } else {
            Some(ActivePiece {
                shape: rotated,
                x,
                ..*piece
            })
        }
    })
}
