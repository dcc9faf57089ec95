//! Read-only view of a game for renderers.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Settled cells with the active piece drawn on top
    pub board: Board,
    /// Next-piece preview
    pub next: Tetromino,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub status: GameStatus,
    pub muted: bool,
}

impl GameSnapshot {
    pub fn running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
