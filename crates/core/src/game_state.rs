//! Game state module - the complete state of one game and its reducer
//!
//! `GameState` is a plain value. [`reduce`] takes the current state and one
//! [`GameAction`], and returns the next state plus the side effects the
//! outside world may react to (sound cues, lock events). Player input and the
//! gravity timer both go through it, one action at a time.
//!
//! Lock sequence (gravity tick that cannot move down, or hard drop):
//! 1. merge the active piece into the board,
//! 2. clear full rows and score them at the current level,
//! 3. promote the queued piece to the spawn position and draw a new one,
//! 4. end the game if the locked piece never left the top row.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::Board;
use crate::pieces::{try_rotate, ActivePiece, Tetromino};
use crate::rng::{random_tetromino, PieceSource};
use crate::scoring::{drop_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameStatus, LockEvent, SoundCue};

/// Sound cues produced by a single action (lock + clear + game over at most).
pub type SoundCues = ArrayVec<SoundCue, 3>;

/// What a single action did, apart from the new state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Effects {
    /// Whether the state differs from the input state
    pub changed: bool,
    pub cues: SoundCues,
    /// Set when the action locked a piece
    pub last_event: Option<LockEvent>,
}

impl Effects {
    fn cue(&mut self, cue: SoundCue) {
        self.changed = true;
        let _ = self.cues.try_push(cue);
    }

    fn record_lock(&mut self, event: LockEvent) {
        self.cue(SoundCue::Lock);
        if event.lines_cleared > 0 {
            self.cue(SoundCue::LineClear);
        }
        if event.game_over {
            self.cue(SoundCue::GameOver);
        }
        self.last_event = Some(event);
    }
}

/// Complete game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    next: Tetromino,
    score: u32,
    level: u32,
    lines: u32,
    status: GameStatus,
    muted: bool,
}

impl GameState {
    /// Fresh running game on an empty board
    pub fn new<S: PieceSource + ?Sized>(source: &mut S) -> Self {
        let active = ActivePiece::spawn(random_tetromino(source));
        let next = random_tetromino(source);
        Self::with_pieces(Board::new(), active, next)
    }

    /// Running game at level 1 with a prepared board and pieces
    pub fn with_pieces(board: Board, active: ActivePiece, next: Tetromino) -> Self {
        Self {
            board,
            active,
            next,
            score: 0,
            level: 1,
            lines: 0,
            status: GameStatus::Running,
            muted: false,
        }
    }

    /// Same state with `lines` already cleared (level follows).
    pub fn with_lines(mut self, lines: u32) -> Self {
        self.lines = lines;
        self.level = level_for_lines(lines);
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn next(&self) -> Tetromino {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Current gravity interval based on level
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Settled board with the active piece stamped on top.
    ///
    /// After game over the last promoted piece is not drawn.
    pub fn display_board(&self) -> Board {
        if self.game_over() {
            self.board
        } else {
            self.active.merged_into(&self.board)
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.display_board(),
            next: self.next,
            score: self.score,
            level: self.level,
            lines: self.lines,
            status: self.status,
            muted: self.muted,
        }
    }

    /// Try to move the active piece; illegal moves leave it untouched.
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let moved = self.active.shifted(dx, dy);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Try to rotate the active piece with wall kicks
    pub(crate) fn try_rotate(&mut self) -> bool {
        match try_rotate(&self.board, &self.active) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Drop the active piece as far as it goes, then lock it
    pub(crate) fn hard_drop<S: PieceSource + ?Sized>(&mut self, source: &mut S) -> LockEvent {
        self.active.y = self.active.landing_y(&self.board);
        self.lock_active(source)
    }

    /// Run the lock sequence for the active piece at its current position
    pub(crate) fn lock_active<S: PieceSource + ?Sized>(&mut self, source: &mut S) -> LockEvent {
        let locked = self.active;

        let (board, cleared) = locked.merged_into(&self.board).clear_lines();
        self.board = board;

        let points = line_clear_score(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared as u32);
        self.level = level_for_lines(self.lines);

        self.active = ActivePiece::spawn(self.next);
        self.next = random_tetromino(source);

        let game_over = locked.y <= 0;
        if game_over {
            self.status = GameStatus::GameOver;
            info!(
                "game over: score={} level={} lines={}",
                self.score, self.level, self.lines
            );
        }

        debug!(
            "locked {} at ({}, {}): cleared={} points={}",
            locked.kind.as_str(),
            locked.x,
            locked.y,
            cleared,
            points
        );

        LockEvent {
            lines_cleared: cleared as u32,
            line_clear_score: points,
            game_over,
        }
    }

    fn restart<S: PieceSource + ?Sized>(&mut self, source: &mut S) {
        let muted = self.muted;
        *self = Self::new(source).with_muted(muted);
        info!("game restarted");
    }
}

/// Apply one action to a state.
///
/// While the game is not running, only `TogglePause` (paused games) and
/// `Restart` have any effect.
pub fn reduce<S: PieceSource + ?Sized>(
    state: GameState,
    action: GameAction,
    source: &mut S,
) -> (GameState, Effects) {
    let mut next = state;
    let mut effects = Effects::default();

    match action {
        GameAction::Restart => {
            next.restart(source);
            effects.changed = true;
        }
        GameAction::TogglePause => {
            next.status = match next.status {
                GameStatus::Running => GameStatus::Paused,
                GameStatus::Paused => GameStatus::Running,
                GameStatus::GameOver => GameStatus::GameOver,
            };
            effects.changed = next.status != state.status;
        }
        _ if !next.running() => {}
        GameAction::MoveLeft => {
            if next.try_move(-1, 0) {
                effects.cue(SoundCue::Move);
            }
        }
        GameAction::MoveRight => {
            if next.try_move(1, 0) {
                effects.cue(SoundCue::Move);
            }
        }
        GameAction::RotateCw => {
            if next.try_rotate() {
                effects.cue(SoundCue::Rotate);
            }
        }
        GameAction::SoftDrop => {
            if next.try_move(0, 1) {
                effects.cue(SoundCue::SoftDrop);
            }
        }
        GameAction::HardDrop => {
            let event = next.hard_drop(source);
            effects.record_lock(event);
        }
        GameAction::Tick => {
            if next.try_move(0, 1) {
                effects.changed = true;
            } else {
                let event = next.lock_active(source);
                effects.record_lock(event);
            }
        }
        GameAction::ToggleMute => {
            next.muted = !next.muted;
            effects.changed = true;
        }
    }

    (next, effects)
}
