//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule. It has no dependency on the terminal,
//! the keyboard or audio output, which keeps it:
//!
//! - **Deterministic**: the same piece source produces the same game
//! - **Testable**: every rule is a plain function over plain values
//! - **Portable**: the terminal front end is only one possible consumer
//!
//! # Module Structure
//!
//! - [`shape`]: square shape matrices and clockwise rotation
//! - [`board`]: 10x20 grid with collision, merge and line clearing
//! - [`pieces`]: canonical tetrominoes and rotation with wall kicks
//! - [`rng`]: piece sources (uniform random, fixed sequence)
//! - [`scoring`]: line clear points, levels and gravity speed
//! - [`game_state`]: the game state and its reducer
//! - [`game`]: driver that owns the state and the gravity clock
//! - [`clock`]: gravity tick scheduling
//! - [`snapshot`]: read-only render input
//!
//! # Example
//!
//! ```
//! use blockfall_core::{FixedSequence, Game};
//! use blockfall_core::types::{GameAction, PieceKind};
//!
//! let mut game = Game::new(FixedSequence::repeat(PieceKind::O));
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::RotateCw);
//! let effects = game.apply_action(GameAction::HardDrop);
//!
//! assert!(effects.last_event.is_some());
//! assert_eq!(game.state().board().filled_count(), 4);
//! ```

pub mod board;
pub mod clock;
pub mod game;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use clock::GravityClock;
pub use game::Game;
pub use game_state::{reduce, Effects, GameState, SoundCues};
pub use pieces::{spawn_shape, try_rotate, ActivePiece, Tetromino, WALL_KICKS};
pub use rng::{random_tetromino, FixedSequence, PieceSource, RandomPieces};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use shape::Shape;
pub use snapshot::GameSnapshot;
