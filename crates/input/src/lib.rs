//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. The map is
//! stateless: whether an action is allowed in the current game state is
//! decided by the game core, so the same rules hold for every input source.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_game_input, should_quit};
