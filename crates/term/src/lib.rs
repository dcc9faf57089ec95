//! Terminal front end.
//!
//! Renders into a plain framebuffer of styled glyphs and flushes only what
//! changed to the terminal. No widget toolkit or layout engine:
//! - [`game_view`] maps a game snapshot onto glyphs (pure, testable)
//! - [`renderer`] owns the terminal and encodes frames with crossterm
//! - board cells are 2 columns wide by default to keep them square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{color_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
