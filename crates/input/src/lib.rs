//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events and board-relative click columns onto
//! [`crate::types::GameAction`]. Decoding mouse events into a column is left
//! to the caller. There is no auto-repeat handling: every key press is one
//! command.

pub mod click;
pub mod map;

pub use tick_tetris_types as types;

pub use click::{action_for_click, ClickZone};
pub use map::{handle_key_event, should_quit};
