//! Terminal presentation for the engine.
//!
//! Renders [`core::GameSnapshot`] values into a character framebuffer and
//! flushes that framebuffer to the terminal. It never touches the engine
//! directly; the caller takes a snapshot after each command and hands it over.
//!
//! - [`fb`]: styled character cells
//! - [`game_view`]: snapshot → framebuffer (pure, unit-testable)
//! - [`renderer`]: framebuffer → terminal, diffing against the last frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tick_tetris_core as core;
pub use tick_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BlockStyle, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
