//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the Tetris rules and session state. It does no I/O and
//! owns no timer: a front end drives it by calling [`Engine::tick`] at a fixed
//! interval (see [`FixedTicker`]) and forwarding player commands.
//!
//! - **Deterministic**: the randomizer is injected, so a seed reproduces a game
//! - **Testable**: boards can be built from text fixtures
//! - **Portable**: terminal, headless, or anything else that can poll a snapshot
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size occupancy grid, collision test and line clearing
//! - [`config`]: board size and tick interval, validated up front
//! - [`engine`]: the session: tick, move, rotate, restart
//! - [`pieces`]: the seven shape matrices and clockwise rotation
//! - [`rng`]: the [`Randomizer`] seam and its implementations
//! - [`snapshot`]: owned copies of the session for rendering
//! - [`ticker`]: external fixed-interval scheduler
//!
//! # Game Rules
//!
//! - A tick moves the piece down one row; if it can't, the piece locks
//! - Locking clears every full row and scores one point per row
//! - A new piece spawns top-center; if it overlaps the stack the game is over
//! - Rotation is a plain 90° clockwise turn, rejected on collision (no kicks)
//! - Player moves never lock a piece, including moving down
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::{Engine, EngineConfig, TickOutcome};
//! use tick_tetris_types::Direction;
//!
//! let mut engine = Engine::seeded(EngineConfig::default(), 12345).unwrap();
//!
//! engine.try_move(Direction::Left);
//! engine.rotate();
//! assert_eq!(engine.tick(), TickOutcome::Fell);
//!
//! let snap = engine.snapshot();
//! assert_eq!(snap.score, 0);
//! assert!(!snap.game_over);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod ticker;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardParseError};
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, LockEvent, TickOutcome};
pub use pieces::{Shape, Tetromino};
pub use rng::{BagRandomizer, Randomizer, ScriptedRandomizer, UniformRandomizer};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use ticker::FixedTicker;
