//! Shared types and constants
//!
//! Plain data used by every other crate in the workspace: the engine core,
//! the input mapping and the terminal view. Nothing in here carries behavior
//! beyond naming and
//! direction lookup.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Both are configurable at
//! engine construction; the engine rejects anything smaller than
//! [`MIN_BOARD_DIM`] in either direction.
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: top-center, `((cols - shape_width) / 2, 0)`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_INTERVAL_MS` | 1300 | Interval between automatic gravity ticks |
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{Direction, GameAction, PieceKind, Rotation, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::T.as_str(), "t");
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Direction::Left.offset(), (-1, 0));
//! assert_eq!(GameAction::SoftDrop.direction(), Some(Direction::Down));
//!
//! assert_eq!(DEFAULT_COLS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_COLS: u8 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_ROWS: u8 = 20;

/// Default interval between automatic ticks, in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1300;

/// Smallest accepted board extent in either direction.
///
/// The I piece spans four cells in both orientations.
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest extent of any catalog shape, in cells
pub const MAX_SHAPE_EXTENT: usize = 4;

/// Number of occupied cells in every tetromino
pub const MINOS_PER_PIECE: usize = 4;

/// The seven tetromino piece kinds
///
/// - **I**: straight bar, 4 wide
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// Every piece kind, in catalog order
pub const PIECE_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

impl PieceKind {
    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Quarter-turn orientation of the active piece
///
/// The cycle goes North → East → South → West → North. Pieces only ever turn
/// clockwise; the orientation is bookkeeping for snapshots and views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tick_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Direction of a single-cell player move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Board offset `(dx, dy)` of one step in this direction
    pub fn offset(&self) -> (i16, i16) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Commands the presentation layer can send to the engine
///
/// Both keyboard and click input map to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start a fresh session
    Restart,
}

impl GameAction {
    /// The movement direction this action stands for, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::SoftDrop => Some(Direction::Down),
            GameAction::Rotate | GameAction::Restart => None,
        }
    }
}
