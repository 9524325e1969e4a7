use serde::Serialize;

use crate::pieces::Tetromino;
use crate::types::{PieceKind, Rotation};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i16,
    pub y: i16,
    /// Absolute board coordinates of the piece's cells
    pub cells: Vec<(i16, i16)>,
}

impl From<&Tetromino> for ActiveSnapshot {
    fn from(value: &Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells().to_vec(),
        }
    }
}

/// Owned copy of everything a view needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub cols: u8,
    pub rows: u8,
    /// Row-major, 1 = occupied
    pub board: Vec<Vec<u8>>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub game_over: bool,
    pub pieces_spawned: u32,
}
