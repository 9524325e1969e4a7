//! Pieces module - tetromino shape matrices and rotation
//!
//! Every piece is a small binary matrix (at most 4x4) taken from a fixed
//! catalog of seven shapes. Rotation is a plain matrix operation: transpose,
//! then reverse each row, which turns the matrix 90° clockwise. There is no
//! kick table; the engine simply rejects a rotation that collides.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation, MAX_SHAPE_EXTENT, MINOS_PER_PIECE};

/// Offset of a single mino relative to the piece origin, `(x, y)`
pub type MinoOffset = (i16, i16);

/// Occupied cells of one piece
pub type Minos = ArrayVec<MinoOffset, MINOS_PER_PIECE>;

/// Row the spawn origin sits on
pub const SPAWN_ROW: i16 = 0;

/// Catalog rows for each kind, in spawn orientation
fn catalog_rows(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => &[&[1, 1, 1, 1]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
        PieceKind::S => &[&[0, 1, 1], &[1, 1, 0]],
        PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1]],
        PieceKind::J => &[&[1, 0, 0], &[1, 1, 1]],
        PieceKind::L => &[&[0, 0, 1], &[1, 1, 1]],
    }
}

/// A binary shape matrix, stored in a fixed 4x4 block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// Row-major: `cells[y][x]`
    cells: [[bool; MAX_SHAPE_EXTENT]; MAX_SHAPE_EXTENT],
}

impl Shape {
    /// The spawn-orientation shape for a piece kind
    pub fn of(kind: PieceKind) -> Self {
        let rows = catalog_rows(kind);
        let mut cells = [[false; MAX_SHAPE_EXTENT]; MAX_SHAPE_EXTENT];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self {
            width: rows[0].len() as u8,
            height: rows.len() as u8,
            cells,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the matrix cell at `(x, y)` is filled. Out of range is empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.cells[y][x]
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    pub fn rotate_cw(&self) -> Self {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = [[false; MAX_SHAPE_EXTENT]; MAX_SHAPE_EXTENT];
        // The rotated matrix is h wide and w tall.
        for (y, row) in cells.iter_mut().enumerate().take(w) {
            for (x, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - x][y];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Offsets of the filled cells, scanned row by row
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.cells[y][x] {
                    out.push((x as i16, y as i16));
                }
            }
        }
        out
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl Tetromino {
    /// Create a piece at the top-center spawn origin of a board `cols` wide
    pub fn spawn(kind: PieceKind, cols: u8) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            rotation: Rotation::North,
            x: spawn_x(shape.width(), cols),
            y: SPAWN_ROW,
            shape,
        }
    }

    /// The same piece moved by `(dx, dy)`
    pub fn shifted(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The same piece turned 90° clockwise about its origin
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> Minos {
        self.shape
            .minos()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

/// Left column of a shape `width` wide centered on a board `cols` wide
pub fn spawn_x(width: u8, cols: u8) -> i16 {
    (cols as i16 - width as i16) / 2
}
