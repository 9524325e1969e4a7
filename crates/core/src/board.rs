//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid of occupancy flags, stored flat in
//! row-major order. Dimensions are fixed at creation; only cell contents
//! change afterwards.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use thiserror::Error;

use crate::pieces::Tetromino;

/// Errors from parsing a textual board fixture
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("board fixture has no rows")]
    Empty,
    #[error("board fixture is {rows}x{cols}, larger than 255 in some direction")]
    TooLarge { cols: usize, rows: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    BadCell { row: usize, col: usize, ch: char },
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<bool>,
}

impl Board {
    /// Create a new empty board
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            cells: vec![false; cols as usize * rows as usize],
        }
    }

    /// Parse a board from text rows: `#` or `X` is occupied, `.` is empty.
    ///
    /// ```
    /// use tick_tetris_core::Board;
    ///
    /// let board = Board::from_rows(&["....", "##.#"]).unwrap();
    /// assert_eq!((board.width(), board.height()), (4, 2));
    /// assert!(board.is_occupied(0, 1));
    /// assert!(!board.is_occupied(2, 1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        let Some(first) = rows.first() else {
            return Err(BoardParseError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(BoardParseError::Empty);
        }
        if width > u8::MAX as usize || rows.len() > u8::MAX as usize {
            return Err(BoardParseError::TooLarge {
                cols: width,
                rows: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(BoardParseError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '#' | 'X' => cells.push(true),
                    '.' => cells.push(false),
                    _ => return Err(BoardParseError::BadCell { row, col, ch }),
                }
            }
        }

        Ok(Self {
            cols: width as u8,
            rows: rows.len() as u8,
            cells,
        })
    }

    /// Render as text rows, the inverse of [`Board::from_rows`]
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
            .collect()
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.cols
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, occupied: bool) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16
    }

    /// Whether `piece` overlaps a wall, the floor or an occupied cell.
    ///
    /// Cells above the top edge are only checked against the side walls.
    pub fn collides(&self, piece: &Tetromino) -> bool {
        piece.cells().iter().any(|&(x, y)| {
            x < 0 || x >= self.cols as i16 || y >= self.rows as i16 || self.is_occupied(x, y)
        })
    }

    /// One row as a slice of occupancy flags
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        self.row(y).iter().all(|&cell| cell)
    }

    /// Write the piece's cells into the board.
    /// Returns false, leaving the board untouched, if any cell is off the board
    /// or already occupied.
    pub fn merge(&mut self, piece: &Tetromino) -> bool {
        let cells = piece.cells();
        if cells
            .iter()
            .any(|&(x, y)| !matches!(self.get(x, y), Some(false)))
        {
            return false;
        }
        for &(x, y) in &cells {
            self.set(x, y, true);
        }
        true
    }

    /// Remove all full rows, drop the rows above, and refill the top with
    /// empty rows. Returns the number of rows removed.
    ///
    /// Uses a two-pointer pass with no allocation.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = self.cols as usize;
        let mut cleared = 0;
        let mut write_y = self.rows as usize;

        // Scan from bottom to top
        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(false);
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}
