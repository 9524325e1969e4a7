//! Click mapping for the board area.
//!
//! The board is split into three vertical bands: a click in the left third
//! moves left, the right third moves right, and the middle rotates.

use crate::types::GameAction;

/// Which band of the board a click landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickZone {
    Left,
    Middle,
    Right,
}

impl ClickZone {
    /// Classify a click `offset` columns from the board's left edge, on a
    /// board `width` columns wide. Clicks outside `[0, width)` are `None`.
    pub fn classify(offset: u16, width: u16) -> Option<Self> {
        if offset >= width {
            return None;
        }
        // Compare 3 * offset against width to avoid fractional thirds.
        let scaled = offset as u32 * 3;
        let width = width as u32;
        Some(if scaled < width {
            ClickZone::Left
        } else if scaled > width * 2 {
            ClickZone::Right
        } else {
            ClickZone::Middle
        })
    }

    pub fn action(&self) -> GameAction {
        match self {
            ClickZone::Left => GameAction::MoveLeft,
            ClickZone::Middle => GameAction::Rotate,
            ClickZone::Right => GameAction::MoveRight,
        }
    }
}

/// Map a click at terminal column `column` onto a board whose play area
/// starts at `board_left` and is `board_width` columns wide.
pub fn action_for_click(column: u16, board_left: u16, board_width: u16) -> Option<GameAction> {
    let offset = column.checked_sub(board_left)?;
    ClickZone::classify(offset, board_width).map(|zone| zone.action())
}
