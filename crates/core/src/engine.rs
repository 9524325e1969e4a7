//! Engine module - the complete game session
//!
//! Ties together the board, the active piece and the injected randomizer.
//! Every operation runs to completion and leaves the engine consistent; the
//! caller polls accessors or [`Engine::snapshot`] afterwards to redraw.
//!
//! Only [`Engine::tick`] locks pieces. A player's `Down` move into the stack
//! is rejected like any other illegal move.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::pieces::Tetromino;
use crate::rng::{Randomizer, UniformRandomizer};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Direction, GameAction};

/// Emitted when a piece locks into the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// The replacement piece could not spawn
    pub game_over: bool,
}

/// What a call to [`Engine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session is over; nothing changed
    Ignored,
    /// The active piece moved down one row
    Fell,
    /// The active piece locked and a new one was spawned
    Locked(LockEvent),
}

/// Complete game state
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    board: Board,
    active: Tetromino,
    randomizer: Box<dyn Randomizer + Send>,
    score: u32,
    game_over: bool,
    /// Increments on every spawn, including the one that ends the game
    pieces_spawned: u32,
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create a new session with an empty board and a freshly spawned piece
    pub fn new(
        config: EngineConfig,
        randomizer: Box<dyn Randomizer + Send>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.cols, config.rows);
        Ok(Self::assemble(config, board, randomizer))
    }

    /// Create a session with a uniform randomizer seeded from `seed`
    pub fn seeded(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, Box::new(UniformRandomizer::seeded(seed)))
    }

    /// Create a session on top of an existing board.
    ///
    /// The board's size overrides `config.cols`/`config.rows`. If the first
    /// piece cannot spawn the session starts in the game-over state.
    pub fn with_board(
        config: EngineConfig,
        board: Board,
        randomizer: Box<dyn Randomizer + Send>,
    ) -> Result<Self, ConfigError> {
        let config = EngineConfig {
            cols: board.width(),
            rows: board.height(),
            ..config
        };
        config.validate()?;
        Ok(Self::assemble(config, board, randomizer))
    }

    fn assemble(
        config: EngineConfig,
        board: Board,
        mut randomizer: Box<dyn Randomizer + Send>,
    ) -> Self {
        let active = Tetromino::spawn(randomizer.next_kind(), config.cols);
        let game_over = board.collides(&active);
        Self {
            config,
            board,
            active,
            randomizer,
            score: 0,
            game_over,
            pieces_spawned: 1,
            last_event: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// The most recent lock, if any piece has locked since the last restart
    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Advance one gravity step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Ignored;
        }

        let below = self.active.shifted(0, 1);
        if !self.board.collides(&below) {
            self.active = below;
            return TickOutcome::Fell;
        }

        let event = self.lock_active();
        TickOutcome::Locked(event)
    }

    /// Move the active piece one cell. Returns false if the move is blocked
    /// or the session is over.
    pub fn try_move(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let (dx, dy) = direction.offset();
        let moved = self.active.shifted(dx, dy);
        if self.board.collides(&moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate the active piece clockwise in place. A rotation that would
    /// collide is discarded.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let rotated = self.active.rotated();
        if self.board.collides(&rotated) {
            return false;
        }
        self.active = rotated;
        true
    }

    /// Throw the session away and start over on an empty board
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.game_over = false;
        self.pieces_spawned = 0;
        self.last_event = None;
        self.spawn();
        info!(kind = self.active.kind.as_str(), "session restarted");
    }

    /// Apply a presentation-layer command. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop => action
                .direction()
                .is_some_and(|direction| self.try_move(direction)),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let board = (0..self.board.height() as usize)
            .map(|y| self.board.row(y).iter().map(|&c| u8::from(c)).collect())
            .collect();

        GameSnapshot {
            cols: self.board.width(),
            rows: self.board.height(),
            board,
            active: Some(ActiveSnapshot::from(&self.active)),
            score: self.score,
            game_over: self.game_over,
            pieces_spawned: self.pieces_spawned,
        }
    }

    /// Merge the active piece, clear rows and bring in the next piece
    fn lock_active(&mut self) -> LockEvent {
        let lines_cleared = if self.board.merge(&self.active) {
            self.board.clear_full_rows()
        } else {
            // Only possible if part of the piece sits above the top edge.
            self.finish_game();
            0
        };
        self.score += lines_cleared;
        debug!(
            kind = self.active.kind.as_str(),
            x = self.active.x,
            y = self.active.y,
            lines_cleared,
            score = self.score,
            "piece locked"
        );

        if !self.game_over && !self.spawn() {
            self.finish_game();
        }

        let event = LockEvent {
            lines_cleared,
            game_over: self.game_over,
        };
        self.last_event = Some(event);
        event
    }

    /// Draw the next piece at the spawn origin. Returns false if it collides.
    fn spawn(&mut self) -> bool {
        let kind = self.randomizer.next_kind();
        self.active = Tetromino::spawn(kind, self.config.cols);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        trace!(kind = kind.as_str(), x = self.active.x, "spawned piece");
        !self.board.collides(&self.active)
    }

    fn finish_game(&mut self) {
        self.game_over = true;
        info!(
            score = self.score,
            pieces = self.pieces_spawned,
            "game over"
        );
    }
}
