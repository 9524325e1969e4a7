//! Engine configuration
//!
//! Board size and tick interval are fixed for the lifetime of an engine.
//! They are validated once, up front, so the engine never has to deal with a
//! board the catalog shapes cannot fit on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICK_INTERVAL_MS, MIN_BOARD_DIM};

/// Rejected configuration values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least {min} columns wide, got {cols}")]
    TooNarrow { cols: u8, min: u8 },
    #[error("board must be at least {min} rows tall, got {rows}")]
    TooShort { rows: u8, min: u8 },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Board dimensions and tick interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineConfig {
    pub cols: u8,
    pub rows: u8,
    /// Interval the external scheduler should call `tick()` at
    pub tick_interval_ms: u32,
}

impl EngineConfig {
    pub fn new(cols: u8, rows: u8, tick_interval_ms: u32) -> Self {
        Self {
            cols,
            rows,
            tick_interval_ms,
        }
    }

    /// Check every field, reporting the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols < MIN_BOARD_DIM {
            return Err(ConfigError::TooNarrow {
                cols: self.cols,
                min: MIN_BOARD_DIM,
            });
        }
        if self.rows < MIN_BOARD_DIM {
            return Err(ConfigError::TooShort {
                rows: self.rows,
                min: MIN_BOARD_DIM,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_TICK_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!((config.cols, config.rows), (10, 20));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_boards() {
        assert_eq!(
            EngineConfig::new(0, 20, 100).validate(),
            Err(ConfigError::TooNarrow { cols: 0, min: 4 })
        );
        assert_eq!(
            EngineConfig::new(10, 3, 100).validate(),
            Err(ConfigError::TooShort { rows: 3, min: 4 })
        );
        assert_eq!(
            EngineConfig::new(10, 20, 0).validate(),
            Err(ConfigError::ZeroTickInterval)
        );
    }

    #[test]
    fn smallest_board_is_accepted() {
        assert_eq!(EngineConfig::new(4, 4, 1).validate(), Ok(()));
    }

    #[test]
    fn error_messages_name_the_value() {
        let err = EngineConfig::new(2, 20, 100).validate().unwrap_err();
        assert_eq!(err.to_string(), "board must be at least 4 columns wide, got 2");
    }
}
