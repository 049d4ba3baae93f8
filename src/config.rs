//! Board configuration, loadable from JSON

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Dimensions and rules of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub columns: u32,
    pub rows: u32,
    /// Run length needed to win (k)
    pub win_length: u32,
    /// Pieces drop to the lowest open cell of a column
    pub gravity: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            columns: 15,
            rows: 15,
            win_length: 5,
            gravity: false,
        }
    }
}

impl BoardConfig {
    /// Standard Connect Four: 7x6, four in a row, gravity on.
    pub fn connect_four() -> Self {
        BoardConfig {
            columns: 7,
            rows: 6,
            win_length: 4,
            gravity: true,
        }
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_json(&content)?;
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Total number of cells
    #[inline]
    pub fn cells(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::Validation(format!(
                "board must have at least one cell (got {}x{})",
                self.columns, self.rows
            )));
        }
        if self.cells() > u32::MAX as u64 {
            return Err(ConfigError::Validation(format!(
                "board {}x{} has too many cells",
                self.columns, self.rows
            )));
        }
        if self.win_length == 0 {
            return Err(ConfigError::Validation("win_length must be > 0".into()));
        }
        if self.win_length > self.columns.max(self.rows) {
            return Err(ConfigError::Validation(format!(
                "win_length {} does not fit on a {}x{} board",
                self.win_length, self.columns, self.rows
            )));
        }
        Ok(())
    }
}
