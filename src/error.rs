use std::path::PathBuf;

/// Errors that can occur when loading or validating a board configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors decoding an owner tag from its integer form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OwnerError {
    #[error("invalid owner tag {0} (expected 0, 1 or 2)")]
    Invalid(u8),
}
