//! Error types for marga-nav.

/// Result type alias
pub type Result<T> = std::result::Result<T, NavError>;

/// marga-nav error type
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Grid constructed with a zero or negative cell size
    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(i32),

    /// Configuration file I/O error
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parse error
    #[error("config parse error: {0}")]
    Parse(String),
}

impl From<serde_yaml::Error> for NavError {
    fn from(e: serde_yaml::Error) -> Self {
        NavError::Parse(e.to_string())
    }
}
