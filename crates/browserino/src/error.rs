use std::fmt;

/// Unified error type for the browserino crate.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Failure reported by the platform layer.
    Platform(String),
    /// Failure reading or writing persisted settings.
    Storage(String),
    /// Operation not available on this platform.
    Unsupported(&'static str),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Platform(msg) => write!(f, "platform error: {msg}"),
            AppError::Storage(msg) => write!(f, "storage error: {msg}"),
            AppError::Unsupported(op) => write!(f, "{op} is not supported on this platform"),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias using [`AppError`].
pub type AppResult<T> = Result<T, AppError>;
