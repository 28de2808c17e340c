use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] minreq::Error),

    #[error("Server returned status {0}")]
    Status(i32),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Draft error: {0}")]
    Draft(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
