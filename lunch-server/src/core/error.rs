use thiserror::Error;

/// Startup and process-level errors
///
/// Request-level failures use [`shared::error::AppError`]; this type only
/// covers what can go wrong while bringing the server up or down.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
