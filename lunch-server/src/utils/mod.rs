//! Utilities: logging setup, date parsing, input validation

pub mod logger;
pub mod time;
pub mod validation;

// Unified error types live in `shared`
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
