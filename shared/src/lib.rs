//! Shared types for the lunch service
//!
//! Domain models, the unified error system, pagination and id helpers used
//! by the server and by API clients.

pub mod error;
pub mod models;
pub mod pagination;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use pagination::{PageQuery, PaginatedResponse};
