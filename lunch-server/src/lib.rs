//! Lunch server: places, their meals and menus, and group lunch orders
//!
//! # Layout
//!
//! ```text
//! lunch-server/src/
//! ├── core/       # config, state, server lifecycle
//! ├── auth/       # JWT, argon2, current user
//! ├── db/         # SQLite pool, migrations, repositories
//! ├── ordering/   # order group workflow
//! ├── map.rs      # place map descriptor
//! ├── api/        # HTTP routes and handlers
//! ├── services/   # router assembly
//! └── utils/      # logging, date parsing, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod map;
pub mod ordering;
pub mod services;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use ordering::{Clock, FixedClock, OrderGroupError, OrderGroupWorkflow, SystemClock};
pub use services::build_router;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
