//! Data models
//!
//! Shared between lunch-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` snowflakes, all timestamps are Unix milliseconds.

pub mod meal;
pub mod menu;
pub mod order_group;
pub mod place;
pub mod timestamped;
pub mod user;

pub(crate) use timestamped::impl_timestamped;

// Re-exports
pub use meal::*;
pub use menu::*;
pub use order_group::*;
pub use place::*;
pub use timestamped::Timestamped;
pub use user::*;
