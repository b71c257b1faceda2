//! API routes
//!
//! - [`health`] - liveness
//! - [`auth`] - registration, login, current user
//! - [`places`] - place CRUD, list page with map
//! - [`meals`] - meals of a place
//! - [`menus`] - menus of a place and their meals
//! - [`order_groups`] - opening and looking up order groups

pub mod auth;
pub mod health;
pub mod meals;
pub mod menus;
pub mod order_groups;
pub mod places;

pub use crate::utils::{ApiResponse, AppResult};
