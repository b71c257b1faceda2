//! Service wiring

pub mod http;

pub use self::http::{build_app, build_router};
