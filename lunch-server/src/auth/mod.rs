//! Authentication
//!
//! - [`JwtService`] - token issuing and validation
//! - [`CurrentUser`] - authenticated user context
//! - [`resolve_user`] - middleware attaching the optional current user
//! - [`password`] - argon2 hashing

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::resolve_user;
