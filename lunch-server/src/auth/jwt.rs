//! JWT token service
//!
//! Issues and validates HS256 access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted secret length in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret (at least 32 bytes)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

impl JwtConfig {
    /// Configuration with a random development secret and default claims
    pub fn generated() -> Self {
        Self {
            secret: generate_secure_printable_jwt_secret(),
            expiration_minutes: 1440,
            issuer: "lunch-server".to_string(),
            audience: "lunch-clients".to_string(),
        }
    }

    /// Read `JWT_*` variables
    ///
    /// A missing `JWT_SECRET` is tolerated in debug builds (a temporary
    /// secret is generated) and rejected in release builds.
    pub fn from_env() -> Result<Self, JwtError> {
        let defaults = Self::generated();
        Ok(Self {
            secret: load_jwt_secret()?.unwrap_or(defaults.secret),
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.expiration_minutes),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
        })
    }
}

/// JWT claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (Subject)
    pub sub: String,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Generate a printable random secret (development only)
pub fn generate_secure_printable_jwt_secret() -> String {
    const ALLOWED: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:,.<>?";

    let rng = SystemRandom::new();
    let mut bytes = [0u8; 64];
    if rng.fill(&mut bytes).is_err() {
        return "LunchServerDevelopmentOnlySecretKey-2024!".to_string();
    }

    bytes
        .iter()
        .map(|b| ALLOWED[(*b as usize) % ALLOWED.len()] as char)
        .collect()
}

/// Load `JWT_SECRET`, `Ok(None)` when it may be generated instead
fn load_jwt_secret() -> Result<Option<String>, JwtError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) => {
            if secret.len() < MIN_SECRET_LEN {
                return Err(JwtError::ConfigError(format!(
                    "JWT_SECRET must be at least {MIN_SECRET_LEN} characters long"
                )));
            }
            Ok(Some(secret))
        }
        Err(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!("JWT_SECRET not set! Generating temporary key for development.");
                Ok(None)
            }
            #[cfg(not(debug_assertions))]
            {
                Err(JwtError::ConfigError(
                    "JWT_SECRET environment variable must be set in production!".to_string(),
                ))
            }
        }
    }
}

/// JWT token service
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue an access token for a user
    pub fn generate_token(&self, user_id: i64, username: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an `Authorization` header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

/// Authenticated user, resolved from a validated token
///
/// Injected into request extensions by [`super::resolve_user`].
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = claims
            .sub
            .parse()
            .map_err(|_| JwtError::InvalidToken(format!("Invalid subject: {}", claims.sub)))?;
        Ok(Self {
            id,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::with_config(JwtConfig::generated())
    }

    #[test]
    fn test_generate_and_validate() {
        let jwt = service();
        let token = jwt.generate_token(42, "alice").unwrap();
        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");

        let user = CurrentUser::try_from(claims).unwrap();
        assert_eq!(user, CurrentUser { id: 42, username: "alice".into() });
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let token = service().generate_token(1, "bob").unwrap();
        assert!(service().validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token() {
        let jwt = JwtService::with_config(JwtConfig {
            expiration_minutes: -10,
            ..JwtConfig::generated()
        });
        let token = jwt.generate_token(1, "bob").unwrap();
        assert!(matches!(jwt.validate_token(&token), Err(JwtError::ExpiredToken)));
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(JwtService::extract_from_header("Bearer abc"), Some("abc"));
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }

    #[test]
    fn test_non_numeric_subject() {
        let claims = Claims {
            sub: "user:1".into(),
            username: "x".into(),
            exp: 0,
            iat: 0,
            iss: String::new(),
            aud: String::new(),
        };
        assert!(CurrentUser::try_from(claims).is_err());
    }
}
