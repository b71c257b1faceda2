//! Input validation helpers
//!
//! Text length limits and range checks shared by the CRUD handlers.
//! SQLite TEXT has no built-in length enforcement.

use shared::error::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: place, meal, menu
pub const MAX_NAME_LEN: usize = 200;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 64;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, passes [`validate_required_text`].
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate that an optional number, if present, is finite and within `min..=max`.
pub fn validate_range(value: Option<f64>, field: &str, min: f64, max: f64) -> Result<(), AppError> {
    if let Some(v) = value
        && !(v.is_finite() && (min..=max).contains(&v))
    {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between {min} and {max}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

pub fn validate_latitude(value: Option<f64>) -> Result<(), AppError> {
    validate_range(value, "latitude", -90.0, 90.0)
}

pub fn validate_longitude(value: Option<f64>) -> Result<(), AppError> {
    validate_range(value, "longitude", -180.0, 180.0)
}

/// Usernames: 3..=64 chars, no whitespace
pub fn validate_username(username: &str) -> Result<(), AppError> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len)
        || username.chars().any(char::is_whitespace)
    {
        return Err(AppError::validation(format!(
            "username must be {MIN_USERNAME_LEN} to {MAX_USERNAME_LEN} characters without spaces"
        ))
        .with_detail("field", "username"));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LEN {
        return Err(AppError::with_message(
            ErrorCode::PasswordTooShort,
            format!("password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    if len > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long (max {MAX_PASSWORD_LEN})"
        ))
        .with_detail("field", "password"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Chez Paul", "name", MAX_NAME_LEN).is_ok());
        assert_eq!(
            validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err().code,
            ErrorCode::RequiredField
        );
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert_eq!(
            validate_required_text(&long, "name", MAX_NAME_LEN).unwrap_err().code,
            ErrorCode::ValidationFailed
        );
        // Limit counts characters, not bytes
        let accented = "é".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&accented, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "name", 5).is_ok());
        assert!(validate_optional_text(&Some("".into()), "name", 5).is_err());
    }

    #[test]
    fn test_coordinates() {
        assert!(validate_latitude(None).is_ok());
        assert!(validate_latitude(Some(44.84)).is_ok());
        assert!(validate_latitude(Some(-90.0)).is_ok());
        assert!(validate_latitude(Some(90.5)).is_err());
        assert!(validate_latitude(Some(f64::NAN)).is_err());
        assert!(validate_longitude(Some(-180.0)).is_ok());
        assert_eq!(
            validate_longitude(Some(200.0)).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[test]
    fn test_credentials() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("al").is_err());
        assert!(validate_username("al ice").is_err());
        assert!(validate_password("s3cretpass").is_ok());
        assert_eq!(
            validate_password("short").unwrap_err().code,
            ErrorCode::PasswordTooShort
        );
    }
}
