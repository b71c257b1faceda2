//! Unified error codes for the lunch service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 3xxx: Place errors (places, meals, menus)
//! - 4xxx: Order group errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Username already taken
    UsernameExists = 1101,
    /// Password too short
    PasswordTooShort = 1102,

    // ==================== 3xxx: Place ====================
    /// Place not found
    PlaceNotFound = 3001,
    /// Meal not found
    MealNotFound = 3101,
    /// Meal belongs to another place
    MealPlaceMismatch = 3102,
    /// Menu not found
    MenuNotFound = 3201,

    // ==================== 4xxx: Order group ====================
    /// Order group not found
    OrderGroupNotFound = 4001,
    /// Expiration date is unparseable or closes too early
    OrderGroupInvalidDate = 4002,
    /// Generated token collided with an existing order group
    OrderGroupTokenConflict = 4003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::UsernameExists => "Username is already taken",
            ErrorCode::PasswordTooShort => "Password is too short",

            // Place
            ErrorCode::PlaceNotFound => "Place not found",
            ErrorCode::MealNotFound => "Meal not found",
            ErrorCode::MealPlaceMismatch => "Meal belongs to another place",
            ErrorCode::MenuNotFound => "Menu not found",

            // Order group
            ErrorCode::OrderGroupNotFound => "Order group not found",
            ErrorCode::OrderGroupInvalidDate => "Invalid expiration date",
            ErrorCode::OrderGroupTokenConflict => "Order group token already in use",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1101 => Ok(ErrorCode::UsernameExists),
            1102 => Ok(ErrorCode::PasswordTooShort),

            // Place
            3001 => Ok(ErrorCode::PlaceNotFound),
            3101 => Ok(ErrorCode::MealNotFound),
            3102 => Ok(ErrorCode::MealPlaceMismatch),
            3201 => Ok(ErrorCode::MenuNotFound),

            // Order group
            4001 => Ok(ErrorCode::OrderGroupNotFound),
            4002 => Ok(ErrorCode::OrderGroupInvalidDate),
            4003 => Ok(ErrorCode::OrderGroupTokenConflict),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
