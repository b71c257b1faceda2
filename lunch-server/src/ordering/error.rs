use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::repository::{RepoError, order_group};

/// Why an expiration date was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRejection {
    /// Not a `dd/mm/yyyy [HH:MM[:SS]]` local time
    Unparseable,
    /// Closes before the earliest allowed instant
    TooSoon { threshold: DateTime<Utc> },
}

/// Order group workflow errors
#[derive(Debug, Error)]
pub enum OrderGroupError {
    #[error("Authentication required to open an order group")]
    Unauthenticated,

    #[error("Invalid expiration date {input:?}")]
    InvalidDate {
        input: String,
        rejection: DateRejection,
    },

    #[error("Order group form is invalid")]
    ValidationFailed(BTreeMap<String, String>),

    #[error(transparent)]
    Store(#[from] RepoError),
}

impl From<OrderGroupError> for AppError {
    fn from(err: OrderGroupError) -> Self {
        match err {
            OrderGroupError::Unauthenticated => AppError::with_message(
                ErrorCode::NotAuthenticated,
                "Sign in to open an order group",
            ),
            OrderGroupError::InvalidDate { input, rejection } => {
                let err = AppError::new(ErrorCode::OrderGroupInvalidDate)
                    .with_detail("expiration_date", input);
                match rejection {
                    DateRejection::Unparseable => err.with_detail("reason", "unparseable"),
                    DateRejection::TooSoon { threshold } => err
                        .with_detail("reason", "too_soon")
                        .with_detail("earliest", threshold.to_rfc3339()),
                }
            }
            OrderGroupError::ValidationFailed(fields) => AppError::field_errors(fields),
            OrderGroupError::Store(e) if order_group::is_token_conflict(&e) => {
                AppError::with_message(ErrorCode::OrderGroupTokenConflict, e.to_string())
            }
            OrderGroupError::Store(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (OrderGroupError::Unauthenticated, 1001, StatusCode::UNAUTHORIZED),
            (
                OrderGroupError::InvalidDate {
                    input: "x".into(),
                    rejection: DateRejection::Unparseable,
                },
                4002,
                StatusCode::BAD_REQUEST,
            ),
            (
                OrderGroupError::ValidationFailed(BTreeMap::from([(
                    "place_id".to_string(),
                    "mismatch".to_string(),
                )])),
                2,
                StatusCode::BAD_REQUEST,
            ),
            (
                OrderGroupError::Store(RepoError::Duplicate(
                    "UNIQUE constraint failed: order_group.token".into(),
                )),
                4003,
                StatusCode::CONFLICT,
            ),
            (
                OrderGroupError::Store(RepoError::Duplicate(
                    "UNIQUE constraint failed: order_group.id".into(),
                )),
                4,
                StatusCode::CONFLICT,
            ),
            (
                OrderGroupError::Store(RepoError::Database("disk full".into())),
                9002,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, code, status) in cases {
            let app: AppError = err.into();
            assert_eq!(app.code.code(), code);
            assert_eq!(app.http_status(), status);
        }
    }

    #[test]
    fn test_validation_details_carry_fields() {
        let app: AppError = OrderGroupError::ValidationFailed(BTreeMap::from([(
            "place_id".to_string(),
            "does not match".to_string(),
        )]))
        .into();
        assert_eq!(app.details.unwrap()["place_id"], "does not match");
    }
}
