//! Order Group Model

use serde::{Deserialize, Serialize};

/// Order group entity (a time-boxed group order at a place)
///
/// `token` is the public lookup key and is unique across all order groups.
/// `expires_at` is only set by the interactive channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderGroup {
    pub id: i64,
    pub token: String,
    pub expires_at: Option<i64>,
    pub place_id: i64,
    pub user_id: Option<i64>,
    pub created_at: i64,
    pub modified_at: Option<i64>,
}

super::impl_timestamped!(OrderGroup);

/// Submission body for opening an order group, tagged by channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum OrderGroupSubmission {
    /// Widget-driven request carrying a raw expiration date
    Interactive { expiration_date: String },
    /// Classic form post
    Plain(PlainOrderGroupForm),
}

/// Fields of the plain order group form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainOrderGroupForm {
    /// Hidden field naming the place the form was rendered for
    pub place_id: i64,
}

/// Result of opening an order group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenedOrderGroup {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_url: Option<String>,
}
