//! Menu Model

use serde::{Deserialize, Serialize};

use super::Meal;

/// Menu entity: a named set of a place's meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Menu {
    pub id: i64,
    pub name: String,
    pub place_id: i64,
    pub created_at: i64,
    pub modified_at: Option<i64>,
}

super::impl_timestamped!(Menu);

/// Create menu payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCreate {
    pub name: String,
}

/// Menu with its meals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDetail {
    #[serde(flatten)]
    pub menu: Menu,
    pub meals: Vec<Meal>,
}
