//! Meal Model

use serde::{Deserialize, Serialize};

/// Meal entity, owned by a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub place_id: i64,
    pub created_at: i64,
    pub modified_at: Option<i64>,
}

super::impl_timestamped!(Meal);

/// Create meal payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealCreate {
    pub name: String,
    /// Menus of the same place to put the meal on
    #[serde(default)]
    pub menu_ids: Vec<i64>,
}

/// Update meal payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealUpdate {
    pub name: Option<String>,
    /// Replaces the meal's menu set when present
    pub menu_ids: Option<Vec<i64>>,
}

/// Meal with the ids of the menus it appears on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDetail {
    #[serde(flatten)]
    pub meal: Meal,
    pub menu_ids: Vec<i64>,
}
