//! Place Model

use serde::{Deserialize, Serialize};

use super::{Meal, Menu};
use crate::util::double_option;

/// Place entity (a venue that serves meals)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: i64,
    pub modified_at: Option<i64>,
}

super::impl_timestamped!(Place);

/// Create place payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceCreate {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Update place payload
///
/// Coordinates: absent keeps the stored value, `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceUpdate {
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<Option<f64>>,
}

/// Place with its meals and menus (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetail {
    #[serde(flatten)]
    pub place: Place,
    pub meals: Vec<Meal>,
    pub menus: Vec<Menu>,
}
