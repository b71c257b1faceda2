//! Place map descriptor
//!
//! A serializable description of the map shown next to the place list;
//! any front-end widget can render it.

use serde::{Deserialize, Serialize};
use shared::models::Place;

/// Map centre: Bordeaux
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    latitude: 44.841767,
    longitude: -0.574961,
};
pub const DEFAULT_ZOOM: u8 = 14;
pub const DEFAULT_WIDTH: &str = "100%";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    Roadmap,
    Satellite,
    Hybrid,
    Terrain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Coordinate,
    /// Text of the marker's info window
    pub info_window: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceMap {
    pub center: Coordinate,
    pub zoom: u8,
    pub auto_zoom: bool,
    pub map_type: MapType,
    /// CSS width of the map container
    pub width: String,
    pub markers: Vec<Marker>,
}

impl PlaceMap {
    /// Map with one marker per place located by non-zero coordinates
    pub fn for_places(places: &[Place]) -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            auto_zoom: false,
            map_type: MapType::Hybrid,
            width: DEFAULT_WIDTH.to_string(),
            markers: places.iter().filter_map(marker_for).collect(),
        }
    }
}

fn marker_for(place: &Place) -> Option<Marker> {
    match (place.latitude, place.longitude) {
        (Some(latitude), Some(longitude)) if latitude != 0.0 && longitude != 0.0 => Some(Marker {
            position: Coordinate {
                latitude,
                longitude,
            },
            info_window: place.name.clone(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, latitude: Option<f64>, longitude: Option<f64>) -> Place {
        Place {
            id: 1,
            name: name.to_string(),
            latitude,
            longitude,
            created_at: 0,
            modified_at: None,
        }
    }

    #[test]
    fn test_markers_skip_missing_or_zero_coordinates() {
        let places = [
            place("Located", Some(44.84), Some(-0.57)),
            place("No latitude", None, Some(-0.57)),
            place("No longitude", Some(44.84), None),
            place("Zero latitude", Some(0.0), Some(-0.57)),
            place("Zero longitude", Some(44.84), Some(0.0)),
        ];

        let map = PlaceMap::for_places(&places);
        assert_eq!(map.markers.len(), 1);
        assert_eq!(map.markers[0].info_window, "Located");
        assert_eq!(
            map.markers[0].position,
            Coordinate {
                latitude: 44.84,
                longitude: -0.57
            }
        );
    }

    #[test]
    fn test_fixed_settings() {
        let map = PlaceMap::for_places(&[]);
        assert_eq!(map.center, DEFAULT_CENTER);
        assert_eq!(map.zoom, 14);
        assert!(!map.auto_zoom);
        assert_eq!(map.map_type, MapType::Hybrid);
        assert_eq!(map.width, "100%");
        assert!(map.markers.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(PlaceMap::for_places(&[])).unwrap();
        assert_eq!(json["map_type"], "hybrid");
        assert_eq!(json["center"]["latitude"], 44.841767);
        assert_eq!(json["auto_zoom"], false);
    }
}
