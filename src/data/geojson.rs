//! GeoJSON interchange for route data.
//!
//! The route and its checkpoints can be exported as a `FeatureCollection`
//! for consumers that speak GeoJSON instead of the route payload format.
//! Coordinates follow the GeoJSON convention: `[longitude, latitude]`.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::route::data::RouteMapData;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON object. Features inside a collection are stored as
/// `GeoJson::Feature` so the mandatory `"type": "Feature"` member is
/// carried through (de)serialization at every level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJson> },
}

impl GeoJson {
    /// Parses a GeoJSON document from a string.
    pub fn from_str(geojson_str: &str) -> crate::Result<Self> {
        serde_json::from_str(geojson_str)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)).into())
    }

    pub fn features(&self) -> Vec<&GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features } => features
                .iter()
                .flat_map(|item| item.features())
                .collect(),
        }
    }

    /// Bounding box of all feature geometries, if any have coordinates.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for feature in self.features() {
            if let Some(geometry) = &feature.geometry {
                if let Some(geom_bounds) = geometry.bounds() {
                    if let Some(ref mut b) = bounds {
                        b.extend(&geom_bounds.south_west);
                        b.extend(&geom_bounds.north_east);
                    } else {
                        bounds = Some(geom_bounds);
                    }
                }
            }
        }
        bounds
    }
}

impl GeoJsonGeometry {
    pub fn to_lat_lng_points(&self) -> Vec<LatLng> {
        match self {
            GeoJsonGeometry::Point { coordinates } => {
                vec![LatLng::from_lon_lat(*coordinates)]
            }
            GeoJsonGeometry::LineString { coordinates } => coordinates
                .iter()
                .map(|c| LatLng::from_lon_lat(*c))
                .collect(),
        }
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.to_lat_lng_points())
    }
}

/// Exports a route payload as a `FeatureCollection`: one `LineString` for
/// the route followed by a `Point` per checkpoint, carrying its distance
/// and estimated time as properties.
pub fn route_to_geojson(data: &RouteMapData) -> GeoJson {
    let mut features = Vec::with_capacity(1 + data.checkpoints.len());

    features.push(GeoJson::Feature(GeoJsonFeature {
        id: Some(serde_json::Value::from("route")),
        geometry: Some(GeoJsonGeometry::LineString {
            coordinates: data.coordinates.clone(),
        }),
        properties: None,
    }));

    for checkpoint in &data.checkpoints {
        let mut properties = HashMap::new();
        properties.insert(
            "kilometro".to_string(),
            serde_json::Value::from(checkpoint.distance_km),
        );
        properties.insert(
            "tiempo_estimado".to_string(),
            serde_json::Value::from(checkpoint.eta_hours),
        );
        features.push(GeoJson::Feature(GeoJsonFeature {
            id: None,
            geometry: Some(GeoJsonGeometry::Point {
                coordinates: [checkpoint.lon, checkpoint.lat],
            }),
            properties: Some(properties),
        }));
    }

    GeoJson::FeatureCollection { features }
}
