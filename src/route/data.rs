//! The input data object a route scene is built from.
//!
//! The upstream page injects this state server-side before load; the wire
//! field names (Spanish) are the contract and are preserved through serde
//! renames.

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// Weather report for a route endpoint.
///
/// The upstream weather service either returns a full record or a bare
/// `{"error": "..."}` object, so every data field is optional. A report is
/// rendered only when it carries no error and all three data fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(rename = "temperatura")]
    pub temperature: Option<f64>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "icono")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WeatherReport {
    pub fn new(temperature: f64, description: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            temperature: Some(temperature),
            description: Some(description.into()),
            icon: Some(icon.into()),
            error: None,
        }
    }

    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// A report is renderable iff it is not error-flagged and carries all
    /// data fields.
    pub fn is_renderable(&self) -> bool {
        self.error.is_none()
            && self.temperature.is_some()
            && self.description.is_some()
            && self.icon.is_some()
    }
}

/// A named location near a route endpoint, rendered with a fixed category
/// label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    #[serde(rename = "nombre")]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl PointOfInterest {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }
}

/// A point along the route annotated with distance traveled and estimated
/// arrival time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCheckpoint {
    pub lat: f64,
    pub lon: f64,
    /// Cumulative distance from the origin, in kilometers
    #[serde(rename = "kilometro")]
    pub distance_km: f64,
    /// Estimated time of arrival, in hours from departure
    #[serde(rename = "tiempo_estimado")]
    pub eta_hours: f64,
}

impl RouteCheckpoint {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lon)
    }
}

/// Everything the renderer consumes, as one explicit value instead of
/// ambient page globals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMapData {
    /// Ordered route coordinates as `[longitude, latitude]` pairs
    #[serde(rename = "routeCoordinates", default)]
    pub coordinates: Vec<[f64; 2]>,
    #[serde(rename = "climaOrigen", default, skip_serializing_if = "Option::is_none")]
    pub origin_weather: Option<WeatherReport>,
    #[serde(
        rename = "climaDestino",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub destination_weather: Option<WeatherReport>,
    #[serde(rename = "poisOrigen", default)]
    pub origin_pois: Vec<PointOfInterest>,
    #[serde(rename = "poisDestino", default)]
    pub destination_pois: Vec<PointOfInterest>,
    #[serde(rename = "routePoints", default)]
    pub checkpoints: Vec<RouteCheckpoint>,
}

impl RouteMapData {
    /// Builds an input object from raw coordinates only; the optional
    /// overlays start empty.
    pub fn from_coordinates(coordinates: Vec<[f64; 2]>) -> Self {
        Self {
            coordinates,
            ..Default::default()
        }
    }

    /// Parses the injected JSON blob.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let data = serde_json::from_str(json).map_err(crate::MapError::Serialization)?;
        Ok(data)
    }

    /// Route coordinates reordered into `LatLng`s.
    pub fn path(&self) -> Vec<LatLng> {
        self.coordinates
            .iter()
            .copied()
            .map(LatLng::from_lon_lat)
            .collect()
    }
}
