//! # routemap
//!
//! A headless, Leaflet-style route map scene builder.
//!
//! Given an input data object (route coordinates, optional endpoint
//! weather reports, point-of-interest lists, checkpoints), the crate
//! builds a retained map scene exactly once: a viewport, a base tile
//! layer, a route polyline, markers with popups, and a recenter control.
//! Drawing pixels and fetching tiles/images is the hosting renderer's
//! job; the scene only carries URL templates and popup content.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod route;
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LatLngBounds, Point},
    map::{Map, MapOptions},
    viewport::Viewport,
};

pub use layers::{
    base::LayerTrait, manager::LayerManager, marker::Marker, polyline::Polyline, tile::TileLayer,
};

pub use ui::{
    controls::RecenterControl,
    popup::{Popup, PopupContent},
};

pub use route::{
    checkpoints::{generate_checkpoints, CheckpointOptions},
    data::{PointOfInterest, RouteCheckpoint, RouteMapData, WeatherReport},
    renderer::{render_route_map, RouteView},
};

pub use data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("route coordinates missing or empty")]
    EmptyRoute,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
