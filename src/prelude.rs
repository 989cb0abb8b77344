//! Prelude module for common routemap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use routemap::prelude::*;`.

pub use crate::core::{
    geo::{LatLng, LatLngBounds, Point},
    map::{Map, MapOptions},
    viewport::Viewport,
};

pub use crate::layers::{
    base::{LayerKind, LayerProperties, LayerTrait},
    manager::LayerManager,
    marker::Marker,
    polyline::{LineStyle, Polyline},
    tile::{TileLayer, TileLayerOptions},
};

pub use crate::ui::{
    controls::{ControlConfig, Position, RecenterControl},
    popup::{Popup, PopupContent},
};

pub use crate::route::{
    checkpoints::{generate_checkpoints, CheckpointOptions},
    data::{PointOfInterest, RouteCheckpoint, RouteMapData, WeatherReport},
    renderer::{render_route_map, RouteView},
};

pub use crate::data::geojson::{route_to_geojson, GeoJson, GeoJsonFeature, GeoJsonGeometry};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
