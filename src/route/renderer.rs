//! The single-shot route scene build.
//!
//! `render_route_map` runs the fixed sequence once: map + base tile layer,
//! empty-route guard, viewport fit, route polyline, weather markers, POI
//! markers, checkpoint markers, recenter control. Missing or malformed
//! optional inputs degrade silently; the only recognized failure is an
//! absent or empty coordinate sequence.

use crate::{
    constants,
    core::{
        geo::{LatLng, LatLngBounds, Point},
        map::Map,
    },
    layers::{base::LayerTrait, marker::Marker, polyline::Polyline, tile::TileLayer},
    route::data::{RouteMapData, WeatherReport},
    ui::{
        controls::RecenterControl,
        popup::{Popup, PopupContent},
    },
    MapError, Result,
};

/// Layer id of the base tile layer.
pub const BASE_LAYER_ID: &str = "base";
/// Layer id of the route polyline.
pub const ROUTE_LAYER_ID: &str = "route";

/// Z-order: tiles at the bottom, the route above, markers on top.
const ROUTE_Z_INDEX: i32 = 10;
const MARKER_Z_INDEX: i32 = 20;

/// The built scene: the map plus explicit handles to the pieces the
/// recenter interaction needs. No closure capture; the control gets the
/// map passed on each activation.
pub struct RouteView {
    pub map: Map,
    pub route_layer_id: String,
    pub recenter_control: RecenterControl,
}

impl RouteView {
    /// Activates the recenter control: restores the viewport to the route
    /// polyline's bounds.
    pub fn recenter(&mut self) -> Result<()> {
        self.recenter_control.activate(&mut self.map)
    }

    /// Geographic bounds of the route polyline.
    pub fn route_bounds(&self) -> Option<LatLngBounds> {
        self.map
            .get_layer(&self.route_layer_id)
            .and_then(|layer| layer.bounds())
    }

    /// Ids of all marker layers, in render order.
    pub fn marker_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        self.map.layers().for_each_layer(|layer| {
            if layer.kind() == crate::layers::base::LayerKind::Marker {
                ids.push(layer.id().to_string());
            }
        });
        ids
    }
}

/// Builds the route scene exactly once.
///
/// `size` is the pixel size of the hosting container. Returns
/// [`MapError::EmptyRoute`] (after logging a diagnostic) when the
/// coordinate sequence is empty; in that case only the map and base tile
/// layer exist and nothing has been rendered.
pub fn render_route_map(data: &RouteMapData, size: Point) -> Result<RouteView> {
    let mut map = Map::new(constants::DEFAULT_CENTER, constants::DEFAULT_ZOOM, size);

    let base = TileLayer::openstreetmap(BASE_LAYER_ID.to_string(), "OpenStreetMap".to_string());
    map.add_layer(Box::new(base))?;

    if data.coordinates.is_empty() {
        log::error!("no route coordinates available; nothing to render");
        return Err(MapError::EmptyRoute.into());
    }

    let path = data.path();
    // The guard above makes these lookups infallible
    let origin = path[0];
    let destination = path[path.len() - 1];

    let bounds = LatLngBounds::from_points(&path)
        .ok_or_else(|| MapError::InvalidCoordinates("empty path".to_string()))?;
    map.fit_bounds(&bounds, None);

    let mut route = Polyline::new(ROUTE_LAYER_ID.to_string(), path);
    route.set_z_index(ROUTE_Z_INDEX);
    map.add_layer(Box::new(route))?;

    add_weather_marker(
        &mut map,
        "weather-origin",
        "Weather at the origin",
        origin,
        data.origin_weather.as_ref(),
    )?;
    add_weather_marker(
        &mut map,
        "weather-destination",
        "Weather at the destination",
        destination,
        data.destination_weather.as_ref(),
    )?;

    for (i, poi) in data.origin_pois.iter().enumerate() {
        add_poi_marker(&mut map, format!("poi-origin-{}", i), poi)?;
    }
    for (i, poi) in data.destination_pois.iter().enumerate() {
        add_poi_marker(&mut map, format!("poi-destination-{}", i), poi)?;
    }

    for (i, checkpoint) in data.checkpoints.iter().enumerate() {
        let popup = Popup::new(PopupContent::Checkpoint {
            distance_km: checkpoint.distance_km,
            eta_hours: checkpoint.eta_hours,
        });
        let mut marker = Marker::new(format!("checkpoint-{}", i), checkpoint.position())
            .with_popup(popup);
        marker.set_z_index(MARKER_Z_INDEX);
        map.add_layer(Box::new(marker))?;
    }

    log::debug!(
        "route scene built: {} layers, viewport center ({:.4}, {:.4}) zoom {}",
        map.layers().len(),
        map.viewport.center.lat,
        map.viewport.center.lng,
        map.viewport.zoom
    );

    Ok(RouteView {
        map,
        route_layer_id: ROUTE_LAYER_ID.to_string(),
        recenter_control: RecenterControl::new(ROUTE_LAYER_ID.to_string()),
    })
}

/// Places a weather marker when the report is present, not error-flagged,
/// and complete; otherwise the endpoint is left bare.
fn add_weather_marker(
    map: &mut Map,
    id: &str,
    heading: &str,
    position: LatLng,
    report: Option<&WeatherReport>,
) -> Result<()> {
    let report = match report {
        Some(r) if r.is_renderable() => r,
        Some(r) => {
            if let Some(message) = &r.error {
                log::warn!("skipping weather marker '{}': {}", id, message);
            }
            return Ok(());
        }
        None => return Ok(()),
    };

    // is_renderable guarantees the fields below
    let popup = Popup::new(PopupContent::Weather {
        heading: heading.to_string(),
        temperature: report.temperature.unwrap_or_default(),
        description: report.description.clone().unwrap_or_default(),
        icon: report.icon.clone().unwrap_or_default(),
    });

    let mut marker = Marker::new(id.to_string(), position).with_popup(popup);
    marker.set_z_index(MARKER_Z_INDEX);
    map.add_layer(Box::new(marker))
}

fn add_poi_marker(
    map: &mut Map,
    id: String,
    poi: &crate::route::data::PointOfInterest,
) -> Result<()> {
    let popup = Popup::new(PopupContent::PointOfInterest {
        name: poi.name.clone(),
        category: constants::POI_CATEGORY.to_string(),
    });
    let mut marker = Marker::new(id, poi.position()).with_popup(popup);
    marker.set_z_index(MARKER_Z_INDEX);
    map.add_layer(Box::new(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::data::{PointOfInterest, RouteCheckpoint};

    fn sample_data() -> RouteMapData {
        RouteMapData {
            coordinates: vec![[-58.4, -34.6], [-56.2, -34.9]],
            origin_weather: Some(WeatherReport::new(20.0, "clear", "01d")),
            destination_weather: Some(WeatherReport::from_error("Invalid API key")),
            origin_pois: vec![PointOfInterest {
                name: "Cafe".to_string(),
                lat: -34.6,
                lon: -58.4,
            }],
            destination_pois: Vec::new(),
            checkpoints: vec![RouteCheckpoint {
                lat: -34.0,
                lon: -57.0,
                distance_km: 50.0,
                eta_hours: 1.5,
            }],
        }
    }

    fn container() -> Point {
        Point::new(800.0, 600.0)
    }

    #[test]
    fn test_empty_route_is_rejected() {
        let data = RouteMapData::default();
        let result = render_route_map(&data, container());

        let err = result.err().expect("empty route must fail");
        assert!(err.to_string().contains("route coordinates"));
    }

    #[test]
    fn test_scene_layer_inventory() {
        let view = render_route_map(&sample_data(), container()).unwrap();

        // base + route + 1 weather + 1 POI + 1 checkpoint
        assert_eq!(view.map.layers().len(), 5);
        assert!(view.map.get_layer(BASE_LAYER_ID).is_some());
        assert!(view.map.get_layer(ROUTE_LAYER_ID).is_some());
        assert!(view.map.get_layer("weather-origin").is_some());
        assert!(view.map.get_layer("weather-destination").is_none());
        assert!(view.map.get_layer("poi-origin-0").is_some());
        assert!(view.map.get_layer("checkpoint-0").is_some());
    }

    #[test]
    fn test_weather_marker_at_first_coordinate() {
        let view = render_route_map(&sample_data(), container()).unwrap();

        let layer = view.map.get_layer("weather-origin").unwrap();
        let marker = layer.as_any().downcast_ref::<Marker>().unwrap();
        assert_eq!(marker.position(), LatLng::new(-34.6, -58.4));

        let html = marker.popup().unwrap().to_html();
        assert!(html.contains("20°C"));
        assert!(html.contains("clear"));
        assert!(html.contains("01d@2x.png"));
    }

    #[test]
    fn test_viewport_fits_route() {
        let view = render_route_map(&sample_data(), container()).unwrap();

        let visible = view.map.viewport().bounds();
        for pair in &sample_data().coordinates {
            assert!(visible.contains(&LatLng::from_lon_lat(*pair)));
        }
    }

    #[test]
    fn test_recenter_round_trip() {
        let mut view = render_route_map(&sample_data(), container()).unwrap();
        let fitted = view.map.viewport().clone();

        view.map.set_view(LatLng::new(51.5, -0.13), 15.0);
        assert_ne!(view.map.viewport(), &fitted);

        view.recenter().unwrap();
        assert_eq!(view.map.viewport(), &fitted);
    }

    #[test]
    fn test_single_coordinate_route() {
        let data = RouteMapData::from_coordinates(vec![[-58.4, -34.6]]);
        let view = render_route_map(&data, container()).unwrap();

        // Degenerate but valid: origin == destination
        let route = view
            .map
            .get_layer(ROUTE_LAYER_ID)
            .unwrap()
            .as_any()
            .downcast_ref::<Polyline>()
            .unwrap();
        assert_eq!(route.points().len(), 1);
        assert!(view.route_bounds().unwrap().contains(&LatLng::new(-34.6, -58.4)));
    }
}
