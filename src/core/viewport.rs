use crate::core::geo::{LatLng, LatLngBounds, Point, EARTH_RADIUS};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default zoom range; matches the base tile layer's coverage.
const DEFAULT_MIN_ZOOM: f64 = 0.0;
const DEFAULT_MAX_ZOOM: f64 = 19.0;

/// Manages the current view of the map: center, zoom, and screen dimensions.
///
/// This is the only piece of scene state that mutates after the scene is
/// built (the recenter control re-fits it to the route bounds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM),
            size,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Sets the center of the viewport, clamped to world bounds
    pub fn set_center(&mut self, center: LatLng) {
        self.center = LatLng::new(
            LatLng::clamp_lat(center.lat),
            center.lng.clamp(-180.0, 180.0),
        );
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Sets the zoom limits
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level
    /// using the standard Web Mercator projection (EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let scale = 256.0 * 2_f64.powf(z);

        let clamped = LatLng::new(LatLng::clamp_lat(lat_lng.lat), lat_lng.lng);
        let mercator = clamped.to_mercator();

        let world = 2.0 * PI * EARTH_RADIUS;
        let pixel_x = (mercator.x + PI * EARTH_RADIUS) / world * scale;
        let pixel_y = (-mercator.y + PI * EARTH_RADIUS) / world * scale;

        Point::new(pixel_x, pixel_y)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let z = zoom.unwrap_or(self.zoom);
        let scale = 256.0 * 2_f64.powf(z);

        let world = 2.0 * PI * EARTH_RADIUS;
        let x = pixel.x / scale * world - PI * EARTH_RADIUS;
        let y = PI * EARTH_RADIUS - pixel.y / scale * world;

        LatLng::from_mercator(Point::new(x, y))
    }

    /// Converts a geographical coordinate to screen pixel coordinates
    /// (container relative)
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        let projected = self.project(lat_lng, None);
        let center = self.project(&self.center, None);
        Point::new(
            projected.x - center.x + self.size.x / 2.0,
            projected.y - center.y + self.size.y / 2.0,
        )
    }

    /// Converts screen pixel coordinates back to geographical coordinates
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        let center = self.project(&self.center, None);
        let projected = Point::new(
            pixel.x + center.x - self.size.x / 2.0,
            pixel.y + center.y - self.size.y / 2.0,
        );
        self.unproject(&projected, None)
    }

    /// Gets the current viewport bounds in geographical coordinates
    pub fn bounds(&self) -> LatLngBounds {
        let nw = self.pixel_to_lat_lng(&Point::new(0.0, 0.0));
        let se = self.pixel_to_lat_lng(&Point::new(self.size.x, self.size.y));

        LatLngBounds::new(LatLng::new(se.lat, nw.lng), LatLng::new(nw.lat, se.lng))
    }

    /// Fits the viewport to contain the given bounds.
    ///
    /// Centers on the bounds and picks the largest integer zoom at which the
    /// bounds fit inside the padded pixel viewport.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: Option<f64>) {
        let padding = padding.unwrap_or(crate::constants::FIT_BOUNDS_PADDING);

        self.set_center(bounds.center());

        let inner = Point::new(
            (self.size.x - 2.0 * padding).max(1.0),
            (self.size.y - 2.0 * padding).max(1.0),
        );

        let mut best_zoom = self.min_zoom;
        for test_zoom in (self.min_zoom as i32)..=(self.max_zoom as i32) {
            let zoom = test_zoom as f64;

            let nw = self.project(
                &LatLng::new(bounds.north_east.lat, bounds.south_west.lng),
                Some(zoom),
            );
            let se = self.project(
                &LatLng::new(bounds.south_west.lat, bounds.north_east.lng),
                Some(zoom),
            );

            let bounds_width = (se.x - nw.x).abs();
            let bounds_height = (se.y - nw.y).abs();

            if bounds_width <= inner.x && bounds_height <= inner.y {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        self.set_zoom(best_zoom);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(
            LatLng::new(40.7128, -74.0060),
            10.0,
            Point::new(800.0, 600.0),
        );

        assert_eq!(viewport.zoom, 10.0);
        assert_eq!(viewport.center.lat, 40.7128);
        assert_eq!(viewport.size.x, 800.0);
    }

    #[test]
    fn test_coordinate_conversion() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 1.0, Point::new(512.0, 512.0));

        let center_pixel = Point::new(256.0, 256.0);
        let center_lat_lng = viewport.pixel_to_lat_lng(&center_pixel);

        // Should be approximately at the center (0, 0)
        assert!((center_lat_lng.lat - 0.0).abs() < 0.01);
        assert!((center_lat_lng.lng - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_pixel_round_trip() {
        let viewport = Viewport::new(LatLng::new(-34.6, -58.4), 8.0, Point::new(800.0, 600.0));

        let coord = LatLng::new(-34.9, -56.2);
        let pixel = viewport.lat_lng_to_pixel(&coord);
        let back = viewport.pixel_to_lat_lng(&pixel);

        assert!((back.lat - coord.lat).abs() < 1e-6);
        assert!((back.lng - coord.lng).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = Viewport::default();
        viewport.set_zoom_limits(2.0, 15.0);

        viewport.set_zoom(1.0); // Below minimum
        assert_eq!(viewport.zoom, 2.0);

        viewport.set_zoom(20.0); // Above maximum
        assert_eq!(viewport.zoom, 15.0);
    }

    #[test]
    fn test_fit_bounds_contains_all_points() {
        let mut viewport = Viewport::new(LatLng::new(0.0, 0.0), 2.0, Point::new(800.0, 600.0));

        let points = vec![LatLng::new(-34.6, -58.4), LatLng::new(-34.9, -56.2)];
        let bounds = LatLngBounds::from_points(&points).unwrap();
        viewport.fit_bounds(&bounds, None);

        let view = viewport.bounds();
        for point in &points {
            assert!(view.contains(point), "viewport should contain {:?}", point);
        }
    }

    #[test]
    fn test_fit_bounds_zooms_in_on_small_area() {
        let mut viewport = Viewport::new(LatLng::new(0.0, 0.0), 2.0, Point::new(800.0, 600.0));

        let bounds = LatLngBounds::from_coords(-34.61, -58.41, -34.59, -58.39);
        viewport.fit_bounds(&bounds, None);

        assert!(viewport.zoom > 8.0);
        let center = bounds.center();
        assert!((viewport.center.lat - center.lat).abs() < 1e-9);
        assert!((viewport.center.lng - center.lng).abs() < 1e-9);
    }
}
