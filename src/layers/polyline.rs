use crate::{
    constants,
    core::geo::{LatLng, LatLngBounds},
    layers::base::{LayerKind, LayerProperties, LayerTrait},
};
use serde::{Deserialize, Serialize};

/// RGBA color for vector styling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Style for line features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Stroke weight in pixels
    pub weight: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: constants::ROUTE_COLOR,
            weight: constants::ROUTE_WEIGHT,
            opacity: 1.0,
        }
    }
}

/// An ordered path of geographical coordinates, drawn as a stroked line.
pub struct Polyline {
    properties: LayerProperties,
    points: Vec<LatLng>,
    style: LineStyle,
}

impl Polyline {
    pub fn new(id: String, points: Vec<LatLng>) -> Self {
        let properties = LayerProperties::new(id, "Polyline".to_string(), LayerKind::Polyline);
        Self {
            properties,
            points,
            style: LineStyle::default(),
        }
    }

    /// Builds a polyline from `[longitude, latitude]` pairs, reordering
    /// each pair into a `LatLng`.
    pub fn from_lon_lat_pairs(id: String, pairs: &[[f64; 2]]) -> Self {
        let points = pairs.iter().copied().map(LatLng::from_lon_lat).collect();
        Self::new(id, points)
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// First point of the path, if any.
    pub fn first(&self) -> Option<&LatLng> {
        self.points.first()
    }

    /// Last point of the path, if any.
    pub fn last(&self) -> Option<&LatLng> {
        self.points.last()
    }
}

impl LayerTrait for Polyline {
    crate::impl_layer_trait!(Polyline, properties);

    fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_from_lon_lat_pairs() {
        let pairs = [[-58.4, -34.6], [-56.2, -34.9]];
        let polyline = Polyline::from_lon_lat_pairs("route".to_string(), &pairs);

        assert_eq!(polyline.points().len(), 2);
        assert_eq!(polyline.first().unwrap().lat, -34.6);
        assert_eq!(polyline.first().unwrap().lng, -58.4);
        assert_eq!(polyline.last().unwrap().lng, -56.2);
    }

    #[test]
    fn test_polyline_bounds_cover_points() {
        let pairs = [[-58.4, -34.6], [-56.2, -34.9], [-57.0, -34.0]];
        let polyline = Polyline::from_lon_lat_pairs("route".to_string(), &pairs);

        let bounds = polyline.bounds().unwrap();
        for point in polyline.points() {
            assert!(bounds.contains(point));
        }
    }

    #[test]
    fn test_empty_polyline_has_no_bounds() {
        let polyline = Polyline::new("route".to_string(), Vec::new());
        assert!(polyline.bounds().is_none());
    }

    #[test]
    fn test_default_style_is_blue_weight_four() {
        let polyline = Polyline::new("route".to_string(), vec![LatLng::new(0.0, 0.0)]);
        assert_eq!(polyline.style().color, constants::ROUTE_COLOR);
        assert_eq!(polyline.style().color, Color::rgb(0, 0, 255));
        assert_eq!(polyline.style().weight, 4.0);
    }
}
