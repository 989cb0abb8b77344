use crate::{core::map::Map, MapError, Result};

/// Where a control is anchored inside the map container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Placement configuration shared by map controls.
#[derive(Debug, Clone)]
pub struct ControlConfig {
    pub visible: bool,
    pub position: Position,
    pub margin: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            visible: true,
            position: Position::TopRight,
            margin: 10.0,
        }
    }
}

/// The single interactive control of a route scene: a button that re-fits
/// the viewport to the bounds of its target layer (the route polyline).
///
/// The control holds the layer id and receives the map explicitly on
/// activation; no shared state is captured.
#[derive(Debug, Clone)]
pub struct RecenterControl {
    config: ControlConfig,
    label: String,
    target_layer: String,
}

impl RecenterControl {
    pub fn new(target_layer: String) -> Self {
        Self {
            config: ControlConfig::default(),
            label: "Center route".to_string(),
            target_layer,
        }
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = label;
        self
    }

    pub fn with_config(mut self, config: ControlConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target_layer(&self) -> &str {
        &self.target_layer
    }

    /// Activates the control: re-fits the map viewport to the target
    /// layer's bounds. Errors if the layer is gone or has no extent.
    pub fn activate(&self, map: &mut Map) -> Result<()> {
        let bounds = map
            .get_layer(&self.target_layer)
            .ok_or_else(|| MapError::Layer(format!("unknown layer '{}'", self.target_layer)))?
            .bounds()
            .ok_or_else(|| {
                MapError::Layer(format!("layer '{}' has no bounds", self.target_layer))
            })?;

        map.fit_bounds(&bounds, None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::{LatLng, Point};
    use crate::layers::polyline::Polyline;

    fn map_with_route() -> Map {
        let mut map = Map::new(LatLng::new(0.0, 0.0), 2.0, Point::new(800.0, 600.0));
        let polyline =
            Polyline::from_lon_lat_pairs("route".to_string(), &[[-58.4, -34.6], [-56.2, -34.9]]);
        map.add_layer(Box::new(polyline)).unwrap();
        map
    }

    #[test]
    fn test_recenter_restores_route_view() {
        let mut map = map_with_route();
        let control = RecenterControl::new("route".to_string());

        control.activate(&mut map).unwrap();
        let fitted_center = map.viewport.center;
        let fitted_zoom = map.viewport.zoom;

        // Wander off, then recenter
        map.set_view(LatLng::new(48.85, 2.35), 12.0);
        control.activate(&mut map).unwrap();

        assert_eq!(map.viewport.center, fitted_center);
        assert_eq!(map.viewport.zoom, fitted_zoom);
    }

    #[test]
    fn test_activate_unknown_layer_errors() {
        let mut map = map_with_route();
        let control = RecenterControl::new("missing".to_string());

        assert!(control.activate(&mut map).is_err());
    }

    #[test]
    fn test_default_placement() {
        let control = RecenterControl::new("route".to_string());
        assert_eq!(control.config().position, Position::TopRight);
        assert!(control.config().visible);
        assert_eq!(control.label(), "Center route");
    }
}
