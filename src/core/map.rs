use crate::{
    core::{
        geo::{LatLng, LatLngBounds, Point},
        viewport::Viewport,
    },
    layers::{base::LayerTrait, manager::LayerManager},
    MapError, Result,
};

#[derive(Debug, Clone)]
pub struct MapOptions {
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    pub attribution_control: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            min_zoom: None,
            max_zoom: None,
            attribution_control: true,
        }
    }
}

/// The map aggregate: a viewport plus the layers drawn into it.
pub struct Map {
    pub viewport: Viewport,
    layers: LayerManager,
    options: MapOptions,
}

impl Map {
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        let viewport = Viewport::new(center, zoom, size);
        Self::with_options(viewport, MapOptions::default())
    }

    pub fn with_options(viewport: Viewport, options: MapOptions) -> Self {
        let mut map = Self {
            viewport,
            layers: LayerManager::new(),
            options,
        };

        if let (Some(min), Some(max)) = (map.options.min_zoom, map.options.max_zoom) {
            map.viewport.set_zoom_limits(min, max);
        }

        map
    }

    /// Moves the viewport to the given center and zoom.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);
        log::debug!(
            "view changed: center=({:.4}, {:.4}) zoom={}",
            self.viewport.center.lat,
            self.viewport.center.lng,
            self.viewport.zoom
        );
    }

    /// Fits the viewport to the given geographic bounds.
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: Option<f64>) {
        self.viewport.fit_bounds(bounds, padding);
    }

    /// Re-fits the viewport to a layer's bounds. This is the primitive the
    /// recenter control is built on.
    pub fn fit_to_layer(&mut self, layer_id: &str) -> Result<()> {
        let bounds = self
            .layers
            .get_layer(layer_id)
            .ok_or_else(|| MapError::Layer(format!("unknown layer '{}'", layer_id)))?
            .bounds()
            .ok_or_else(|| MapError::Layer(format!("layer '{}' has no bounds", layer_id)))?;

        self.viewport.fit_bounds(&bounds, None);
        Ok(())
    }

    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        self.layers.add_layer(layer)
    }

    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.layers.remove_layer(layer_id)
    }

    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get_layer(layer_id)
    }

    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn LayerTrait) -> R,
    {
        self.layers.with_layer_mut(layer_id, f)
    }

    pub fn list_layers(&self) -> Vec<String> {
        self.layers.list_layers()
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }
}
