use crate::{layers::base::LayerTrait, prelude::HashMap, Result};

/// Manages layers for the map, handling ordering and lookup
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn LayerTrait>>,
    /// Ordered list of layer IDs (sorted by z-index)
    render_order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            render_order: Vec::new(),
        }
    }

    /// Adds a layer to the manager
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let layer_id = layer.id().to_string();
        let z_index = layer.z_index();

        // Replacing an existing id must not leave a stale render entry
        if self.layers.insert(layer_id.clone(), layer).is_some() {
            self.render_order.retain(|id| id != &layer_id);
        }

        // Insert in sorted order by z-index
        let insert_pos = self
            .render_order
            .iter()
            .position(|id| {
                self.layers
                    .get(id)
                    .map(|l| l.z_index() > z_index)
                    .unwrap_or(false)
            })
            .unwrap_or(self.render_order.len());

        self.render_order.insert(insert_pos, layer_id);
        Ok(())
    }

    /// Removes a layer from the manager
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.render_order.retain(|id| id != layer_id);
        self.layers.remove(layer_id)
    }

    /// Gets a reference to a layer by ID
    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// Applies a function to a specific layer mutably
    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn LayerTrait) -> R,
    {
        self.layers.get_mut(layer_id).map(|layer| f(layer.as_mut()))
    }

    /// Lists all layer IDs in render order
    pub fn list_layers(&self) -> Vec<String> {
        self.render_order.clone()
    }

    /// Gets all layers in render order
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Applies a function to each layer immutably in render order
    pub fn for_each_layer<F>(&self, mut f: F)
    where
        F: FnMut(&dyn LayerTrait),
    {
        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                f(layer.as_ref());
            }
        }
    }

    /// Gets the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the manager is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::layers::base::LayerTrait;
    use crate::layers::marker::Marker;
    use crate::layers::tile::TileLayer;

    #[test]
    fn test_add_and_get() {
        let mut manager = LayerManager::new();
        let marker = Marker::new("m1".to_string(), LatLng::new(-34.6, -58.4));

        manager.add_layer(Box::new(marker)).unwrap();
        assert_eq!(manager.len(), 1);
        assert!(manager.get_layer("m1").is_some());
        assert!(manager.get_layer("missing").is_none());
    }

    #[test]
    fn test_remove() {
        let mut manager = LayerManager::new();
        let marker = Marker::new("m1".to_string(), LatLng::new(0.0, 0.0));
        manager.add_layer(Box::new(marker)).unwrap();

        assert!(manager.remove_layer("m1").is_some());
        assert!(manager.is_empty());
        assert!(manager.remove_layer("m1").is_none());
    }

    #[test]
    fn test_replacing_id_keeps_single_render_entry() {
        let mut manager = LayerManager::new();

        manager
            .add_layer(Box::new(Marker::new("m1".to_string(), LatLng::new(0.0, 0.0))))
            .unwrap();
        manager
            .add_layer(Box::new(Marker::new("m1".to_string(), LatLng::new(1.0, 1.0))))
            .unwrap();

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.list_layers(), vec!["m1"]);

        let mut visits = 0;
        manager.for_each_layer(|_| visits += 1);
        assert_eq!(visits, 1);
    }

    #[test]
    fn test_render_order_by_z_index() {
        let mut manager = LayerManager::new();

        // Tile layers carry z-index 0; markers are stacked above
        let tile = TileLayer::openstreetmap("base".to_string(), "OpenStreetMap".to_string());
        let mut marker = Marker::new("m1".to_string(), LatLng::new(0.0, 0.0));
        marker.set_z_index(10);

        manager.add_layer(Box::new(marker)).unwrap();
        manager.add_layer(Box::new(tile)).unwrap();

        assert_eq!(manager.list_layers(), vec!["base", "m1"]);
    }
}
