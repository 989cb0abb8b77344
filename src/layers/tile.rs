use crate::{
    constants,
    layers::base::{LayerKind, LayerProperties, LayerTrait},
};
use serde::{Deserialize, Serialize};

/// Configuration for a raster tile layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayerOptions {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    pub url_template: String,
    pub tile_size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
    pub attribution: Option<String>,
    pub subdomains: Vec<String>,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: constants::OSM_URL_TEMPLATE.to_string(),
            tile_size: constants::TILE_SIZE,
            min_zoom: 0,
            max_zoom: constants::OSM_MAX_ZOOM,
            attribution: None,
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }
}

/// Base tile layer descriptor.
///
/// The layer only describes where tiles come from; downloading and drawing
/// them is the hosting renderer's concern.
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
}

impl TileLayer {
    pub fn new(id: String, name: String, options: TileLayerOptions) -> Self {
        let properties = LayerProperties::new(id, name, LayerKind::Tile);
        Self {
            properties,
            options,
        }
    }

    /// Creates the default OpenStreetMap base layer (max zoom 19, fixed
    /// attribution).
    pub fn openstreetmap(id: String, name: String) -> Self {
        let options = TileLayerOptions {
            attribution: Some(constants::OSM_ATTRIBUTION.to_string()),
            ..Default::default()
        };
        Self::new(id, name, options)
    }

    pub fn options(&self) -> &TileLayerOptions {
        &self.options
    }

    pub fn attribution(&self) -> Option<&str> {
        self.options.attribution.as_deref()
    }

    /// Builds the URL for the tile at `(z, x, y)`, expanding the template
    /// placeholders. The subdomain rotates by coordinate hash so adjacent
    /// tiles spread across mirrors.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        let subdomain = if self.options.subdomains.is_empty() {
            ""
        } else {
            let idx = ((x + y) % self.options.subdomains.len() as u32) as usize;
            &self.options.subdomains[idx]
        };

        self.options
            .url_template
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);
}
