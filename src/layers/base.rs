use crate::core::geo::LatLngBounds;

/// The kinds of layers a route scene contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Tile,
    Polyline,
    Marker,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Tile => write!(f, "tile"),
            LayerKind::Polyline => write!(f, "polyline"),
            LayerKind::Marker => write!(f, "marker"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub kind: LayerKind,
    pub z_index: i32,
    pub opacity: f32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: String, name: String, kind: LayerKind) -> Self {
        Self {
            id,
            name,
            kind,
            z_index: 0,
            opacity: 1.0,
            visible: true,
        }
    }
}

/// Common interface of every scene layer.
///
/// Layers are inert data: the hosting renderer walks them in z-order and
/// draws what it finds. `as_any` allows hosts (and tests) to downcast to
/// the concrete layer type.
pub trait LayerTrait {
    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn kind(&self) -> LayerKind;

    fn z_index(&self) -> i32;

    fn set_z_index(&mut self, z_index: i32);

    fn opacity(&self) -> f32;

    fn set_opacity(&mut self, opacity: f32);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Geographic extent of the layer, if it has one. Base tile layers
    /// cover the world and return `None`.
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    fn as_any(&self) -> &dyn std::any::Any;

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_properties() {
        let props = LayerProperties::new(
            "route".to_string(),
            "Route".to_string(),
            LayerKind::Polyline,
        );

        assert_eq!(props.id, "route");
        assert_eq!(props.name, "Route");
        assert_eq!(props.kind, LayerKind::Polyline);
        assert_eq!(props.z_index, 0);
        assert_eq!(props.opacity, 1.0);
        assert!(props.visible);
    }

    #[test]
    fn test_layer_kind_display() {
        assert_eq!(LayerKind::Tile.to_string(), "tile");
        assert_eq!(LayerKind::Polyline.to_string(), "polyline");
        assert_eq!(LayerKind::Marker.to_string(), "marker");
    }
}
