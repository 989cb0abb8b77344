use crate::{
    core::geo::{LatLng, LatLngBounds},
    layers::base::{LayerKind, LayerProperties, LayerTrait},
    ui::popup::Popup,
};

/// A point marker with an optional bound popup.
pub struct Marker {
    properties: LayerProperties,
    position: LatLng,
    popup: Option<Popup>,
}

impl Marker {
    pub fn new(id: String, position: LatLng) -> Self {
        let properties = LayerProperties::new(id, "Marker".to_string(), LayerKind::Marker);
        Self {
            properties,
            position,
            popup: None,
        }
    }

    /// Binds a popup to the marker.
    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn popup_mut(&mut self) -> Option<&mut Popup> {
        self.popup.as_mut()
    }
}

impl LayerTrait for Marker {
    crate::impl_layer_trait!(Marker, properties);

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(LatLngBounds::new(self.position, self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::popup::PopupContent;

    #[test]
    fn test_marker_position_and_bounds() {
        let marker = Marker::new("m1".to_string(), LatLng::new(-34.6, -58.4));

        assert_eq!(marker.position().lat, -34.6);
        let bounds = marker.bounds().unwrap();
        assert_eq!(bounds.south_west, bounds.north_east);
        assert!(bounds.contains(&marker.position()));
    }

    #[test]
    fn test_marker_with_popup() {
        let popup = Popup::new(PopupContent::PointOfInterest {
            name: "Cafe".to_string(),
            category: "Restaurant".to_string(),
        });
        let marker = Marker::new("poi-0".to_string(), LatLng::new(-34.6, -58.4)).with_popup(popup);

        let html = marker.popup().unwrap().to_html();
        assert!(html.contains("Cafe"));
        assert!(html.contains("Restaurant"));
    }
}
