use crate::constants;
use serde::{Deserialize, Serialize};

/// The three popup bodies a route scene renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PopupContent {
    /// Weather report at a route endpoint
    Weather {
        /// Popup heading, e.g. "Weather at the origin"
        heading: String,
        /// Temperature in °C
        temperature: f64,
        description: String,
        /// OpenWeatherMap icon identifier, e.g. "01d"
        icon: String,
    },
    /// Point of interest near an endpoint
    PointOfInterest { name: String, category: String },
    /// Progress checkpoint along the route
    Checkpoint {
        distance_km: f64,
        eta_hours: f64,
    },
}

impl PopupContent {
    /// Remote image URL for the weather icon, if this is a weather popup.
    pub fn icon_url(&self) -> Option<String> {
        match self {
            PopupContent::Weather { icon, .. } => {
                Some(constants::WEATHER_ICON_URL_TEMPLATE.replace("{icon}", icon))
            }
            _ => None,
        }
    }
}

/// A popup bound to a marker. Hidden until the host opens it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub content: PopupContent,
    pub visible: bool,
}

impl Popup {
    pub fn new(content: PopupContent) -> Self {
        Self {
            content,
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Renders the popup body as the HTML fragment the host binds to the
    /// marker, mirroring the upstream page's markup.
    pub fn to_html(&self) -> String {
        match &self.content {
            PopupContent::Weather {
                heading,
                temperature,
                description,
                icon,
            } => {
                let icon_url = constants::WEATHER_ICON_URL_TEMPLATE.replace("{icon}", icon);
                format!(
                    "<strong>{}</strong><br>Temperature: {}°C<br>Description: {}<br>\
                     <img src=\"{}\" alt=\"Weather icon\">",
                    heading, temperature, description, icon_url
                )
            }
            PopupContent::PointOfInterest { name, category } => {
                format!("<strong>{}</strong><br>Category: {}", name, category)
            }
            PopupContent::Checkpoint {
                distance_km,
                eta_hours,
            } => {
                format!(
                    "<strong>Km {}</strong><br>Estimated time: {} h",
                    distance_km, eta_hours
                )
            }
        }
    }
}
