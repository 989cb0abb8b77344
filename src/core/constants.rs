//! Fixed rendering values derived from Leaflet defaults and the upstream
//! route page. Keeping them in a single place makes it easier to tweak
//! scene-wide magic numbers.

use crate::core::geo::LatLng;
use crate::layers::polyline::Color;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Initial map center before the route bounds are known.
pub const DEFAULT_CENTER: LatLng = LatLng { lat: 0.0, lng: 0.0 };

/// Initial zoom level before the route bounds are known.
pub const DEFAULT_ZOOM: f64 = 2.0;

/// OpenStreetMap raster tile URL template.
pub const OSM_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Maximum zoom the base tile layer serves.
pub const OSM_MAX_ZOOM: u8 = 19;

/// Attribution text shown for the base tile layer.
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Route polyline stroke color (solid blue).
pub const ROUTE_COLOR: Color = Color {
    r: 0,
    g: 0,
    b: 255,
    a: 255,
};

/// Route polyline stroke weight in pixels.
pub const ROUTE_WEIGHT: f32 = 4.0;

/// Pixel padding applied when fitting the viewport to the route bounds.
pub const FIT_BOUNDS_PADDING: f64 = 20.0;

/// Category label rendered in every point-of-interest popup.
pub const POI_CATEGORY: &str = "Restaurant";

/// OpenWeatherMap icon image URL template (`{icon}` placeholder).
pub const WEATHER_ICON_URL_TEMPLATE: &str = "http://openweathermap.org/img/wn/{icon}@2x.png";

/// Default distance between generated checkpoints, in kilometers.
pub const DEFAULT_CHECKPOINT_INTERVAL_KM: f64 = 10.0;

/// Default average speed used for checkpoint ETAs, in km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 60.0;
