//! Map link construction for classified results.
//!
//! Pure URL builders only. Fetching the static image and rendering it are
//! external collaborators invoked by the caller with the coordinates the
//! engine returned.

use crate::types::GeoPoint;

/// Marker color for the static-map pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    /// Used for phone-number results.
    Red,
    /// Used for IP geolocation results.
    Blue,
}

impl MarkerColor {
    fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }
}

/// Static-map rendering configuration, injected by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsConfig {
    /// Base URL of the static-map service.
    pub service: &'static str,
    /// Zoom level for the rendered tile.
    pub zoom: u8,
    /// Image size as `WIDTHxHEIGHT`.
    pub size: &'static str,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            service: "https://staticmap.openstreetmap.de/staticmap.php",
            zoom: 12,
            size: "800x400",
        }
    }
}

/// Builds an OpenStreetMap permalink centered on the point.
pub fn osm_url(geo: GeoPoint) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=12/{lat}/{lon}",
        lat = geo.lat,
        lon = geo.lon
    )
}

/// Builds a static-map image URL with a single marker on the point.
pub fn static_map_url(geo: GeoPoint, marker: MarkerColor, config: &MapsConfig) -> String {
    format!(
        "{service}?center={lat},{lon}&zoom={zoom}&size={size}&markers={lat},{lon},{color}",
        service = config.service,
        lat = geo.lat,
        lon = geo.lon,
        zoom = config.zoom,
        size = config.size,
        color = marker.as_str()
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
