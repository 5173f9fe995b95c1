/// Shared record types produced by the classification engine.
///
/// This module defines [`GeoPoint`] and [`Locality`] — the value types that
/// table entries resolve to. Both are plain serde structs; the engine treats
/// coordinates as an opaque pair and performs no geographic plausibility
/// checks (that is a data-curation concern, not an engine concern).
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GeoPoint
// ---------------------------------------------------------------------------

/// A WGS-84 coordinate pair carried through from a table entry or an external
/// geocoding provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
}

// ---------------------------------------------------------------------------
// Locality
// ---------------------------------------------------------------------------

/// The geographic record a dialing prefix resolves to.
///
/// `circle` is the telecom licensing region the exchange belongs to; it does
/// not always equal the state (e.g. Chandigarh is served under the Punjab
/// circle). Coordinates are optional — not every exchange town in the bundled
/// dataset carries them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    /// Exchange city or town name.
    pub city: String,
    /// State or union territory.
    pub state: String,
    /// Telecom circle (licensing/service region).
    pub circle: String,
    /// Coordinates for map rendering, when the dataset has them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoPoint>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
