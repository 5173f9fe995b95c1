//! IP geolocation boundary types: query parsing, request-URL construction,
//! and provider-response decoding.
//!
//! The actual HTTP call is an external collaborator — fallible, cancellable,
//! time-bounded — and lives outside this crate. What the engine owns is the
//! pure edge on either side of it: turning untrusted text into a well-formed
//! query, and turning the provider's JSON (treated as an opaque input once
//! fetched) into a typed report. There is no prefix-table lookup for IPs;
//! provider fields pass through as-is.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr as _;

use serde::{Deserialize, Serialize};

use crate::types::GeoPoint;

// ---------------------------------------------------------------------------
// IpApiConfig
// ---------------------------------------------------------------------------

/// Provider endpoint configuration, injected by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpApiConfig {
    /// Base URL, trailing slash included (the query appends the address).
    pub endpoint: &'static str,
    /// Comma-separated field list requested from the provider.
    pub fields: &'static str,
}

impl Default for IpApiConfig {
    /// The keyless ip-api.com JSON endpoint with the full field set the
    /// report decoder understands.
    fn default() -> Self {
        Self {
            endpoint: "http://ip-api.com/json/",
            fields: "status,message,query,reverse,country,countryCode,regionName,city,zip,\
                     lat,lon,timezone,isp,org,as,mobile,proxy",
        }
    }
}

// ---------------------------------------------------------------------------
// IpQuery
// ---------------------------------------------------------------------------

/// Errors produced when parsing a raw IP query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpQueryError {
    /// Not a literal IPv4/IPv6 address and not the self-lookup sentinel.
    InvalidAddress {
        /// The rejected input.
        got: String,
    },
}

impl fmt::Display for IpQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAddress { got } => {
                write!(
                    f,
                    "invalid IP address {got:?}: expected IPv4, IPv6, or \"me\""
                )
            }
        }
    }
}

impl std::error::Error for IpQueryError {}

/// A validated IP lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpQuery {
    /// Look up the caller's own address (the provider resolves the requester
    /// when the path segment is empty).
    SelfLookup,
    /// Look up a specific address.
    Addr(IpAddr),
}

impl IpQuery {
    /// Parses a raw query string.
    ///
    /// `"me"` and `"my"` (case-insensitive) request a self-lookup; anything
    /// else must parse as a literal IPv4 or IPv6 address.
    ///
    /// # Errors
    ///
    /// [`IpQueryError::InvalidAddress`] for everything else.
    pub fn parse(raw: &str) -> Result<Self, IpQueryError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("me") || trimmed.eq_ignore_ascii_case("my") {
            return Ok(Self::SelfLookup);
        }
        IpAddr::from_str(trimmed)
            .map(Self::Addr)
            .map_err(|_| IpQueryError::InvalidAddress {
                got: trimmed.to_owned(),
            })
    }
}

/// Builds the provider GET URL for a query. Pure string construction; the
/// caller owns the actual request, its timeout, and its failure handling.
pub fn request_url(query: &IpQuery, config: &IpApiConfig) -> String {
    match query {
        IpQuery::SelfLookup => format!("{}?fields={}", config.endpoint, config.fields),
        IpQuery::Addr(addr) => format!("{}{addr}?fields={}", config.endpoint, config.fields),
    }
}

// ---------------------------------------------------------------------------
// Provider response decoding
// ---------------------------------------------------------------------------

/// Errors produced when decoding a provider response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpResponseError {
    /// The body was not decodable as a provider response at all.
    Decode {
        /// The underlying decode error message.
        detail: String,
    },
    /// The provider answered with `status: "fail"`.
    Provider {
        /// The provider's failure message, when it sent one.
        message: String,
    },
}

impl fmt::Display for IpResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { detail } => write!(f, "failed to decode provider response: {detail}"),
            Self::Provider { message } => write!(f, "provider reported failure: {message}"),
        }
    }
}

impl std::error::Error for IpResponseError {}

/// Connection classification derived from the provider's `mobile` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    /// Cellular carrier address space.
    Mobile,
    /// Fixed-line broadband or business address space.
    Broadband,
}

impl ConnectionType {
    /// Returns the lowercase label used in human-readable output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Broadband => "broadband",
        }
    }
}

/// Raw provider response shape. All fields optional except `status`; the
/// provider omits requested fields it has no data for.
#[derive(Debug, Deserialize)]
struct RawIpResponse {
    status: String,
    message: Option<String>,
    query: Option<String>,
    reverse: Option<String>,
    country: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
    #[serde(rename = "regionName")]
    region: Option<String>,
    city: Option<String>,
    zip: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    as_field: Option<String>,
    mobile: Option<bool>,
    proxy: Option<bool>,
}

/// Typed geolocation report assembled from a successful provider response.
///
/// Field values pass through from the provider unchanged; the only derived
/// values are `geo` (fused from `lat`/`lon`), `asn` (the leading token of the
/// provider's `as` string, e.g. `"AS15169"` from `"AS15169 Google LLC"`), and
/// `connection`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpReport {
    /// The address the provider actually resolved.
    pub query: String,
    /// Reverse-DNS hostname, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Region/state name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// City name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Coordinates, when the provider sent both halves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoPoint>,
    /// IANA timezone name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Service provider name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isp: Option<String>,
    /// Organization name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    /// Autonomous-system number token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asn: Option<String>,
    /// Derived connection classification.
    pub connection: ConnectionType,
    /// Whether the provider flagged the address as a proxy/VPN exit.
    pub proxy: bool,
}

/// Decodes a provider response body into an [`IpReport`].
///
/// # Errors
///
/// - [`IpResponseError::Decode`] — the body is not valid provider JSON.
/// - [`IpResponseError::Provider`] — the provider answered `status: "fail"`
///   (unknown address, reserved range, quota exceeded, ...).
pub fn parse_ip_report(body: &str) -> Result<IpReport, IpResponseError> {
    let raw: RawIpResponse =
        serde_json::from_str(body).map_err(|e| IpResponseError::Decode {
            detail: e.to_string(),
        })?;

    if raw.status == "fail" {
        return Err(IpResponseError::Provider {
            message: raw
                .message
                .unwrap_or_else(|| "no failure message".to_owned()),
        });
    }

    let geo = match (raw.lat, raw.lon) {
        (Some(lat), Some(lon)) => Some(GeoPoint { lat, lon }),
        (None, None) | (Some(_), None) | (None, Some(_)) => None,
    };
    let asn = raw
        .as_field
        .as_deref()
        .and_then(|s| s.split_whitespace().next())
        .map(str::to_owned);
    let connection = if raw.mobile.unwrap_or(false) {
        ConnectionType::Mobile
    } else {
        ConnectionType::Broadband
    };

    Ok(IpReport {
        query: raw.query.unwrap_or_default(),
        hostname: raw.reverse,
        country: raw.country,
        country_code: raw.country_code,
        region: raw.region,
        city: raw.city,
        zip: raw.zip,
        geo,
        timezone: raw.timezone,
        isp: raw.isp,
        org: raw.org,
        asn,
        connection,
        proxy: raw.proxy.unwrap_or(false),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
