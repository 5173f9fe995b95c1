#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod classify;
pub mod ip;
pub mod maps;
pub mod newtypes;
pub mod normalize;
pub mod plan;
pub mod resolve;
pub mod tables;
pub mod types;
pub mod validate;

pub use classify::{ClassificationResult, DisplayFormats, assemble, classify, classify_with_geo};
pub use ip::{
    ConnectionType, IpApiConfig, IpQuery, IpQueryError, IpReport, IpResponseError, parse_ip_report,
    request_url,
};
pub use maps::{MapsConfig, MarkerColor, osm_url, static_map_url};
pub use newtypes::{CanonicalNumber, NewtypeError, PrefixCode};
pub use normalize::normalize;
pub use plan::{DialPlan, LeadingDigitClass};
pub use resolve::{LocalityMatch, OperatorMatch, resolve_locality, resolve_operator};
pub use tables::{
    CodeTable, OperatorEntry, OperatorTable, StdCodeEntry, TableLoadError, TableStats, Tables,
};
pub use types::{GeoPoint, Locality};
pub use validate::{ValidationFailure, ValidationOutcome, validate};

/// Returns the current version of the dialscope-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
