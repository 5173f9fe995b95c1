//! Static lookup tables: STD/area codes and mobile operator bands.
//!
//! Both tables are immutable after construction and are loaded exactly once
//! at process start, either from the bundled JSON resources under `data/` or
//! (in tests) from synthetic entry lists. Load-time validation is strict: a
//! malformed code, a half-specified coordinate, or a code appearing twice is
//! a [`TableLoadError`], never a silent last-write-wins — the upstream
//! dataset carried exactly that bug once, with one code mapped to two
//! different cities.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::newtypes::PrefixCode;
use crate::types::{GeoPoint, Locality};

/// Bundled STD-code dataset, compiled into the binary.
const STD_CODES_JSON: &str = include_str!("../data/std_codes.json");

/// Bundled operator-band dataset, compiled into the binary.
const OPERATORS_JSON: &str = include_str!("../data/operators.json");

// ---------------------------------------------------------------------------
// TableLoadError
// ---------------------------------------------------------------------------

/// Errors surfaced while constructing a table from raw entries.
#[derive(Debug, Clone, PartialEq)]
pub enum TableLoadError {
    /// The raw resource was not decodable as the expected JSON shape.
    Parse {
        /// Which table was being loaded (`"std_codes"` or `"operators"`).
        table: &'static str,
        /// The underlying decode error message.
        detail: String,
    },
    /// An entry's code/prefix is not a well-formed key for its table.
    InvalidCode {
        /// Which table was being loaded.
        table: &'static str,
        /// The offending key.
        code: String,
        /// What was wrong with it.
        detail: String,
    },
    /// The same code appears twice. The two mapped values are reported so a
    /// curator can decide which one is right; the loader never guesses.
    DuplicateCode {
        /// Which table was being loaded.
        table: &'static str,
        /// The duplicated key.
        code: String,
        /// Value mapped by the first occurrence.
        first: String,
        /// Value mapped by the second occurrence.
        second: String,
    },
    /// An entry carried only one of `lat`/`lon`.
    InvalidCoordinate {
        /// The entry's code.
        code: String,
    },
}

impl fmt::Display for TableLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { table, detail } => {
                write!(f, "failed to decode {table} table: {detail}")
            }
            Self::InvalidCode {
                table,
                code,
                detail,
            } => {
                write!(f, "invalid code {code:?} in {table} table: {detail}")
            }
            Self::DuplicateCode {
                table,
                code,
                first,
                second,
            } => {
                write!(
                    f,
                    "duplicate code {code:?} in {table} table: maps to both {first:?} and {second:?}"
                )
            }
            Self::InvalidCoordinate { code } => {
                write!(f, "entry {code:?} has only one of lat/lon")
            }
        }
    }
}

impl std::error::Error for TableLoadError {}

// ---------------------------------------------------------------------------
// Raw entry shapes (resource format)
// ---------------------------------------------------------------------------

/// One row of `data/std_codes.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct StdCodeEntry {
    /// Dialing code without the trunk zero (e.g. `"22"`, `"1332"`).
    pub code: String,
    /// Exchange city or town.
    pub city: String,
    /// State or union territory.
    pub state: String,
    /// Telecom circle.
    pub circle: String,
    /// Latitude, present only together with `lon`.
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, present only together with `lat`.
    #[serde(default)]
    pub lon: Option<f64>,
}

/// One row of `data/operators.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorEntry {
    /// Mobile band prefix (2 or 3 digits).
    pub prefix: String,
    /// Operator display name.
    pub operator: String,
}

// ---------------------------------------------------------------------------
// CodeTable
// ---------------------------------------------------------------------------

/// Immutable mapping from STD/area code to [`Locality`].
///
/// Keys are 2–4 digit codes stored without the trunk zero, matched against
/// the canonical number by exact prefix equality at position 0.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: HashMap<String, Locality>,
}

impl CodeTable {
    /// Builds a table from raw entries, rejecting malformed and duplicate
    /// codes.
    ///
    /// # Errors
    ///
    /// - [`TableLoadError::InvalidCode`] — a code is not 2–4 digits, or
    ///   starts with `0` (codes are stored trunk-stripped).
    /// - [`TableLoadError::InvalidCoordinate`] — only one of `lat`/`lon`.
    /// - [`TableLoadError::DuplicateCode`] — a code appears twice.
    pub fn from_entries(raw: Vec<StdCodeEntry>) -> Result<Self, TableLoadError> {
        let mut entries: HashMap<String, Locality> = HashMap::with_capacity(raw.len());
        for entry in raw {
            let code = checked_code("std_codes", &entry.code)?;

            let geo = match (entry.lat, entry.lon) {
                (Some(lat), Some(lon)) => Some(GeoPoint { lat, lon }),
                (None, None) => None,
                (Some(_), None) | (None, Some(_)) => {
                    return Err(TableLoadError::InvalidCoordinate {
                        code: entry.code.clone(),
                    });
                }
            };

            let locality = Locality {
                city: entry.city,
                state: entry.state,
                circle: entry.circle,
                geo,
            };

            if let Some(existing) = entries.get(code.as_str()) {
                return Err(TableLoadError::DuplicateCode {
                    table: "std_codes",
                    code: code.as_str().to_owned(),
                    first: existing.city.clone(),
                    second: locality.city,
                });
            }
            entries.insert(code.as_str().to_owned(), locality);
        }
        Ok(Self { entries })
    }

    /// Looks up an exact code.
    pub fn get(&self, code: &str) -> Option<&Locality> {
        self.entries.get(code)
    }

    /// Number of codes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of codes per digit length, sorted by length.
    pub fn length_histogram(&self) -> Vec<(usize, usize)> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for code in self.entries.keys() {
            *counts.entry(code.len()).or_insert(0) += 1;
        }
        let mut histogram: Vec<(usize, usize)> = counts.into_iter().collect();
        histogram.sort_unstable();
        histogram
    }

    /// Number of distinct telecom circles across all entries.
    pub fn circle_count(&self) -> usize {
        let mut circles: Vec<&str> = self.entries.values().map(|l| l.circle.as_str()).collect();
        circles.sort_unstable();
        circles.dedup();
        circles.len()
    }
}

// ---------------------------------------------------------------------------
// OperatorTable
// ---------------------------------------------------------------------------

/// Immutable mapping from mobile band prefix (2–3 digits) to operator name.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    entries: HashMap<String, String>,
}

impl OperatorTable {
    /// Builds a table from raw entries, rejecting malformed and duplicate
    /// prefixes. Operator bands are 2 or 3 digits; a 4-digit key is valid
    /// [`PrefixCode`] shape but not a valid operator band.
    pub fn from_entries(raw: Vec<OperatorEntry>) -> Result<Self, TableLoadError> {
        let mut entries: HashMap<String, String> = HashMap::with_capacity(raw.len());
        for entry in raw {
            let code = checked_code("operators", &entry.prefix)?;
            if code.digits() > 3 {
                return Err(TableLoadError::InvalidCode {
                    table: "operators",
                    code: entry.prefix.clone(),
                    detail: "operator bands are 2 or 3 digits".to_owned(),
                });
            }

            if let Some(existing) = entries.get(code.as_str()) {
                return Err(TableLoadError::DuplicateCode {
                    table: "operators",
                    code: code.as_str().to_owned(),
                    first: existing.clone(),
                    second: entry.operator,
                });
            }
            entries.insert(code.as_str().to_owned(), entry.operator);
        }
        Ok(Self { entries })
    }

    /// Looks up an exact prefix.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    /// Number of prefixes in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validates a raw key string as a table code: 2–4 digits, no leading zero.
fn checked_code(table: &'static str, raw: &str) -> Result<PrefixCode, TableLoadError> {
    let code = PrefixCode::try_from(raw).map_err(|e| TableLoadError::InvalidCode {
        table,
        code: raw.to_owned(),
        detail: e.to_string(),
    })?;
    if code.starts_with('0') {
        return Err(TableLoadError::InvalidCode {
            table,
            code: raw.to_owned(),
            detail: "codes are stored without the trunk zero".to_owned(),
        });
    }
    Ok(code)
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Summary statistics over the loaded tables, for the `inspect` surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Number of STD codes.
    pub std_codes: usize,
    /// STD code count per digit length, shortest first.
    pub codes_by_length: Vec<(usize, usize)>,
    /// Number of distinct telecom circles.
    pub circles: usize,
    /// Number of operator band prefixes.
    pub operator_prefixes: usize,
}

/// The pair of lookup tables the engine resolves against.
///
/// Constructed once and passed by reference into every classification call;
/// the engine never mutates it, so concurrent callers need no coordination.
#[derive(Debug, Clone)]
pub struct Tables {
    /// STD/area code table.
    pub codes: CodeTable,
    /// Mobile operator band table.
    pub operators: OperatorTable,
}

impl Tables {
    /// Loads the bundled datasets compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`TableLoadError`] if either resource fails to decode or
    /// fails entry validation. With the shipped data this cannot happen; the
    /// error path exists so curated-data regressions surface at startup
    /// instead of as wrong answers.
    pub fn bundled() -> Result<Self, TableLoadError> {
        let std_entries: Vec<StdCodeEntry> =
            serde_json::from_str(STD_CODES_JSON).map_err(|e| TableLoadError::Parse {
                table: "std_codes",
                detail: e.to_string(),
            })?;
        let operator_entries: Vec<OperatorEntry> =
            serde_json::from_str(OPERATORS_JSON).map_err(|e| TableLoadError::Parse {
                table: "operators",
                detail: e.to_string(),
            })?;

        Ok(Self {
            codes: CodeTable::from_entries(std_entries)?,
            operators: OperatorTable::from_entries(operator_entries)?,
        })
    }

    /// Returns summary statistics over both tables.
    pub fn stats(&self) -> TableStats {
        TableStats {
            std_codes: self.codes.len(),
            codes_by_length: self.codes.length_histogram(),
            circles: self.codes.circle_count(),
            operator_prefixes: self.operators.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
