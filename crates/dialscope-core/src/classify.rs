//! Result assembly and the `classify` entry point.
//!
//! The pipeline is a linear composition with short-circuit on invalid input:
//! normalize, validate, resolve against both tables, assemble. Every stage is
//! a pure function over the injected tables and plan; two calls with the same
//! input always produce the same result.

use serde::Serialize;

use crate::newtypes::CanonicalNumber;
use crate::normalize::normalize;
use crate::plan::{DialPlan, LeadingDigitClass};
use crate::resolve::{LocalityMatch, OperatorMatch, resolve_locality, resolve_operator};
use crate::tables::Tables;
use crate::types::GeoPoint;
use crate::validate::{ValidationFailure, ValidationOutcome, validate};

// ---------------------------------------------------------------------------
// DisplayFormats
// ---------------------------------------------------------------------------

/// Human-readable renderings of a canonical number, derived purely from the
/// digits — no validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayFormats {
    /// Compact international form: `+919876543210`.
    pub e164: String,
    /// Grouped international form: `+91 98765 43210`.
    pub international: String,
    /// National form with the trunk zero restored: `09876543210`.
    pub national: String,
}

impl DisplayFormats {
    /// Derives all display forms for a canonical number under a plan.
    ///
    /// The international form groups the subscriber digits into two halves
    /// (5+5 for a 10-digit number), the convention the national scheme
    /// prints mobile numbers in.
    pub fn derive(number: &CanonicalNumber, plan: &DialPlan) -> Self {
        let digits = number.as_str();
        let (head, tail) = digits.split_at(digits.len().div_ceil(2));

        Self {
            e164: format!("+{}{digits}", plan.country_code),
            international: format!("+{} {head} {tail}", plan.country_code),
            national: format!("0{digits}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ClassificationResult
// ---------------------------------------------------------------------------

/// The engine's output record: one immutable value per classified number.
///
/// `matched_prefix_len` lets callers distinguish a 4-digit-specific locality
/// match from a 2-digit one, and `None` from "no match at all". `geo` carries
/// either the externally supplied coordinate (when a geocoding collaborator
/// provided one) or the matched table entry's coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// The normalized, validated subscriber number.
    pub canonical: CanonicalNumber,
    /// Leading-digit classification (mobile vs landline band).
    pub class: LeadingDigitClass,
    /// Derived display forms.
    pub display: DisplayFormats,
    /// Geographic match, when an STD code covered the number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<LocalityMatch>,
    /// Digit length of the matched STD code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_prefix_len: Option<usize>,
    /// Operator match, when a mobile band covered the number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<OperatorMatch>,
    /// Coordinates for downstream map rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoPoint>,
}

/// Packages validation and resolution output into a [`ClassificationResult`].
///
/// `external_geo` is the seam for an injected geocoding collaborator: when
/// `Some`, it takes precedence over the table entry's coordinates; when
/// `None`, the locality's own coordinates (if any) pass through unchanged.
/// No I/O happens here — fetching the external coordinate is the caller's
/// business, and withholding it is always safe.
pub fn assemble(
    number: CanonicalNumber,
    class: LeadingDigitClass,
    locality: Option<LocalityMatch>,
    operator: Option<OperatorMatch>,
    external_geo: Option<GeoPoint>,
    plan: &DialPlan,
) -> ClassificationResult {
    let display = DisplayFormats::derive(&number, plan);
    let matched_prefix_len = locality.as_ref().map(LocalityMatch::prefix_len);
    let geo = external_geo.or_else(|| locality.as_ref().and_then(|m| m.locality.geo));

    ClassificationResult {
        canonical: number,
        class,
        display,
        locality,
        matched_prefix_len,
        operator,
        geo,
    }
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

/// Classifies a raw user-supplied string against the loaded tables.
///
/// This is the engine's single logical entry point. Validation failures are
/// returned as values; an unmatched prefix is NOT a failure — the result
/// simply carries no locality or operator.
///
/// # Errors
///
/// [`ValidationFailure::InvalidLength`] or
/// [`ValidationFailure::InvalidLeadingDigit`] when the normalized candidate
/// is structurally malformed. The resolvers are never consulted for invalid
/// input.
pub fn classify(
    raw: &str,
    tables: &Tables,
    plan: &DialPlan,
) -> Result<ClassificationResult, ValidationFailure> {
    classify_with_geo(raw, tables, plan, None)
}

/// [`classify`], with an externally supplied coordinate for the assembler.
///
/// Callers that ran a geocoding collaborator pass its result here; callers
/// that skipped it (or whose lookup failed) pass `None` and get table
/// coordinates when available.
pub fn classify_with_geo(
    raw: &str,
    tables: &Tables,
    plan: &DialPlan,
    external_geo: Option<GeoPoint>,
) -> Result<ClassificationResult, ValidationFailure> {
    let candidate = normalize(raw, plan);
    match validate(&candidate, plan) {
        ValidationOutcome::Invalid(failure) => Err(failure),
        ValidationOutcome::Valid { number, class } => {
            let locality = resolve_locality(&number, &tables.codes, plan);
            let operator = resolve_operator(&number, &tables.operators, plan);
            Ok(assemble(number, class, locality, operator, external_geo, plan))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
