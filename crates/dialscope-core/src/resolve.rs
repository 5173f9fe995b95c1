//! Prefix resolution: mapping a canonical number onto the static tables.
//!
//! Both resolvers walk an ordered ladder of candidate prefix lengths and
//! return the first hit. For localities the ladder is longest-first — area
//! codes of different lengths share leading digits, and a 2-digit code must
//! never shadow a more specific 4-digit code covering the same number. The
//! operator ladder tries 2 before 3, the trial order that table family is
//! defined with.
//!
//! No match is `None`, a normal outcome: valid numbers routinely carry
//! unmapped or newly assigned prefixes. Matching is exact substring equality
//! at position 0 — no fuzzy or partial matches.

use serde::Serialize;

use crate::newtypes::CanonicalNumber;
use crate::plan::DialPlan;
use crate::tables::{CodeTable, OperatorTable};
use crate::types::Locality;

// ---------------------------------------------------------------------------
// Match records
// ---------------------------------------------------------------------------

/// A locality hit, carrying the prefix that produced it so callers can see
/// the specificity of the match (4-digit vs 2-digit).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalityMatch {
    /// The matched STD code.
    pub code: String,
    /// The locality the code maps to.
    pub locality: Locality,
}

impl LocalityMatch {
    /// Digit length of the matched code.
    pub fn prefix_len(&self) -> usize {
        self.code.len()
    }
}

/// An operator hit, carrying the matched band prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorMatch {
    /// The matched band prefix.
    pub prefix: String,
    /// Operator display name.
    pub operator: String,
}

// ---------------------------------------------------------------------------
// Resolvers
// ---------------------------------------------------------------------------

/// Resolves the geographic locality for a number, most specific code first.
///
/// Tries each length in `plan.locality_prefix_lengths` in order and returns
/// the first code present in the table. Returns `None` when no configured
/// length matches.
pub fn resolve_locality(
    number: &CanonicalNumber,
    table: &CodeTable,
    plan: &DialPlan,
) -> Option<LocalityMatch> {
    for &len in plan.locality_prefix_lengths {
        let candidate = number.prefix(len);
        if let Some(locality) = table.get(candidate) {
            return Some(LocalityMatch {
                code: candidate.to_owned(),
                locality: locality.clone(),
            });
        }
    }
    None
}

/// Resolves the mobile operator band for a number.
///
/// Tries each length in `plan.operator_prefix_lengths` in order (2 then 3
/// under the India plan) and returns the first band present in the table.
pub fn resolve_operator(
    number: &CanonicalNumber,
    table: &OperatorTable,
    plan: &DialPlan,
) -> Option<OperatorMatch> {
    for &len in plan.operator_prefix_lengths {
        let candidate = number.prefix(len);
        if let Some(operator) = table.get(candidate) {
            return Some(OperatorMatch {
                prefix: candidate.to_owned(),
                operator: operator.to_owned(),
            });
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
