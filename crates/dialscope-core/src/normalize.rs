//! Input normalization: separator stripping and dial-prefix removal.
//!
//! `normalize` is the first stage of the classification pipeline. It is
//! total — every input produces a string — and it never checks length or
//! digit content; that is the validator's job.

use crate::plan::DialPlan;

/// Normalizes a raw user-supplied string into a subscriber-number candidate.
///
/// Two passes:
///
/// 1. Remove whitespace and the formatting characters `(`, `)`, `-`.
/// 2. Strip at most one recognized dial prefix, first match wins:
///    - the international prefix `+<cc>` (e.g. `+91`),
///    - the bare country-code digits (e.g. `91`),
///    - a single trunk `0`.
///
/// The prefix strip is applied exactly once and never recursively: an input
/// of `+910...` loses only the `+91` — the remaining trunk `0` stays, because
/// the leading-zero rule only applies when no country-code prefix was present.
/// The bare country-code strip is likewise unconditional; a ten-digit number
/// that happens to begin with the country-code digits will come out short and
/// be reported as an `InvalidLength` downstream rather than guessed at here.
pub fn normalize(raw: &str, plan: &DialPlan) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-'))
        .collect();

    let plus_prefix = plan.plus_prefix();
    if let Some(rest) = cleaned.strip_prefix(&plus_prefix) {
        rest.to_owned()
    } else if let Some(rest) = cleaned.strip_prefix(plan.country_code) {
        rest.to_owned()
    } else if let Some(rest) = cleaned.strip_prefix('0') {
        rest.to_owned()
    } else {
        cleaned
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
