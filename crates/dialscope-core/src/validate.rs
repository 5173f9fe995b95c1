//! Structural validation of normalized subscriber-number candidates.
//!
//! `validate` is total: every input string produces a [`ValidationOutcome`],
//! never a panic. Failures are values carrying enough detail for a caller to
//! build a helpful message without re-deriving the rules.

use std::fmt;

use serde::Serialize;

use crate::newtypes::CanonicalNumber;
use crate::plan::{DialPlan, LeadingDigitClass};

// ---------------------------------------------------------------------------
// ValidationFailure
// ---------------------------------------------------------------------------

/// The two ways a normalized candidate can fail structural validation.
///
/// Unknown locality/operator is NOT a failure — a valid number with no table
/// match is a normal outcome handled by the resolver, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ValidationFailure {
    /// The candidate is not exactly the required digit count.
    InvalidLength {
        /// Required digit count under the active plan.
        expected: usize,
        /// Observed character count of the candidate.
        got: usize,
    },
    /// The first digit is outside the plan's allowed set.
    InvalidLeadingDigit {
        /// The offending first character.
        got: char,
        /// Human-readable description of the allowed set.
        allowed: &'static str,
    },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "must be exactly {expected} digits, got {got}")
            }
            Self::InvalidLeadingDigit { got, allowed } => {
                write!(f, "must start with {allowed}, got {got:?}")
            }
        }
    }
}

impl std::error::Error for ValidationFailure {}

// ---------------------------------------------------------------------------
// ValidationOutcome
// ---------------------------------------------------------------------------

/// Result of validating one candidate. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The candidate is a well-formed subscriber number.
    Valid {
        /// The validated ten-digit number.
        number: CanonicalNumber,
        /// Classification of the leading digit under the plan.
        class: LeadingDigitClass,
    },
    /// The candidate failed a structural rule.
    Invalid(ValidationFailure),
}

impl ValidationOutcome {
    /// Returns `true` for the `Valid` variant.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Validates a normalized candidate against the plan's structural rules.
///
/// Checks, in order:
/// 1. exactly `plan.subscriber_len` ASCII digits (anything else, including
///    embedded non-digits, is `InvalidLength` territory — a candidate with a
///    letter in it can never reach the right digit count);
/// 2. a leading digit the plan classifies as dialable.
///
/// Length is checked on digit count: a candidate of the right `char` length
/// containing a non-digit fails the digit test and is reported as
/// `InvalidLength` with the observed count, matching the shape rule
/// `^[0-9]{N}$`.
pub fn validate(candidate: &str, plan: &DialPlan) -> ValidationOutcome {
    let digit_count = candidate.chars().filter(char::is_ascii_digit).count();
    if digit_count != plan.subscriber_len || candidate.chars().count() != plan.subscriber_len {
        return ValidationOutcome::Invalid(ValidationFailure::InvalidLength {
            expected: plan.subscriber_len,
            got: candidate.chars().count(),
        });
    }

    let leading = candidate.chars().next().unwrap_or('0');
    let Some(class) = plan.classify_leading(leading) else {
        return ValidationOutcome::Invalid(ValidationFailure::InvalidLeadingDigit {
            got: leading,
            allowed: plan.allowed_leading_description(),
        });
    };

    match CanonicalNumber::try_from(candidate) {
        Ok(number) => ValidationOutcome::Valid { number, class },
        // Unreachable after the digit-count check, but the workspace bans
        // unwrap/expect, so fold any residual shape mismatch into a length
        // failure rather than panicking.
        Err(_) => ValidationOutcome::Invalid(ValidationFailure::InvalidLength {
            expected: plan.subscriber_len,
            got: candidate.chars().count(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
