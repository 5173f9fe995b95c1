//! Numbering-scheme configuration.
//!
//! A [`DialPlan`] carries everything scheme-specific the engine needs:
//! country code, subscriber length, the leading-digit policy, and the
//! prefix-length ladders for locality and operator resolution. It is an
//! explicitly constructed value passed into every engine call; there is no
//! module-level singleton, so tests can run against synthetic plans.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LeadingDigitClass
// ---------------------------------------------------------------------------

/// Coarse classification of a subscriber number by its first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadingDigitClass {
    /// Mobile band (first digit 6–9 under the India plan).
    Mobile,
    /// Geographic/landline band (first digit 1–5 under the India plan).
    Landline,
}

impl LeadingDigitClass {
    /// Returns the lowercase label used in human-readable output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Landline => "landline",
        }
    }
}

// ---------------------------------------------------------------------------
// DialPlan
// ---------------------------------------------------------------------------

/// The numbering-scheme configuration for one country.
///
/// All fields are plain data; the engine never mutates a plan. The locality
/// ladder MUST be sorted longest-first — longer codes are more specific and a
/// shorter code must never shadow a longer one. The operator ladder is the
/// trial order for that table family (2 before 3 under the India plan).
#[derive(Debug, Clone, PartialEq)]
pub struct DialPlan {
    /// Country calling code digits, without the `+` (e.g. `"91"`).
    pub country_code: &'static str,
    /// Exact subscriber-number length after normalization.
    pub subscriber_len: usize,
    /// Prefix lengths tried for locality resolution, most specific first.
    pub locality_prefix_lengths: &'static [usize],
    /// Prefix lengths tried for operator resolution, in trial order.
    pub operator_prefix_lengths: &'static [usize],
}

impl DialPlan {
    /// The Indian numbering plan: `+91`, 10-digit subscriber numbers,
    /// STD codes of 4/3/2 digits, operator bands of 2/3 digits.
    pub fn india() -> Self {
        Self {
            country_code: "91",
            subscriber_len: 10,
            locality_prefix_lengths: &[4, 3, 2],
            operator_prefix_lengths: &[2, 3],
        }
    }

    /// Returns the international dial prefix including the `+` (e.g. `"+91"`).
    pub fn plus_prefix(&self) -> String {
        format!("+{}", self.country_code)
    }

    /// Classifies a leading digit, or `None` when the digit is not dialable
    /// as the first digit of a subscriber number under this plan.
    ///
    /// `1`–`5` are geographic (the first digit of an area code), `6`–`9` are
    /// mobile bands. `0` is the trunk prefix and can never lead a subscriber
    /// number; non-digits are rejected by the length/shape check upstream.
    pub fn classify_leading(&self, digit: char) -> Option<LeadingDigitClass> {
        match digit {
            '1'..='5' => Some(LeadingDigitClass::Landline),
            '6'..='9' => Some(LeadingDigitClass::Mobile),
            _ => None,
        }
    }

    /// Human-readable description of the allowed leading digits, used in
    /// validation failure messages.
    pub fn allowed_leading_description(&self) -> &'static str {
        "1-5 (landline) or 6-9 (mobile)"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
