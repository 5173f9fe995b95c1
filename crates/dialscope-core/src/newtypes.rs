/// Validated newtype wrappers for core dialscope domain string types.
///
/// Each newtype enforces a regex-based shape constraint at construction time
/// via [`TryFrom<&str>`]. Once constructed, the inner value is immutable (no
/// `DerefMut`). Serde `Deserialize` impls re-run validation so invalid data
/// cannot enter the type system from untrusted JSON.
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from an invalid string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewtypeError {
    /// The string did not match the expected format.
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },
}

impl fmt::Display for NewtypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                type_name,
                expected,
                got,
            } => write!(f, "invalid {type_name}: expected {expected}, got {got:?}"),
        }
    }
}

impl std::error::Error for NewtypeError {}

// ---------------------------------------------------------------------------
// Regex statics
//
// All patterns are compile-time string literals; Regex::new never returns Err
// for them. The match + unreachable branch is required because the workspace
// bans expect() and unwrap(), but "a^" (a pattern that never matches) is always
// valid, so we use it as a safe fallback that satisfies the type checker.
// ---------------------------------------------------------------------------

/// Matches exactly ten ASCII digits.
static CANONICAL_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{10}$").unwrap_or_else(|_| {
        // Never reached: the pattern above is always valid.
        Regex::new("a^").unwrap_or_else(|_| {
            Regex::new(".").unwrap_or_else(|_| {
                Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken"))
            })
        })
    })
});

/// Matches a 2-to-4-digit numeric dialing prefix.
static PREFIX_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{2,4}$").unwrap_or_else(|_| {
        Regex::new("a^").unwrap_or_else(|_| {
            Regex::new(".").unwrap_or_else(|_| {
                Regex::new(".").unwrap_or_else(|_| unreachable!("regex engine broken"))
            })
        })
    })
});

// ---------------------------------------------------------------------------
// CanonicalNumber
// ---------------------------------------------------------------------------

/// A fully normalized ten-digit subscriber number.
///
/// This is the key type for all table lookups: the normalizer produces a
/// candidate string, the validator checks it, and only then is a
/// `CanonicalNumber` constructed. Regex: `^[0-9]{10}$`.
///
/// The leading-digit policy (which first digits are acceptable) belongs to
/// [`crate::plan::DialPlan`], not here; this type guarantees shape only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalNumber(String);

impl TryFrom<&str> for CanonicalNumber {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if CANONICAL_NUMBER_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(NewtypeError::InvalidFormat {
                type_name: "CanonicalNumber",
                expected: "exactly 10 ASCII digits (e.g. 9876543210)",
                got: s.to_owned(),
            })
        }
    }
}

impl CanonicalNumber {
    /// Returns the first digit of the number as a `char`.
    ///
    /// Returns `'0'` if the inner string is empty, which cannot happen for a
    /// correctly validated `CanonicalNumber`.
    pub fn leading_digit(&self) -> char {
        self.0.chars().next().unwrap_or('0')
    }

    /// Returns the first `len` digits, or the whole number if `len` exceeds it.
    pub fn prefix(&self, len: usize) -> &str {
        let end = len.min(self.0.len());
        &self.0[..end]
    }

    /// Returns the number as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for CanonicalNumber {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CanonicalNumber {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CanonicalNumber {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// PrefixCode
// ---------------------------------------------------------------------------

/// A 2-to-4-digit numeric dialing prefix used as a table key.
///
/// Covers both STD/area codes (2–4 digits) and mobile operator bands
/// (2–3 digits). Regex: `^[0-9]{2,4}$`. Length policy beyond the shape
/// (which lengths a given table actually defines) is enforced at table load.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrefixCode(String);

impl TryFrom<&str> for PrefixCode {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if PREFIX_CODE_RE.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(NewtypeError::InvalidFormat {
                type_name: "PrefixCode",
                expected: "2 to 4 ASCII digits (e.g. 22, 484, 1332)",
                got: s.to_owned(),
            })
        }
    }
}

impl PrefixCode {
    /// Returns the code as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of digits in the code.
    pub fn digits(&self) -> usize {
        self.0.len()
    }
}

impl Deref for PrefixCode {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrefixCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PrefixCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PrefixCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::try_from(s.as_str()).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    // -- CanonicalNumber -----------------------------------------------------

    #[test]
    fn canonical_number_valid() {
        let n = CanonicalNumber::try_from("9876543210").expect("valid number");
        assert_eq!(&*n, "9876543210");
    }

    #[test]
    fn canonical_number_leading_digit() {
        let n = CanonicalNumber::try_from("2212345678").expect("valid");
        assert_eq!(n.leading_digit(), '2');
    }

    #[test]
    fn canonical_number_prefix() {
        let n = CanonicalNumber::try_from("1123000000").expect("valid");
        assert_eq!(n.prefix(2), "11");
        assert_eq!(n.prefix(4), "1123");
    }

    #[test]
    fn canonical_number_prefix_clamps_to_length() {
        let n = CanonicalNumber::try_from("1234567890").expect("valid");
        assert_eq!(n.prefix(99), "1234567890");
    }

    #[test]
    fn canonical_number_display() {
        let n = CanonicalNumber::try_from("9000000001").expect("valid");
        assert_eq!(n.to_string(), "9000000001");
    }

    #[test]
    fn canonical_number_reject_too_short() {
        assert!(CanonicalNumber::try_from("987654321").is_err());
    }

    #[test]
    fn canonical_number_reject_too_long() {
        assert!(CanonicalNumber::try_from("98765432100").is_err());
    }

    #[test]
    fn canonical_number_reject_non_digit() {
        assert!(CanonicalNumber::try_from("987654321x").is_err());
    }

    #[test]
    fn canonical_number_reject_plus_prefix() {
        assert!(CanonicalNumber::try_from("+919876543").is_err());
    }

    #[test]
    fn canonical_number_reject_empty() {
        assert!(CanonicalNumber::try_from("").is_err());
    }

    #[test]
    fn canonical_number_serde_roundtrip() {
        let n = CanonicalNumber::try_from("9876543210").expect("valid");
        let json = serde_json::to_string(&n).expect("serialize");
        assert_eq!(json, "\"9876543210\"");
        let back: CanonicalNumber = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(n, back);
    }

    #[test]
    fn canonical_number_deserialize_rejects_invalid() {
        let result: Result<CanonicalNumber, _> = serde_json::from_str("\"12345\"");
        assert!(result.is_err());
    }

    // -- PrefixCode ----------------------------------------------------------

    #[test]
    fn prefix_code_valid_two_digits() {
        let c = PrefixCode::try_from("22").expect("valid");
        assert_eq!(c.digits(), 2);
    }

    #[test]
    fn prefix_code_valid_four_digits() {
        let c = PrefixCode::try_from("1332").expect("valid");
        assert_eq!(c.digits(), 4);
        assert_eq!(c.as_str(), "1332");
    }

    #[test]
    fn prefix_code_reject_one_digit() {
        assert!(PrefixCode::try_from("2").is_err());
    }

    #[test]
    fn prefix_code_reject_five_digits() {
        assert!(PrefixCode::try_from("12345").is_err());
    }

    #[test]
    fn prefix_code_reject_non_digit() {
        assert!(PrefixCode::try_from("2a").is_err());
    }

    #[test]
    fn prefix_code_serde_roundtrip() {
        let c = PrefixCode::try_from("484").expect("valid");
        let json = serde_json::to_string(&c).expect("serialize");
        assert_eq!(json, "\"484\"");
        let back: PrefixCode = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(c, back);
    }

    #[test]
    fn prefix_code_deserialize_rejects_invalid() {
        let result: Result<PrefixCode, _> = serde_json::from_str("\"abcd\"");
        assert!(result.is_err());
    }

    // -- NewtypeError --------------------------------------------------------

    #[test]
    fn newtype_error_display() {
        let err = NewtypeError::InvalidFormat {
            type_name: "CanonicalNumber",
            expected: "exactly 10 ASCII digits",
            got: "bad".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains("CanonicalNumber"));
        assert!(msg.contains("bad"));
    }

    #[test]
    fn newtype_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NewtypeError::InvalidFormat {
            type_name: "PrefixCode",
            expected: "2 to 4 ASCII digits",
            got: String::new(),
        });
        assert!(!err.to_string().is_empty());
    }
}
