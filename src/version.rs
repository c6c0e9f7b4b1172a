//! Version types used by the validator and the resolver.
//!
//! - [`DottedVersion`] - a numeric dotted tuple compared component-wise
//! - [`RuntimeVersion`] - the `major.minor` of the hosting language runtime

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::GateError;

static RUNTIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)").expect("runtime version pattern is valid"));

/// A dotted numeric version such as `10.8.0` or `6.0`.
///
/// Ordering is tuple ordering with trailing zeros ignored, so `10.8` and
/// `10.8.0` compare equal and `6.0 < 10.0`. Parsing is lenient: each
/// component keeps only its leading digits, and parsing stops at the first
/// component that carries a non-numeric suffix (`5.15.0-91-generic` reads as
/// `5.15.0`).
#[derive(Debug, Clone)]
pub struct DottedVersion {
    raw: String,
    parts: Vec<u64>,
}

impl DottedVersion {
    /// Parse a version, failing when no numeric component is present.
    pub fn parse(input: &str) -> Result<Self, GateError> {
        let raw = input.trim();
        let text = raw.strip_prefix('v').unwrap_or(raw);

        let mut parts = Vec::new();
        for component in text.split('.') {
            let digits: String = component.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                break;
            }
            let value = digits.parse::<u64>().map_err(|e| GateError::InvalidVersion {
                value: raw.to_string(),
                message: e.to_string(),
            })?;
            parts.push(value);
            if digits.len() != component.len() {
                break;
            }
        }

        if parts.is_empty() {
            return Err(GateError::InvalidVersion {
                value: raw.to_string(),
                message: "no numeric version component".to_string(),
            });
        }

        while parts.len() > 1 && parts.last() == Some(&0) {
            parts.pop();
        }

        Ok(Self {
            raw: raw.to_string(),
            parts,
        })
    }

    /// The text this version was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Numeric components with trailing zeros removed.
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }
}

impl FromStr for DottedVersion {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for DottedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts
    }
}

impl Eq for DottedVersion {}

impl PartialOrd for DottedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DottedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parts.cmp(&other.parts)
    }
}

impl fmt::Display for DottedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Major/minor version of the language runtime executing the installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
}

impl RuntimeVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Whether this is exactly `major.minor`.
    pub fn is(&self, major: u32, minor: u32) -> bool {
        self.major == major && self.minor == minor
    }
}

impl FromStr for RuntimeVersion {
    type Err = GateError;

    /// Accepts `3.9`, `3.9.7` and interpreter banners such as `Python 3.9.7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: String| GateError::InvalidVersion {
            value: s.trim().to_string(),
            message,
        };

        let caps = RUNTIME_PATTERN
            .captures(s)
            .ok_or_else(|| invalid("expected MAJOR.MINOR".to_string()))?;
        let major = caps[1].parse().map_err(|e| invalid(format!("{}", e)))?;
        let minor = caps[2].parse().map_err(|e| invalid(format!("{}", e)))?;

        Ok(Self { major, minor })
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> DottedVersion {
        DottedVersion::parse(s).unwrap()
    }

    #[test]
    fn dotted_compares_numerically_not_lexically() {
        assert!(v("10.8.0") < v("10.9"));
        assert!(v("6.0") < v("10.0"));
        assert!(v("10.10") > v("10.9"));
        assert!(v("10.7.9") < v("10.8.0"));
    }

    #[test]
    fn dotted_ignores_trailing_zeros() {
        assert_eq!(v("10.8"), v("10.8.0"));
        assert_eq!(v("6"), v("6.0.0"));
        assert_eq!(v("0"), v("0.0"));
    }

    #[test]
    fn dotted_keeps_raw_text() {
        assert_eq!(v(" 10.8.0 ").as_str(), "10.8.0");
        assert_eq!(v("10.8.0").to_string(), "10.8.0");
    }

    #[test]
    fn dotted_stops_at_non_numeric_suffix() {
        assert_eq!(v("5.15.0-91-generic").parts(), &[5, 15]);
        assert_eq!(v("10.0.19045").parts(), &[10, 0, 19045]);
        assert_eq!(v("v1.2").parts(), &[1, 2]);
    }

    #[test]
    fn dotted_rejects_non_numeric() {
        assert!(DottedVersion::parse("").is_err());
        assert!(DottedVersion::parse("unknown").is_err());
        assert!(DottedVersion::parse(".1").is_err());
    }

    #[test]
    fn runtime_parses_plain_and_banner() {
        assert_eq!("3.9".parse::<RuntimeVersion>().unwrap(), RuntimeVersion::new(3, 9));
        assert_eq!("3.9.7".parse::<RuntimeVersion>().unwrap(), RuntimeVersion::new(3, 9));
        assert_eq!(
            "Python 2.7.18".parse::<RuntimeVersion>().unwrap(),
            RuntimeVersion::new(2, 7)
        );
    }

    #[test]
    fn runtime_rejects_missing_minor() {
        assert!("3".parse::<RuntimeVersion>().is_err());
        assert!("python".parse::<RuntimeVersion>().is_err());
    }

    #[test]
    fn runtime_orders_by_major_then_minor() {
        assert!(RuntimeVersion::new(2, 7) < RuntimeVersion::new(3, 5));
        assert!(RuntimeVersion::new(3, 7) < RuntimeVersion::new(3, 8));
        assert!(RuntimeVersion::new(3, 10) > RuntimeVersion::new(3, 9));
    }

    #[test]
    fn runtime_display() {
        assert_eq!(RuntimeVersion::new(3, 8).to_string(), "3.8");
        assert!(RuntimeVersion::new(3, 9).is(3, 9));
        assert!(!RuntimeVersion::new(3, 9).is(3, 8));
    }
}
