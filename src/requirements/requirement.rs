//! Dependency specifiers.
//!
//! A [`Requirement`] is a package name plus a [`VersionConstraint`], written
//! and parsed in the usual installer text form:
//!
//! ```
//! use platgate::requirements::Requirement;
//!
//! let req: Requirement = "tensorflow >= 2.0.0,< 2.1.0".parse().unwrap();
//! assert_eq!(req.name, "tensorflow");
//! assert_eq!(req.to_string(), "tensorflow >= 2.0.0,< 2.1.0");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// Version constraint attached to a requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionConstraint {
    /// No constraint.
    Any,
    /// `>= version`
    AtLeast(String),
    /// `== version`
    Exact(String),
    /// `< version`
    Below(String),
    /// `>= min,< below`
    Range { min: String, below: String },
}

impl VersionConstraint {
    fn parse(spec: &str, text: &str) -> Result<Self, GateError> {
        let invalid = |message: &str| GateError::InvalidRequirement {
            spec: spec.to_string(),
            message: message.to_string(),
        };

        let text = text.trim();
        if text.is_empty() {
            return Ok(VersionConstraint::Any);
        }

        let mut at_least = None;
        let mut exact = None;
        let mut below = None;

        for clause in text.split(',') {
            let clause = clause.trim();
            let (slot, version) = if let Some(v) = clause.strip_prefix(">=") {
                (&mut at_least, v)
            } else if let Some(v) = clause.strip_prefix("==") {
                (&mut exact, v)
            } else if clause.starts_with("<=") {
                return Err(invalid("operator '<=' is not supported"));
            } else if let Some(v) = clause.strip_prefix('<') {
                (&mut below, v)
            } else {
                return Err(invalid(&format!("unsupported clause '{}'", clause)));
            };

            let version = version.trim();
            if version.is_empty() {
                return Err(invalid("missing version after operator"));
            }
            if slot.replace(version.to_string()).is_some() {
                return Err(invalid("operator repeated"));
            }
        }

        match (at_least, exact, below) {
            (Some(min), None, None) => Ok(VersionConstraint::AtLeast(min)),
            (None, Some(v), None) => Ok(VersionConstraint::Exact(v)),
            (None, None, Some(v)) => Ok(VersionConstraint::Below(v)),
            (Some(min), None, Some(below)) => Ok(VersionConstraint::Range { min, below }),
            _ => Err(invalid("'==' cannot be combined with other operators")),
        }
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionConstraint::Any => Ok(()),
            VersionConstraint::AtLeast(v) => write!(f, ">= {}", v),
            VersionConstraint::Exact(v) => write!(f, "== {}", v),
            VersionConstraint::Below(v) => write!(f, "< {}", v),
            VersionConstraint::Range { min, below } => write!(f, ">= {},< {}", min, below),
        }
    }
}

/// A package name and version constraint declared to the installer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Requirement {
    pub name: String,
    pub constraint: VersionConstraint,
}

impl Requirement {
    pub fn new(name: impl Into<String>, constraint: VersionConstraint) -> Self {
        Self {
            name: name.into(),
            constraint,
        }
    }

    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, VersionConstraint::Any)
    }

    pub fn at_least(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, VersionConstraint::AtLeast(version.into()))
    }

    pub fn exact(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, VersionConstraint::Exact(version.into()))
    }

    pub fn below(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::new(name, VersionConstraint::Below(version.into()))
    }

    pub fn range(
        name: impl Into<String>,
        min: impl Into<String>,
        below: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            VersionConstraint::Range {
                min: min.into(),
                below: below.into(),
            },
        )
    }

    /// Parse a specifier such as `pandas >= 0.23.2`.
    pub fn parse(spec: &str) -> Result<Self, GateError> {
        let trimmed = spec.trim();
        let split = trimmed
            .find(|c: char| matches!(c, '<' | '>' | '=' | '!' | '~'))
            .unwrap_or(trimmed.len());
        let (name, rest) = trimmed.split_at(split);
        let name = name.trim();

        if name.is_empty() {
            return Err(GateError::InvalidRequirement {
                spec: spec.to_string(),
                message: "missing package name".to_string(),
            });
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(GateError::InvalidRequirement {
                spec: spec.to_string(),
                message: format!("invalid package name '{}'", name),
            });
        }

        Ok(Self {
            name: name.to_string(),
            constraint: VersionConstraint::parse(spec, rest)?,
        })
    }
}

impl FromStr for Requirement {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Requirement {
    type Error = GateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Requirement> for String {
    fn from(req: Requirement) -> Self {
        req.to_string()
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.constraint {
            VersionConstraint::Any => write!(f, "{}", self.name),
            _ => write!(f, "{} {}", self.name, self.constraint),
        }
    }
}
