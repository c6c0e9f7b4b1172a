//! Minimal-install exclusion set.

use super::requirement::Requirement;

/// Heavyweight packages left out of a minimal install.
pub const NON_MINIMAL: &[&str] = &["coremltools", "pandas", "resampy", "scipy", "tensorflow"];

/// Name prefixes dropped when a minimal install is requested.
///
/// Matching looks at the package name only, never the version text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    prefixes: Vec<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The builtin [`NON_MINIMAL`] set.
    pub fn builtin() -> Self {
        Self::new(NON_MINIMAL.iter().copied())
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Whether a minimal install drops this requirement.
    pub fn excludes(&self, requirement: &Requirement) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| requirement.name.starts_with(prefix.as_str()))
    }

    /// Whether a minimal install keeps this requirement.
    pub fn keeps(&self, requirement: &Requirement) -> bool {
        !self.excludes(requirement)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::builtin()
    }
}
