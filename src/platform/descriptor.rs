//! Host platform snapshot types.

use std::fmt;
use std::str::FromStr;

/// Word-size marker for 64-bit hosts.
pub const ARCH_64BIT: &str = "64bit";

/// Word-size marker for 32-bit hosts.
pub const ARCH_32BIT: &str = "32bit";

/// Operating-system family of the install host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OsFamily {
    MacOs,
    Linux,
    Windows,
    /// Anything else, carrying the raw platform text.
    Other(String),
}

impl OsFamily {
    /// Classify a platform tag such as `macosx-10.9-x86_64`, `linux-x86_64`
    /// or `win-amd64` by its prefix.
    pub fn from_platform(platform: &str) -> Self {
        let lower = platform.trim().to_lowercase();
        if lower.starts_with("macos") || lower.starts_with("darwin") {
            OsFamily::MacOs
        } else if lower.starts_with("linux") {
            OsFamily::Linux
        } else if lower.starts_with("win") {
            OsFamily::Windows
        } else {
            OsFamily::Other(platform.trim().to_string())
        }
    }

    pub fn is_macos(&self) -> bool {
        matches!(self, OsFamily::MacOs)
    }

    /// Human-readable family name used in diagnostics.
    pub fn display_name(&self) -> &str {
        match self {
            OsFamily::MacOs => "Mac OSX",
            OsFamily::Linux => "Linux",
            OsFamily::Windows => "Windows",
            OsFamily::Other(raw) => raw,
        }
    }
}

impl FromStr for OsFamily {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_platform(s))
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::MacOs => write!(f, "macos"),
            OsFamily::Linux => write!(f, "linux"),
            OsFamily::Windows => write!(f, "windows"),
            OsFamily::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// Read-only snapshot of the install host.
///
/// Built once per invocation by [`HostDetector`](super::HostDetector) and
/// handed to the validator by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDescriptor {
    /// Word-size marker, e.g. [`ARCH_64BIT`].
    pub architecture: String,
    /// Family derived from [`platform`](Self::platform).
    pub os_family: OsFamily,
    /// Raw dotted OS version. Empty when the family does not need one and
    /// detection produced nothing.
    pub os_version: String,
    /// Raw platform tag, e.g. `linux-x86_64`.
    pub platform: String,
}

impl PlatformDescriptor {
    /// Build a descriptor, deriving the family from the platform tag.
    pub fn new(
        architecture: impl Into<String>,
        platform: impl Into<String>,
        os_version: impl Into<String>,
    ) -> Self {
        let platform = platform.into();
        Self {
            architecture: architecture.into(),
            os_family: OsFamily::from_platform(&platform),
            os_version: os_version.into(),
            platform,
        }
    }

    pub fn is_64bit(&self) -> bool {
        self.architecture == ARCH_64BIT
    }
}
