//! Install gate over the host platform.
//!
//! Rules are checked in order and the first failure wins:
//!
//! 1. the architecture must be 64-bit
//! 2. macOS must be at least [`MACOS_MINIMUM`]
//! 3. Linux is always accepted
//! 4. Windows must be at least [`WINDOWS_MINIMUM`]
//! 5. any other family is rejected

use thiserror::Error;

use super::descriptor::{OsFamily, PlatformDescriptor, ARCH_64BIT};
use crate::version::DottedVersion;

/// Package named in diagnostics when none is configured.
pub const DEFAULT_PACKAGE: &str = "turicreate";

/// Oldest supported macOS release.
pub const MACOS_MINIMUM: &str = "10.8.0";

/// Oldest supported Windows kernel version (Vista / Server 2008).
pub const WINDOWS_MINIMUM: &str = "6.0";

/// Reasons the host is rejected. Each carries the offending detected value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "{package} currently supports only 64-bit operating systems, and only recent \
         Linux/OSX architectures. Please install using a supported version. \
         Your architecture is currently: {arch}"
    )]
    UnsupportedArchitecture { package: String, arch: String },

    #[error(
        "{package} currently does not support versions of {family} prior to {minimum}. \
         Please upgrade your {family} installation to a supported version. \
         Your current {family} version is: {detected}"
    )]
    UnsupportedOsVersion {
        package: String,
        family: String,
        minimum: String,
        detected: String,
    },

    #[error(
        "Unsupported Platform: '{platform}'. {package} is only supported on Windows, \
         Mac OSX, and Linux."
    )]
    UnsupportedPlatform { package: String, platform: String },
}

impl ValidationError {
    /// The detected value that caused the rejection.
    pub fn detected(&self) -> &str {
        match self {
            ValidationError::UnsupportedArchitecture { arch, .. } => arch,
            ValidationError::UnsupportedOsVersion { detected, .. } => detected,
            ValidationError::UnsupportedPlatform { platform, .. } => platform,
        }
    }
}

/// Platform validator for a named package.
#[derive(Debug, Clone)]
pub struct Validator {
    package: String,
}

impl Validator {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Check the descriptor against the support matrix.
    pub fn validate(&self, descriptor: &PlatformDescriptor) -> Result<(), ValidationError> {
        if descriptor.architecture != ARCH_64BIT {
            return Err(ValidationError::UnsupportedArchitecture {
                package: self.package.clone(),
                arch: descriptor.architecture.clone(),
            });
        }

        match &descriptor.os_family {
            OsFamily::MacOs => self.require_minimum(descriptor, MACOS_MINIMUM, "10.8"),
            OsFamily::Linux => Ok(()),
            OsFamily::Windows => self.require_minimum(descriptor, WINDOWS_MINIMUM, "Vista"),
            OsFamily::Other(_) => Err(ValidationError::UnsupportedPlatform {
                package: self.package.clone(),
                platform: descriptor.platform.clone(),
            }),
        }
    }

    fn require_minimum(
        &self,
        descriptor: &PlatformDescriptor,
        floor: &str,
        label: &str,
    ) -> Result<(), ValidationError> {
        let supported = match (
            DottedVersion::parse(&descriptor.os_version),
            DottedVersion::parse(floor),
        ) {
            (Ok(detected), Ok(minimum)) => detected >= minimum,
            // Unparseable host versions sort below everything.
            _ => false,
        };

        if supported {
            tracing::debug!(
                "{} {} satisfies minimum {}",
                descriptor.os_family.display_name(),
                descriptor.os_version,
                floor
            );
            Ok(())
        } else {
            Err(ValidationError::UnsupportedOsVersion {
                package: self.package.clone(),
                family: descriptor.os_family.display_name().to_string(),
                minimum: label.to_string(),
                detected: descriptor.os_version.clone(),
            })
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE)
    }
}

/// Validate with the default package name.
pub fn validate(descriptor: &PlatformDescriptor) -> Result<(), ValidationError> {
    Validator::default().validate(descriptor)
}
