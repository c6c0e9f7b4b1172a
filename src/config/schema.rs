//! Configuration schema definitions for platgate.
//!
//! This module contains the struct definitions that map to the
//! `.platgate.yml` file format.

use serde::{Deserialize, Serialize};

use crate::platform::HostOverrides;
use crate::platform::validator::DEFAULT_PACKAGE;

/// Package version reported when none is configured.
pub const DEFAULT_PACKAGE_VERSION: &str = "6.4.2";

/// Root configuration structure for `.platgate.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Package being installed
    pub package: PackageInfo,

    /// Overrides for detected host facts
    pub host: HostOverrides,

    /// Global settings
    pub settings: Settings,
}

/// Name and version of the package being installed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
}

impl Default for PackageInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_PACKAGE.to_string(),
            version: DEFAULT_PACKAGE_VERSION.to_string(),
        }
    }
}

/// Global settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Output format for the requirement list
    pub format: OutputFormat,

    /// Minimal install unless overridden on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimal: Option<bool>,
}

/// How the requirement list is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One specifier per line
    #[default]
    Text,
    /// A single JSON object
    Json,
}
