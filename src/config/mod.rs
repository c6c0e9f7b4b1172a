//! Configuration loading and parsing for platgate.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use platgate::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".platgate.yml"), "package:\n  name: demo").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.package.name, "demo");
//! ```
//!
//! Values given on the command line take precedence over the file, and the
//! file takes precedence over host detection.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{GateConfig, OutputFormat, PackageInfo, Settings, DEFAULT_PACKAGE_VERSION};
