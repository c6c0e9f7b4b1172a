//! platgate - Install-time platform validation and dependency resolution.
//!
//! platgate decides whether a host may install a native-extension package
//! and which dependency specifiers that install should declare.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.platgate.yml` loading
//! - [`error`] - Error types and result aliases
//! - [`platform`] - Host detection and the architecture/OS gate
//! - [`requirements`] - Requirement specifiers and the dependency resolver
//! - [`ui`] - Terminal output
//! - [`version`] - Dotted and runtime version types
//!
//! # Example
//!
//! ```
//! use platgate::platform::{validate, PlatformDescriptor};
//! use platgate::requirements::{base_requirements, resolve};
//! use platgate::version::RuntimeVersion;
//!
//! let host = PlatformDescriptor::new("64bit", "macosx-x86_64", "10.15.7");
//! assert!(validate(&host).is_ok());
//!
//! let reqs = resolve(
//!     &base_requirements(),
//!     RuntimeVersion::new(3, 8),
//!     &host.os_family,
//!     Some(true),
//! );
//! assert!(reqs.iter().all(|r| r.name != "tensorflow"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod platform;
pub mod requirements;
pub mod ui;
pub mod version;

pub use error::{GateError, Result};
