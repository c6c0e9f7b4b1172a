//! Host platform description and install gating.
//!
//! # Modules
//!
//! - [`descriptor`] - The [`PlatformDescriptor`] snapshot and [`OsFamily`]
//! - [`detect`] - Host introspection with overridable facts
//! - [`validator`] - The architecture and OS-version gate

pub mod descriptor;
pub mod detect;
pub mod validator;

pub use descriptor::{OsFamily, PlatformDescriptor, ARCH_32BIT, ARCH_64BIT};
pub use detect::{HostDetector, HostOverrides};
pub use validator::{validate, ValidationError, Validator};
