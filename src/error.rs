//! Error types for platgate operations.
//!
//! This module defines [`GateError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Host rejections are [`ValidationError`]s wrapped in `GateError::Validation`
//! - Use `GateError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

pub use crate::platform::validator::ValidationError;

/// Core error type for platgate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// The host platform was rejected by the validator.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A dependency specifier could not be parsed.
    #[error("Invalid requirement '{spec}': {message}")]
    InvalidRequirement { spec: String, message: String },

    /// A version string could not be parsed.
    #[error("Invalid version '{value}': {message}")]
    InvalidVersion { value: String, message: String },

    /// A host fact could not be detected.
    #[error("Could not detect {what}: {message}")]
    DetectionFailed { what: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GateError {
    /// Whether this error is a host rejection rather than a usage problem.
    pub fn is_validation(&self) -> bool {
        matches!(self, GateError::Validation(_))
    }
}

/// Result type alias for platgate operations.
pub type Result<T> = std::result::Result<T, GateError>;
