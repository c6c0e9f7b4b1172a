//! Configuration file discovery and loading.

use crate::config::schema::GateConfig;
use crate::error::{GateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".platgate.yml";

/// Find the project config at `.platgate.yml`
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GateConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into GateConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<GateConfig> {
    if content.trim().is_empty() {
        return Ok(GateConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the config for an invocation.
///
/// An explicit path must exist. Without one, `.platgate.yml` in the project
/// root is used when present, and defaults otherwise.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<GateConfig> {
    match explicit {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_config_file(path)
        }
        None => match find_config(project_root) {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                load_config_file(&path)
            }
            None => {
                tracing::debug!("no {} in {}", CONFIG_FILE_NAME, project_root.display());
                Ok(GateConfig::default())
            }
        },
    }
}
