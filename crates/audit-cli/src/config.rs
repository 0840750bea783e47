//! Configuration file loading.
//!
//! Options are read from the file given with `--config`, or from
//! `config.toml` in the platform config directory:
//! - Linux: ~/.config/audience-audit/
//! - macOS: ~/Library/Application Support/org.audience-audit.audience-audit/
//! - Windows: %APPDATA%/audience-audit/audience-audit/config/
//!
//! A missing default file means defaults. An explicit file must exist, and
//! any file that exists must parse.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info};

use audit_model::AuditOptions;

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "audience-audit";
const APP_NAME: &str = "audience-audit";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Path of the default config file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Parses options from TOML text. Missing tables and keys take defaults.
pub fn parse_options(text: &str) -> Result<AuditOptions, toml::de::Error> {
    toml::from_str(text)
}

/// Loads options from `explicit`, or from the default location.
pub fn load_options(explicit: Option<&Path>) -> Result<AuditOptions, ConfigError> {
    match explicit {
        Some(path) => read_options(path),
        None => match default_config_path() {
            Some(path) => load_optional(&path),
            None => {
                debug!("no config directory on this platform, using defaults");
                Ok(AuditOptions::default())
            }
        },
    }
}

/// Reads `path` if it exists, otherwise returns defaults.
pub fn load_optional(path: &Path) -> Result<AuditOptions, ConfigError> {
    match read_options(path) {
        Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(AuditOptions::default())
        }
        other => other,
    }
}

fn read_options(path: &Path) -> Result<AuditOptions, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded config");
    Ok(options)
}
