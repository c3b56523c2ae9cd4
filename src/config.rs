//! Configuration file handling for mkcproj.
//! The file holds defaults for everything that is not specific to one project:
//! where templates and projects live, who the developer is and how to log.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Configuration file read when `--conf-filename` is not given.
pub const CONFIG_FILE: &str = "./mkcproj.conf";

/// Default log file.
pub const LOG_FILE: &str = "./mkcproj.log";

/// Default log verbosity (info).
pub const DEFAULT_DEBUG_LEVEL: u8 = 3;

/// Values read from the configuration file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub template_dir: Option<PathBuf>,
    pub projects_dir: Option<PathBuf>,
    pub developer_name: Option<String>,
    pub developer_email: Option<String>,
    pub license: Option<String>,
    pub debug_level: Option<u8>,
    pub log_file: Option<PathBuf>,
    pub colored_log: Option<bool>,
}

impl Config {
    /// Template root, falling back to `$HOME/Template/template`.
    pub fn template_dir(&self) -> PathBuf {
        self.template_dir.clone().unwrap_or_else(|| home_dir().join("Template").join("template"))
    }

    /// Projects root, falling back to `$HOME/Projects`.
    pub fn projects_dir(&self) -> PathBuf {
        self.projects_dir.clone().unwrap_or_else(|| home_dir().join("Projects"))
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
}

/// Loads the configuration file.
///
/// # Arguments
/// * `path` - Explicit configuration file, or `None` for [`CONFIG_FILE`]
///
/// # Returns
/// * `Result<Config>` - Parsed configuration; the default one when no
///   explicit file was requested and [`CONFIG_FILE`] does not exist
///
/// # Errors
/// * `Error::ConfigError` if an explicitly requested file is missing or
///   the content cannot be parsed
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };

    if !config_path.is_file() {
        if explicit {
            return Err(Error::ConfigError(format!(
                "Invalid configuration path: {}",
                config_path.display()
            )));
        }
        debug!("{} does not exist, using defaults", config_path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path).map_err(Error::IoError)?;
    parse_config(&content)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML
///   or carries unknown keys
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}
