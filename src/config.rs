use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::ConfigError, visibility::SectionStates};

/// Settings read from `config.toml`.
///
/// Every key is optional; missing keys take their defaults.
///
/// # Example
/// ```
/// use calcboard::config::Config;
///
/// let config: Config = toml::from_str("[sections]\nlinear = false\n").unwrap();
/// assert!(config.sections.expression);
/// assert!(!config.sections.linear);
/// assert_eq!(config.logging.level, "warn");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sections shown by `board` before any `--show`/`--hide` flags.
    pub sections: SectionStates,
    /// Logging settings.
    pub logging:  LoggingConfig,
}

/// The `[logging]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// A `tracing` filter directive, e.g. `warn` or `calcboard=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

/// `<config_dir>/calcboard/config.toml`, when the platform has a config
/// directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::config_dir().map(|dir| dir.join("calcboard").join("config.toml"))
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// location is tried and silently skipped if absent.
    ///
    /// # Errors
    /// [`ConfigError::Read`] if a file cannot be read, [`ConfigError::Parse`]
    /// if it is not valid for this layout.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                },
            },
        }
    }

    /// Reads and parses one file.
    ///
    /// # Errors
    /// See [`Config::load`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(),
                                                                                        source })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(),
                                                                                  source })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
