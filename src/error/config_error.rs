use std::path::PathBuf;

#[derive(Debug)]
/// Problems loading the configuration file.
pub enum ConfigError {
    /// The file exists but could not be read.
    Read {
        /// The path that was read.
        path:   PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid TOML for the expected layout.
    Parse {
        /// The path that was parsed.
        path:   PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Failed to read config file '{}': {source}", path.display())
            },
            Self::Parse { path, source } => {
                write!(f, "Failed to parse config file '{}': {source}", path.display())
            },
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
