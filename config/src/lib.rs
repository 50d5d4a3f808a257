//! Optional configuration for hello.
//!
//! The file lives at `~/.hello/config.toml`. Its absence is the normal case
//! and means "use the defaults".
//!
//! ```toml
//! [greeting]
//! language = "fr"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hello_quote::Language;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Default, Deserialize)]
pub struct HelloConfig {
    pub greeting: Option<GreetingConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GreetingConfig {
    /// Language tag or name for the greeting line: "en", "fr", "es".
    pub language: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl HelloConfig {
    /// Load the config from the default location.
    ///
    /// Returns `Ok(None)` when there is no home directory or no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Ok(Some(config))
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Resolve the configured greeting language.
    ///
    /// Unknown values are logged and ignored.
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        let raw = self.greeting.as_ref()?.language.as_deref()?;
        match raw.parse::<Language>() {
            Ok(language) => Some(language),
            Err(err) => {
                tracing::warn!("{err}; falling back to the default");
                None
            }
        }
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".hello").join("config.toml"))
}
