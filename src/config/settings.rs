use crate::utils::error::{ForgifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default save directory when no settings file exists: the current
/// working directory.
pub const DEFAULT_SAVEPATH: &str = ".";

/// The single persisted configuration record: where `.dck` files are saved.
/// Read once per run, overwritten wholesale by `--set-path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub savepath: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            savepath: DEFAULT_SAVEPATH.to_string(),
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ForgifyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ForgifyError::ConfigError {
            message: format!("settings file is not valid TOML: {}", e),
        })
    }

    /// A missing settings file is not an error, only a corrupt one is: the
    /// caller decides whether to fall back to defaults on `ConfigError`.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            tracing::debug!(
                "No settings file at {:?}, using default savepath {:?}",
                path.as_ref(),
                DEFAULT_SAVEPATH
            );
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ForgifyError::ConfigError {
            message: format!("could not serialize settings: {}", e),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
