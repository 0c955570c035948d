use crate::config::{RunConfig, Settings};
use crate::core::Storage;
use crate::utils::error::{ForgifyError, Result};
use crate::utils::validation::{
    validate_deck_ref, validate_path, validate_range, validate_url, Validate,
};
use clap::Parser;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "forgify", version)]
#[command(about = "Fetch decklists from Moxfield and translate them into Forge-readable .dck files")]
#[command(long_about = "Fetch decklists from Moxfield and translate them into deck files \
readable with MtG Forge.\n\n--- Save time and play more ---")]
pub struct CliConfig {
    /// Moxfield deck URL or public deck id
    #[arg(value_name = "URL", required_unless_present = "set_path")]
    pub url: Option<String>,

    /// Persist DIR as the save path for future runs and exit
    #[arg(long = "set-path", value_name = "DIR")]
    pub set_path: Option<String>,

    /// Save into DIR for this run only, without touching the settings file
    #[arg(long, value_name = "DIR")]
    pub savepath: Option<String>,

    /// Settings file location
    #[arg(long, default_value = "forgify.toml", value_name = "FILE")]
    pub config: String,

    /// Moxfield API base URL
    #[arg(long, default_value = "https://api2.moxfield.com", value_name = "URL")]
    pub api_base: String,

    /// Fetch timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log system resource usage per phase
    #[arg(long)]
    pub monitor: bool,
}

impl CliConfig {
    /// Combines the CLI arguments with the persisted settings into the
    /// configuration for this run. `--savepath` wins over the settings file.
    pub fn resolve(&self, settings: &Settings) -> Result<RunConfig> {
        let deck_ref = self
            .url
            .clone()
            .ok_or_else(|| ForgifyError::MissingConfigError {
                field: "URL".to_string(),
            })?;

        let savepath = self
            .savepath
            .clone()
            .unwrap_or_else(|| settings.savepath.clone());

        Ok(RunConfig { deck_ref, savepath })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.url {
            validate_deck_ref("URL", url)?;
        }
        if let Some(dir) = &self.set_path {
            validate_path("--set-path", dir)?;
        }
        if let Some(dir) = &self.savepath {
            validate_path("--savepath", dir)?;
        }
        validate_path("--config", &self.config)?;
        validate_url("--api-base", &self.api_base)?;
        validate_range("--timeout", self.timeout, 1, 600)?;
        Ok(())
    }
}

/// Writes deck files into a base directory on the local filesystem. The
/// directory must already exist: a missing or unwritable directory surfaces
/// as an IO error instead of being created behind the user's back.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);
        fs::write(full_path, data)?;
        Ok(())
    }
}
