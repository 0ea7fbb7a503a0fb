use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::CliArgs;

/// Persisted application settings. Holds the mail relay and UI toggles
/// only - sender credentials are entered per session and never written
/// to disk.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    pub smtp: SmtpConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SmtpConfig {
    pub relay: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UiConfig {
    pub clear_form_after_register: bool,
    pub mask_credential: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            smtp: SmtpConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            relay: "smtp.gmail.com".to_string(),
            port: 587,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clear_form_after_register: true,
            mask_credential: true,
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "secretsanta")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("secretsanta.toml"))
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            // Create directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: CliArgs) -> Result<Self> {
        let mut config = Self::load(cli_args.config)?;

        // CLI args override config file
        if let Some(relay) = cli_args.relay {
            config.smtp.relay = relay;
        }
        if let Some(port) = cli_args.port {
            config.smtp.port = port;
        }

        Ok(config)
    }
}
