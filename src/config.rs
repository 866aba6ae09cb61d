//! Configuration module.
//!
//! Layered configuration system that supports:
//! - Default values
//! - TOML configuration file (`.rudiments/settings.toml`)
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `RUDIMENTS_` and use double
//! underscores to separate nested levels:
//! - `RUDIMENTS_LOGGING__DEFAULT=debug` sets `logging.default`
//! - `RUDIMENTS_CALCULATOR__INITIAL_RESULT=7` sets `calculator.initial_result`
//! - `RUDIMENTS_OUTPUT__JSON=true` sets `output.json`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory holding the settings file, relative to the workspace root.
pub const CONFIG_DIR: &str = ".rudiments";
pub const CONFIG_FILE: &str = "settings.toml";
pub const ENV_PREFIX: &str = "RUDIMENTS_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub calculator: CalculatorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level applied to every target without an override
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `calculator = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CalculatorConfig {
    /// Stored result a freshly built calculator starts with
    #[serde(default)]
    pub initial_result: i32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// Emit JSON instead of text where a command supports it
    #[serde(default)]
    pub json: bool,
}

fn default_version() -> u32 {
    1
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
            calculator: CalculatorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources, using the workspace settings file
    /// if one is found above the current directory.
    pub fn load() -> Result<Self> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(Self::default_config_path);
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file, still honouring env overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels, single underscore
            // stays inside field names
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
            .extract()?;
        Ok(settings)
    }

    /// Find `.rudiments/settings.toml` searching from the current directory up.
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Path of the settings file relative to the current directory.
    pub fn default_config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Write a default settings file at `path`, refusing to overwrite unless `force`.
    pub fn init_config_file(path: impl AsRef<Path>, force: bool) -> Result<PathBuf> {
        let config_path = path.as_ref().to_path_buf();

        if !force && config_path.exists() {
            return Err(Error::Config(
                "Configuration file already exists. Use --force to overwrite".to_string(),
            ));
        }

        Settings::default().save(&config_path)?;
        tracing::info!("[config] wrote {}", config_path.display());

        Ok(config_path)
    }
}
