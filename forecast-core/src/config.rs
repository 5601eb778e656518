use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    format::{Units, WeekdayNames, is_valid_time_format},
    provider::ProviderId,
};

pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";

/// Configuration for a single provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Where the provider reads its forecast from, e.g. a snapshot file path.
    pub source: String,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub units: Units,

    /// chrono strftime string for hourly times.
    #[serde(default = "default_time_format")]
    pub time_format: String,

    #[serde(default)]
    pub weekday_names: WeekdayNames,

    /// Directory holding `<icon-code>.png` files.
    #[serde(default)]
    pub icon_dir: Option<PathBuf>,

    /// Optional default provider id, e.g. "snapshot".
    #[serde(default)]
    pub default_provider: Option<String>,

    /// Example TOML:
    /// [providers.snapshot]
    /// source = "/path/to/forecast.json"
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            units: Units::default(),
            time_format: default_time_format(),
            weekday_names: WeekdayNames::default(),
            icon_dir: None,
            default_provider: None,
            providers: HashMap::new(),
        }
    }
}

/// The formatting settings a view needs, fixed for the duration of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub units: Units,
    pub time_format: String,
    pub weekday_names: WeekdayNames,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Config::default().display()
    }
}

impl Config {
    pub fn display(&self) -> DisplayConfig {
        DisplayConfig {
            units: self.units,
            time_format: self.time_format.clone(),
            weekday_names: self.weekday_names,
        }
    }

    /// Return the default provider as a strongly-typed ProviderId.
    pub fn default_provider_id(&self) -> Result<ProviderId> {
        let s = self.default_provider.as_ref().ok_or_else(|| {
            anyhow!(
                "No forecast service configured.\n\
                 Hint: run `forecast configure --snapshot <path>` first."
            )
        })?;

        ProviderId::try_from(s.as_str())
    }

    pub fn provider_config(&self, id: ProviderId) -> Option<&ProviderConfig> {
        self.providers.get(id.as_str())
    }

    /// Store default provider as string.
    pub fn set_default_provider(&mut self, id: ProviderId) {
        self.default_provider = Some(id.as_str().to_string());
    }

    /// Set/replace a provider source and make it the default if none is set.
    pub fn upsert_provider_source(&mut self, provider_id: ProviderId, source: String) {
        self.providers.insert(provider_id.as_str().to_string(), ProviderConfig { source });

        if self.default_provider.is_none() {
            self.default_provider = Some(provider_id.to_string());
        }
    }

    pub fn provider_source(&self, provider_id: ProviderId) -> Option<&str> {
        self.provider_config(provider_id).map(|cfg| cfg.source.as_str())
    }

    /// Whether a default service is chosen and has a source configured.
    pub fn is_service_ready(&self) -> bool {
        self.default_provider_id()
            .map(|id| self.provider_source(id).is_some_and(|s| !s.is_empty()))
            .unwrap_or(false)
    }

    pub fn set_time_format(&mut self, format: &str) -> Result<()> {
        if !is_valid_time_format(format) {
            bail!("Invalid time format '{format}'. Use chrono strftime syntax, e.g. \"%-I:%M %p\".");
        }
        self.time_format = format.to_string();
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !is_valid_time_format(&self.time_format) {
            bail!("Invalid time_format '{}'", self.time_format);
        }
        Ok(())
    }

    /// Load config from the platform location, or return an empty default if
    /// it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-workflow", "forecast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
