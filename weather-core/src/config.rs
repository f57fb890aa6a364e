use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub const DEFAULT_API_URL: &str = "http://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_BIND: &str = "127.0.0.1:5001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "WEATHER_CONFIG";

/// Application configuration, built once at startup and handed to whoever needs it.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// request_timeout_secs = 10
/// strict_comparison = false
/// bind = "127.0.0.1:5001"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenWeather `appid`.
    pub api_key: Option<String>,

    pub api_url: String,

    pub request_timeout_secs: u64,

    /// Apply the single-city status check to comparisons as well.
    pub strict_comparison: bool,

    /// Listen address for `weather serve`.
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            strict_comparison: false,
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Config {
    /// Load config from disk (or defaults when there is no file yet), then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_env_with(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Overlay `API_KEY`, `WEATHER_API_URL` and `WEATHER_BIND` from `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("API_KEY").filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup("WEATHER_API_URL").filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
        if let Some(bind) = lookup("WEATHER_BIND").filter(|b| !b.is_empty()) {
            self.bind = bind;
        }
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
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

    /// Path to the config file, honouring `WEATHER_CONFIG`.
    pub fn config_file_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("dev", "weather-app", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: set API_KEY or run `weather configure` and enter your OpenWeather key."
            )
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
