use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::level::Level;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_level")]
    pub default_level: Level,
    /// JSON word catalog replacing the bundled lists.
    #[serde(default)]
    pub catalog_path: Option<String>,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_success_flash_ms")]
    pub success_flash_ms: u64,
    #[serde(default = "default_error_flash_ms")]
    pub error_flash_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme() -> String {
    "neon".to_string()
}
fn default_level() -> Level {
    Level::A1
}
fn default_tick_rate_ms() -> u64 {
    100
}
fn default_success_flash_ms() -> u64 {
    300
}
fn default_error_flash_ms() -> u64 {
    400
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_level: default_level(),
            catalog_path: None,
            tick_rate_ms: default_tick_rate_ms(),
            success_flash_ms: default_success_flash_ms(),
            error_flash_ms: default_error_flash_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("refleks")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn success_flash(&self) -> Duration {
        Duration::from_millis(self.success_flash_ms)
    }

    pub fn error_flash(&self) -> Duration {
        Duration::from_millis(self.error_flash_ms)
    }

    /// Pull out-of-range values back to something usable. Call after
    /// deserialization with the names of the themes that can be loaded.
    pub fn normalize(&mut self, available_themes: &[String]) {
        self.tick_rate_ms = self.tick_rate_ms.clamp(10, 1000);
        if !available_themes.iter().any(|t| *t == self.theme) {
            log::warn!("unknown theme {:?}, using {}", self.theme, default_theme());
            self.theme = default_theme();
        }
        if self.catalog_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            self.catalog_path = None;
        }
    }
}
