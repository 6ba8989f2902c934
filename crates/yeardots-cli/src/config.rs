use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use yeardots_types::{Granularity, RemainingMode};

pub const CONFIG_ENV_VAR: &str = "YEARDOTS_CONFIG";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. YEARDOTS_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory (recommended default)
/// 4. ~/.yeardots/config.toml (fallback for systems without one)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("yeardots").join(CONFIG_FILE_NAME));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".yeardots").join(CONFIG_FILE_NAME));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or platform config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub initial_granularity: Granularity,
    pub remaining_mode: RemainingMode,
    /// Dots per row in the year grid
    pub year_columns: usize,
    /// Dots per row in the month, week and day grids
    pub detail_columns: usize,
    pub color: ColorChoice,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            initial_granularity: Granularity::Year,
            remaining_mode: RemainingMode::Days,
            year_columns: 26,
            detail_columns: 7,
            color: ColorChoice::Auto,
        }
    }
}

impl DisplayConfig {
    pub fn columns_for(&self, granularity: Granularity) -> usize {
        match granularity {
            Granularity::Year => self.year_columns,
            Granularity::Month | Granularity::Week | Granularity::Day => self.detail_columns,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Missing files load as defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.year_columns == 0 || self.display.detail_columns == 0 {
            return Err(Error::Config(
                "display.year_columns and display.detail_columns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
