use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::keyboard::layout::KeyboardLayout;

pub const APP_DIR: &str = "tui-typing-tutor";

const DEFAULT_ROW_WIDTH: NonZeroUsize = NonZeroUsize::new(70).unwrap();

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_row_width")]
    pub row_width: i64,
    #[serde(default = "default_wpm_ceiling")]
    pub wpm_ceiling: u32,
    #[serde(default = "default_frustration_threshold")]
    pub frustration_threshold: u32,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_keyboard_layout")]
    pub keyboard_layout: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passage_path: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_row_width() -> i64 {
    DEFAULT_ROW_WIDTH.get() as i64
}
fn default_wpm_ceiling() -> u32 {
    60
}
fn default_frustration_threshold() -> u32 {
    5
}
fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_keyboard_layout() -> String {
    "tarmak2-dhm".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            row_width: default_row_width(),
            wpm_ceiling: default_wpm_ceiling(),
            frustration_threshold: default_frustration_threshold(),
            theme: default_theme(),
            keyboard_layout: default_keyboard_layout(),
            passage_path: None,
            log_level: default_log_level(),
        }
    }
}

/// Validated values the engine runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineSettings {
    pub row_width: NonZeroUsize,
    pub wpm_ceiling: u32,
    pub frustration_threshold: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            row_width: DEFAULT_ROW_WIDTH,
            wpm_ceiling: default_wpm_ceiling(),
            frustration_threshold: default_frustration_threshold(),
        }
    }
}

impl Config {
    /// Load from the user config file, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Reject values the engine cannot run with. Runs before any wrapping.
    pub fn validate(&self) -> Result<EngineSettings, ConfigError> {
        let row_width = usize::try_from(self.row_width)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ConfigError::InvalidRowWidth(self.row_width))?;
        if self.wpm_ceiling == 0 {
            return Err(ConfigError::InvalidWpmCeiling);
        }
        self.layout()?;
        Ok(EngineSettings {
            row_width,
            wpm_ceiling: self.wpm_ceiling,
            frustration_threshold: self.frustration_threshold,
        })
    }

    pub fn layout(&self) -> Result<KeyboardLayout, ConfigError> {
        KeyboardLayout::by_name(&self.keyboard_layout)
            .ok_or_else(|| ConfigError::UnknownLayout(self.keyboard_layout.clone()))
    }
}
