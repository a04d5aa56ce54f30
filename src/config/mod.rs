//! Configuration file loading.
//!
//! The file lives at `<config_dir>/listbox/config.json` unless a path is given
//! explicitly. Every field is optional; a missing file means defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::widget::{Overflow, Theme};

/// Theme colours as written in the config file (`"red"`, `"#ff8800"`, `"8"`, `"reset"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub item_fg: String,
    pub item_bg: String,
    pub border_fg: String,
    pub title_fg: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            item_fg: "reset".to_string(),
            item_bg: "reset".to_string(),
            border_fg: "reset".to_string(),
            title_fg: "reset".to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn to_theme(&self) -> Result<Theme> {
        Ok(Theme {
            item_fg: parse_color("item_fg", &self.item_fg)?,
            item_bg: parse_color("item_bg", &self.item_bg)?,
            border_fg: parse_color("border_fg", &self.border_fg)?,
            title_fg: parse_color("title_fg", &self.title_fg)?,
        })
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color> {
    Color::from_str(value).map_err(|_| anyhow!("invalid color `{}` for theme.{}", value, field))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub overflow: Overflow,
}

impl Config {
    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("listbox").join("config.json"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config: {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        info!(path = %path.display(), overflow = %config.overflow, "loaded config");
        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
