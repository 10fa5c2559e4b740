//! Application configuration schema

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Configuration schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// General behaviour settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Window preferences
    #[serde(default)]
    pub window: WindowConfig,
}

fn default_version() -> u32 {
    1
}

/// General behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code
    #[serde(default = "default_language")]
    pub language: String,

    /// Theme (light/dark/system)
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Write the config back to disk when settings change
    #[serde(default = "default_autosave")]
    pub autosave: bool,

    /// Log level: "error", "warn", "info", "debug", "trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_language() -> String {
    "en-US".to_string()
}

fn default_theme() -> String {
    "system".to_string()
}

fn default_autosave() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            theme: default_theme(),
            autosave: default_autosave(),
            log_level: default_log_level(),
        }
    }
}

/// Window preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    /// Window width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Window height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Start in fullscreen
    #[serde(default)]
    pub fullscreen: bool,
}

fn default_width() -> u32 {
    1280
}

fn default_height() -> u32 {
    720
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            fullscreen: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            general: GeneralConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

/// Platform-appropriate default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("statekeep")
        .join("config.yaml")
}
