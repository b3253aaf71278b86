// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, stored in a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[store]` - Remote content store connection
//! - `[covers]` - Cover thumbnail cache
//! - `[video]` - Modal playback
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` CLI argument
//! 3. `REPORTS_GALLERY_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! The store URL and key can additionally be supplied through
//! `REPORTS_GALLERY_STORE_URL` and `REPORTS_GALLERY_STORE_KEY`.
//!
//! # Examples
//!
//! ```no_run
//! use reports_gallery::config;
//!
//! let (config, _warning) = config::load();
//! if let Some(settings) = config.rest_settings(None) {
//!     println!("{}", settings.endpoint());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::infrastructure::rest::RestSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding `[store] url`.
pub const ENV_STORE_URL: &str = "REPORTS_GALLERY_STORE_URL";

/// Environment variable overriding `[store] api_key`.
pub const ENV_STORE_KEY: &str = "REPORTS_GALLERY_STORE_KEY";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ar").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Remote content store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Project base URL. Without one the gallery starts empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default = "default_store_table")]
    pub table: String,

    /// Anonymous API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_store_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            table: default_store_table(),
            api_key: None,
            timeout_secs: DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    /// Builds connection settings, preferring the given overrides over the
    /// file values. Blank values count as unset.
    #[must_use]
    pub fn to_settings(
        &self,
        url_override: Option<&str>,
        key_override: Option<&str>,
    ) -> Option<RestSettings> {
        let base_url = non_blank(url_override).or_else(|| non_blank(self.url.as_deref()))?;
        let api_key = non_blank(key_override).or_else(|| non_blank(self.api_key.as_deref()));
        let table = non_blank(Some(self.table.as_str())).unwrap_or_else(default_store_table);

        Some(RestSettings {
            base_url,
            table,
            api_key,
            timeout: Duration::from_secs(clamp_timeout_secs(self.timeout_secs)),
        })
    }
}

/// Cover thumbnail settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoversConfig {
    /// Number of decoded covers kept in memory.
    #[serde(default = "default_cover_cache_capacity")]
    pub cache_capacity: usize,

    /// Width covers are downscaled to, in pixels.
    #[serde(default = "default_thumbnail_width")]
    pub thumbnail_width: u32,
}

impl Default for CoversConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_COVER_CACHE_CAPACITY,
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
        }
    }
}

/// Video modal settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoConfig {
    /// Start playback as soon as the modal opens.
    #[serde(default = "default_video_autoplay")]
    pub autoplay: bool,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            autoplay: DEFAULT_VIDEO_AUTOPLAY,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub covers: CoversConfig,

    #[serde(default)]
    pub video: VideoConfig,
}

impl Config {
    /// Store connection settings with precedence CLI > environment > file.
    ///
    /// Returns `None` when no store URL is configured anywhere.
    #[must_use]
    pub fn rest_settings(&self, cli_url: Option<&str>) -> Option<RestSettings> {
        let env_url = std::env::var(ENV_STORE_URL).ok();
        let env_key = std::env::var(ENV_STORE_KEY).ok();
        let url = non_blank(cli_url).or_else(|| non_blank(env_url.as_deref()));
        self.store.to_settings(url.as_deref(), env_key.as_deref())
    }

    /// Cover cache capacity, clamped to its valid range.
    #[must_use]
    pub fn cover_cache_capacity(&self) -> usize {
        self.covers
            .cache_capacity
            .clamp(MIN_COVER_CACHE_CAPACITY, MAX_COVER_CACHE_CAPACITY)
    }

    /// Thumbnail width, clamped to its valid range.
    #[must_use]
    pub fn thumbnail_width(&self) -> u32 {
        self.covers
            .thumbnail_width
            .clamp(MIN_THUMBNAIL_WIDTH, MAX_THUMBNAIL_WIDTH)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_store_table() -> String {
    DEFAULT_STORE_TABLE.to_string()
}

fn default_store_timeout_secs() -> u64 {
    DEFAULT_STORE_TIMEOUT_SECS
}

fn default_cover_cache_capacity() -> usize {
    DEFAULT_COVER_CACHE_CAPACITY
}

fn default_thumbnail_width() -> u32 {
    DEFAULT_THUMBNAIL_WIDTH
}

fn default_video_autoplay() -> bool {
    DEFAULT_VIDEO_AUTOPLAY
}

fn clamp_timeout_secs(secs: u64) -> u64 {
    secs.clamp(MIN_STORE_TIMEOUT_SECS, MAX_STORE_TIMEOUT_SECS)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some("config-load-error".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
