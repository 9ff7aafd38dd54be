//! Configuration file loading with precedence handling.

use crate::measure::{
    FontBook, FontDescriptor, FontMetrics, GlyphMetricsMeasurer, ImageAspectResolver,
    PaddedMeasurer, FALLBACK_IMAGE_HEIGHT,
};
use crate::view_state::height::{CardStyle, ItemHeightCalculator};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CAMPAIGN_LAYOUT_CONFIG";

/// Environment variable overriding card spacing.
pub const SPACING_ENV_VAR: &str = "CAMPAIGN_LAYOUT_SPACING";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A length or font size is negative or not a finite number.
    #[error("Invalid value for {key}: {value} (must be a finite, non-negative number)")]
    InvalidValue {
        /// Config key or flag that carried the value.
        key: String,
        /// The rejected value, as given.
        value: String,
    },
}

/// Reject negative, NaN and infinite lengths.
fn validate_length(key: &str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// TOML configuration file structure.
///
/// All fields are optional; unspecified fields keep the card defaults.
/// Corresponds to `~/.config/campaign-layout/config.toml`:
///
/// ```toml
/// title_font = "Helvetica Neue Bold"
/// title_size = 17.0
/// body_font = "Hoefler Text"
/// body_size = 12.0
/// spacing = 16.0
/// fallback_image_height = 480.0
/// label_padding = 0.0
///
/// [fonts."Avenir Next"]
/// advance = 0.55
/// line_height = 1.25
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Campaign name font.
    #[serde(default)]
    pub title_font: Option<String>,

    /// Campaign name point size.
    #[serde(default)]
    pub title_size: Option<f64>,

    /// Description font.
    #[serde(default)]
    pub body_font: Option<String>,

    /// Description point size.
    #[serde(default)]
    pub body_size: Option<f64>,

    /// Fixed vertical spacing per card.
    #[serde(default)]
    pub spacing: Option<f64>,

    /// Height used for images that have not arrived.
    #[serde(default)]
    pub fallback_image_height: Option<f64>,

    /// Padding around each text label, on every edge.
    #[serde(default)]
    pub label_padding: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Additional font metrics, keyed by font name.
    #[serde(default)]
    pub fonts: Option<HashMap<String, FontMetrics>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Campaign name font.
    pub title_font: String,
    /// Campaign name point size.
    pub title_size: f64,
    /// Description font.
    pub body_font: String,
    /// Description point size.
    pub body_size: f64,
    /// Fixed vertical spacing per card.
    pub spacing: f64,
    /// Height used for images that have not arrived.
    pub fallback_image_height: f64,
    /// Padding around each text label, on every edge.
    pub label_padding: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Default tracing filter.
    pub log_level: String,
    /// Fonts added on top of the built-in font book.
    pub extra_fonts: HashMap<String, FontMetrics>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let style = CardStyle::default();
        Self {
            title_font: style.title_font.name,
            title_size: style.title_font.size,
            body_font: style.body_font.name,
            body_size: style.body_font.size,
            spacing: style.spacing,
            fallback_image_height: FALLBACK_IMAGE_HEIGHT,
            label_padding: 0.0,
            log_file_path: default_log_path(),
            log_level: "info".to_string(),
            extra_fonts: HashMap::new(),
        }
    }
}

impl ResolvedConfig {
    /// Card style described by this config.
    pub fn card_style(&self) -> CardStyle {
        CardStyle {
            title_font: FontDescriptor::new(self.title_font.clone(), self.title_size),
            body_font: FontDescriptor::new(self.body_font.clone(), self.body_size),
            spacing: self.spacing,
        }
    }

    /// Built-in fonts plus the configured extras.
    pub fn font_book(&self) -> FontBook {
        let mut book = FontBook::default();
        for (name, metrics) in &self.extra_fonts {
            book.insert(name.clone(), *metrics);
        }
        book
    }

    /// Height calculator wired with this config's fonts, style, padding and
    /// fallback.
    pub fn height_calculator(&self) -> ItemHeightCalculator<PaddedMeasurer<GlyphMetricsMeasurer>> {
        ItemHeightCalculator::new(
            PaddedMeasurer::new(GlyphMetricsMeasurer::new(self.font_book()), self.label_padding),
            self.card_style(),
            ImageAspectResolver::new(self.fallback_image_height),
        )
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/campaign-layout/campaign-layout.log` on Unix-like
/// systems, or the platform state directory elsewhere. Falls back to the
/// current directory if no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("campaign-layout").join("campaign-layout.log")
    } else {
        PathBuf::from("campaign-layout.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/campaign-layout/config.toml` on Unix, the platform
/// config directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("campaign-layout").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CAMPAIGN_LAYOUT_CONFIG` environment variable
/// 3. Default path `~/.config/campaign-layout/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if a size, spacing, padding or
/// fallback height in the file is negative or not finite.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    Ok(ResolvedConfig {
        title_font: config.title_font.unwrap_or(defaults.title_font),
        title_size: validate_length(
            "title_size",
            config.title_size.unwrap_or(defaults.title_size),
        )?,
        body_font: config.body_font.unwrap_or(defaults.body_font),
        body_size: validate_length("body_size", config.body_size.unwrap_or(defaults.body_size))?,
        spacing: validate_length("spacing", config.spacing.unwrap_or(defaults.spacing))?,
        fallback_image_height: validate_length(
            "fallback_image_height",
            config
                .fallback_image_height
                .unwrap_or(defaults.fallback_image_height),
        )?,
        label_padding: validate_length(
            "label_padding",
            config.label_padding.unwrap_or(defaults.label_padding),
        )?,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        log_level: config.log_level.unwrap_or(defaults.log_level),
        extra_fonts: config.fonts.unwrap_or(defaults.extra_fonts),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CAMPAIGN_LAYOUT_SPACING`: override card spacing. Values that do not
///   parse as a finite, non-negative number are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(spacing) = std::env::var(SPACING_ENV_VAR)
        .ok()
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
    {
        config.spacing = spacing;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if an override is negative or not
/// finite.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    spacing_override: Option<f64>,
    fallback_override: Option<f64>,
) -> Result<ResolvedConfig, ConfigError> {
    if let Some(spacing) = spacing_override {
        config.spacing = validate_length("--spacing", spacing)?;
    }

    if let Some(fallback) = fallback_override {
        config.fallback_image_height = validate_length("--fallback-height", fallback)?;
    }

    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
