//! Configuration loading for the vitrine terminal site.
//!
//! Settings live in `config.toml` under the platform config directory.
//! A missing file yields the defaults; enum-valued fields accept the
//! kebab-case names and quietly fall back to their defaults when given
//! something unrecognized, so a typo never takes the site down.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use vitrine_core::{AnimationSpeed, ColorTheme};

/// Errors from explicit config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub background: BackgroundConfig,
}

/// Chrome and accessibility settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Accent color theme.
    #[serde(deserialize_with = "lenient_theme")]
    pub theme: ColorTheme,
    /// Render the mouse cursor overlay and its trail.
    pub cursor_trail: bool,
    /// Jump straight to the site without the boot screen.
    pub skip_loading: bool,
    /// Disable entrance animations: sections render immediately and the
    /// logo is not typed out.
    pub reduced_motion: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ColorTheme::default(),
            cursor_trail: true,
            skip_loading: false,
            reduced_motion: false,
        }
    }
}

/// Particle background settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Render the particle field at all.
    pub enabled: bool,
    /// Size of the particle pool.
    pub particle_count: usize,
    /// Animation pacing.
    #[serde(deserialize_with = "lenient_speed")]
    pub speed: AnimationSpeed,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            particle_count: 30,
            speed: AnimationSpeed::default(),
        }
    }
}

fn lenient_theme<'de, D>(deserializer: D) -> Result<ColorTheme, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(ColorTheme::parse(&name))
}

fn lenient_speed<'de, D>(deserializer: D) -> Result<AnimationSpeed, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(AnimationSpeed::parse(&name))
}

impl Config {
    /// Path of the config file, if a home directory can be resolved.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "vitrine").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load the config file from disk.
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Load the config file, falling back to defaults when it is
    /// missing or malformed. The site always starts.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.ui.theme, ColorTheme::Violet);
        assert!(config.ui.cursor_trail);
        assert!(!config.ui.reduced_motion);
        assert!(config.background.enabled);
        assert_eq!(config.background.particle_count, 30);
        assert_eq!(config.background.speed, AnimationSpeed::Medium);
    }

    #[test]
    fn parses_a_full_file() {
        let config = Config::from_toml(
            r#"
            [ui]
            theme = "cyan"
            cursor_trail = false
            skip_loading = true
            reduced_motion = true

            [background]
            enabled = false
            particle_count = 12
            speed = "fast"
            "#,
        )
        .expect("parse");
        assert_eq!(config.ui.theme, ColorTheme::Cyan);
        assert!(!config.ui.cursor_trail);
        assert!(config.ui.skip_loading);
        assert!(config.ui.reduced_motion);
        assert!(!config.background.enabled);
        assert_eq!(config.background.particle_count, 12);
        assert_eq!(config.background.speed, AnimationSpeed::Fast);
    }

    #[test]
    fn partial_files_keep_defaults_elsewhere() {
        let config = Config::from_toml("[background]\nparticle_count = 5\n").expect("parse");
        assert_eq!(config.background.particle_count, 5);
        assert!(config.background.enabled);
        assert_eq!(config.ui.theme, ColorTheme::Violet);
    }

    #[test]
    fn unknown_enum_names_fall_back() {
        let config =
            Config::from_toml("[ui]\ntheme = \"mauve\"\n\n[background]\nspeed = \"warp\"\n")
                .expect("parse");
        assert_eq!(config.ui.theme, ColorTheme::Violet);
        assert_eq!(config.background.speed, AnimationSpeed::Medium);
    }

    #[test]
    fn empty_input_is_all_defaults() {
        let config = Config::from_toml("").expect("parse");
        assert_eq!(config.background.particle_count, 30);
    }
}
