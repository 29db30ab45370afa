//! Configuration file support for inkbleed.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkbleed/config.toml`. Settings include grid layout, the
//! palette, paint steps, and the status line.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{GridConfig, PaintConfig, PaletteConfig, StatusConfig};

use crate::draw::{Palette, color::*};
use crate::grid::MAX_DIMENSION;
use crate::paint::{PaintHandler, PaintPropagator, PaintSettings, StartupLayout};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [grid]
/// dimension = 10
/// grid_color = "white"
///
/// [palette]
/// colors = ["red", "orange", "yellow", "green", "blue", "violet"]
///
/// [paint]
/// main_step = 75
/// bleed_step = 20
///
/// [status]
/// text = "Click and Drag to Draw"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Grid size and decoration
    #[serde(default)]
    pub grid: GridConfig,

    /// Colors a bleeding bead cycles through
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Opacity steps
    #[serde(default)]
    pub paint: PaintConfig,

    /// Status line
    #[serde(default)]
    pub status: StatusConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `grid.dimension`: 1 - 32
    /// - `grid.border_width`: 0 - 10
    /// - `paint.main_step`, `paint.bleed_step`: 1 - 255
    /// - `palette.colors`: at least two known colors
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_DIMENSION).contains(&self.grid.dimension) {
            warn!(
                "Invalid grid dimension {}, clamping to 1-{} range",
                self.grid.dimension, MAX_DIMENSION
            );
            self.grid.dimension = self.grid.dimension.clamp(1, MAX_DIMENSION);
        }

        if self.grid.border_width > 10 {
            warn!(
                "Invalid border_width {}, clamping to 0-10 range",
                self.grid.border_width
            );
            self.grid.border_width = 10;
        }

        if self.paint.main_step == 0 {
            warn!("Invalid main_step 0, using 1");
            self.paint.main_step = 1;
        }

        if self.paint.bleed_step == 0 {
            warn!("Invalid bleed_step 0, using 1");
            self.paint.bleed_step = 1;
        }

        // Unknown names are dropped, not substituted
        let before = self.palette.colors.len();
        self.palette.colors.retain(|spec| {
            let known = spec.try_to_color().is_some();
            if !known {
                warn!("Unknown palette color {:?}, skipping", spec);
            }
            known
        });

        if let Err(err) = Palette::new(self.palette_colors()) {
            warn!(
                "Invalid palette ({} of {} colors usable): {}; falling back to default palette",
                self.palette.colors.len(),
                before,
                err
            );
            self.palette.colors = types::default_palette_colors();
        }
    }

    /// Overrides the grid dimension, clamping to the supported range.
    pub fn set_dimension(&mut self, dimension: u32) {
        if !(1..=MAX_DIMENSION).contains(&dimension) {
            warn!(
                "Requested grid dimension {} out of range, clamping to 1-{}",
                dimension, MAX_DIMENSION
            );
        }
        self.grid.dimension = dimension.clamp(1, MAX_DIMENSION);
    }

    fn palette_colors(&self) -> Vec<crate::draw::Color> {
        self.palette
            .colors
            .iter()
            .filter_map(ColorSpec::try_to_color)
            .collect()
    }

    /// Builds the palette described by this config.
    ///
    /// Falls back to the default palette if the configured one is unusable,
    /// which only happens when validation was skipped.
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette_colors()).unwrap_or_default()
    }

    pub fn paint_settings(&self) -> PaintSettings {
        PaintSettings {
            main_step: self.paint.main_step,
            bleed_step: self.paint.bleed_step,
        }
    }

    pub fn startup_layout(&self) -> StartupLayout {
        StartupLayout {
            dimension: self.grid.dimension,
            grid_color: self.grid.grid_color.to_color_or(WHITE),
            border_width: self.grid.border_width,
            status_text: self.status.text.clone(),
            status_color: self.status.color.to_color_or(VIOLET),
        }
    }

    /// Builds the click-and-drag painter configured by this file.
    pub fn build_handler(&self) -> PaintHandler {
        PaintHandler::new(
            PaintPropagator::new(self.palette(), self.paint_settings()),
            self.startup_layout(),
        )
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkbleed/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkbleed");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Saves the current configuration to file.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(source: &str) -> Config {
        let mut config = Config::from_toml(source).unwrap();
        config.validate_and_clamp();
        config
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse("");
        assert_eq!(config.grid.dimension, 10);
        assert_eq!(config.palette().len(), 6);
        assert_eq!(config.paint_settings(), PaintSettings::default());
        assert_eq!(config.startup_layout(), StartupLayout::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse(
            "[grid]\ndimension = 99\nborder_width = 40\n[paint]\nmain_step = 0\nbleed_step = 0\n",
        );
        assert_eq!(config.grid.dimension, MAX_DIMENSION);
        assert_eq!(config.grid.border_width, 10);
        assert_eq!(config.paint.main_step, 1);
        assert_eq!(config.paint.bleed_step, 1);
    }

    #[test]
    fn unknown_palette_colors_are_skipped() {
        let config = parse("[palette]\ncolors = [\"black\", \"mauve\", [10, 20, 30]]\n");
        let palette = config.palette();
        assert_eq!(palette.colors(), &[BLACK, crate::draw::Color::new(10, 20, 30)]);
    }

    #[test]
    fn short_palette_falls_back_to_default() {
        let config = parse("[palette]\ncolors = [\"red\", \"mauve\"]\n");
        assert_eq!(config.palette(), Palette::default());
    }

    #[test]
    fn example_file_parses_to_defaults() {
        let config = parse(include_str!("../../config.example.toml"));
        assert_eq!(config.grid.dimension, 10);
        assert_eq!(config.palette(), Palette::default());
        assert_eq!(config.status.text, "Click and Drag to Draw");
    }

    #[test]
    fn save_and_load_preserve_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.grid.dimension = 6;
        config.status.text = "Paint!".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.grid.dimension, 6);
        assert_eq!(loaded.status.text, "Paint!");
    }

    #[test]
    fn create_default_file_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");

        Config::create_default_file(&path).unwrap();
        assert!(Config::create_default_file(&path).is_err());
    }

    #[test]
    fn invalid_toml_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[grid\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }
}
