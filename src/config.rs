//! Grid configuration parsing and validation.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{AppError, Result};

/// Grid dimensions for one simulator run.
///
/// Both dimensions default to 5, giving the classic 5×5 grid with valid
/// coordinates `0..=4` on each axis.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GridConfig {
    /// Number of columns; valid x coordinates are `0..width`.
    #[serde(default = "default_width")]
    pub width: i32,
    /// Number of rows; valid y coordinates are `0..height`.
    #[serde(default = "default_height")]
    pub height: i32,
}

fn default_width() -> i32 {
    5
}

fn default_height() -> i32 {
    5
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Global configuration parsed from an optional `config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// Grid dimensions.
    #[serde(default)]
    pub grid: GridConfig,
}

impl GlobalConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when the TOML is malformed or the grid
    /// dimensions fail validation.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when the file cannot be read, is not
    /// valid TOML, or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("cannot read config: {err}")))?;
        Self::from_toml_str(&text)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] when either grid dimension is not a
    /// positive integer.
    pub fn validate(&self) -> Result<()> {
        if self.grid.width < 1 || self.grid.height < 1 {
            return Err(AppError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }
        Ok(())
    }
}
