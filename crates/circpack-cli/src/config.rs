//! Configuration loading for the CLI
//!
//! This module defines the on-disk [`AppConfig`] layout and handles finding
//! and loading TOML configuration files from various locations (explicit
//! path, local directory, system directory).
//!
//! ```toml
//! [packing]
//! max_radius = 50
//! min_radius = 5
//! patience = 1000
//!
//! [packing.region]
//! width = 200
//! height = 150
//!
//! [style]
//! fill_color = "steelblue"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use circpack::config::PackConfig;

use crate::{color::Color, error::CliError};

const DEFAULT_FILL_COLOR: &str = "red";
const DEFAULT_STROKE_COLOR: &str = "black";
const DEFAULT_STROKE_WIDTH: f32 = 1.5;

/// Configuration-file errors
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

/// Top-level CLI configuration combining packing and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Packing engine section.
    #[serde(default)]
    packing: PackConfig,

    /// Rendering style section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Returns the packing configuration.
    pub fn packing(&self) -> &PackConfig {
        &self.packing
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling of the rendered packing.
///
/// Colors are kept as strings until rendering so that a bad color is reported
/// with the name the user wrote.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    fill_color: Option<String>,

    #[serde(default)]
    stroke_color: Option<String>,

    #[serde(default)]
    stroke_width: Option<f32>,

    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the disk fill [`Color`], red unless configured.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Style`] if the configured string is not a color.
    pub fn fill_color(&self) -> Result<Color, CliError> {
        parse_color(
            "fill_color",
            self.fill_color.as_deref().unwrap_or(DEFAULT_FILL_COLOR),
        )
    }

    /// Returns the outline [`Color`], black unless configured.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Style`] if the configured string is not a color.
    pub fn stroke_color(&self) -> Result<Color, CliError> {
        parse_color(
            "stroke_color",
            self.stroke_color.as_deref().unwrap_or(DEFAULT_STROKE_COLOR),
        )
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH)
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Style`] if the configured string is not a color.
    pub fn background_color(&self) -> Result<Option<Color>, CliError> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, CliError> {
    Color::new(value).map_err(|err| CliError::Style(format!("Invalid {field} in config: {err}")))
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (circpack/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, CliError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("circpack/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "circpack", "circpack") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file is missing, unreadable, or not valid TOML for
/// [`AppConfig`].
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, CliError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigFileError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Result<AppConfig, CliError> {
    toml::from_str(content).map_err(|err| ConfigFileError::Parse(err.to_string()).into())
}
