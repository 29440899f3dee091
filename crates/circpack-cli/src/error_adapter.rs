//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. The library crates
//! stay free of any miette dependency.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use circpack::{ConfigError, PackError};

use crate::{config::ConfigFileError, error::CliError};

/// Adapter that renders a [`CliError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Io(_) => "circpack::io",
            CliError::ConfigFile(_) => "circpack::config_file",
            CliError::Pack(PackError::Config(_)) => "circpack::config",
            CliError::Style(_) => "circpack::style",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        help_for(self.0).map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Suggested fix for errors the user can correct in the configuration.
fn help_for(err: &CliError) -> Option<&'static str> {
    match err {
        CliError::ConfigFile(ConfigFileError::MissingFile(_)) => {
            Some("check the path passed with --config")
        }
        CliError::ConfigFile(ConfigFileError::Parse(_)) => {
            Some("see config.example.toml for the expected layout")
        }
        CliError::Pack(PackError::Config(config_err)) => Some(match config_err {
            ConfigError::InvalidMaxRadius(_) => "set packing.max_radius to a positive number",
            ConfigError::InvalidMinRadius(_) => "set packing.min_radius to zero or more",
            ConfigError::RadiusOrder { .. } => "packing.min_radius must be <= packing.max_radius",
            ConfigError::ZeroPatience => "set packing.patience to 1 or more",
            ConfigError::InvalidRegion { .. } => {
                "packing.region.width and packing.region.height must be positive"
            }
            ConfigError::InvalidShrinkStep(_) => "set packing.shrink_step to a positive number",
            ConfigError::ZeroIterationCap => "remove packing.max_iterations or set it to 1 or more",
            ConfigError::RegionTooSmall { .. } => {
                "lower packing.min_radius or use sampling = \"unbounded\""
            }
        }),
        CliError::Style(_) => Some("colors accept CSS syntax such as \"red\" or \"#ff8000\""),
        CliError::Io(_) => None,
    }
}
