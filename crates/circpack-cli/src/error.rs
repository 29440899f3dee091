//! Error type for the circpack CLI.

use std::io;

use thiserror::Error;

use circpack::PackError;

use crate::config::ConfigFileError;

/// Everything that can stop a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigFileError),

    #[error(transparent)]
    Pack(#[from] PackError),

    #[error("Style error: {0}")]
    Style(String),
}
