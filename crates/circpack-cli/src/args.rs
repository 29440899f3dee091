//! Command-line argument definitions for the circpack CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output path, configuration file
//! selection, logging verbosity, and a few per-run overrides of the packing
//! configuration.

use clap::Parser;

use circpack::config::SamplingStrategy;

/// Command-line arguments for the circpack tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file
    #[arg(short, long, default_value = "circles.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Seed for the random source, overriding the configuration file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Candidate sampling strategy (bounded, unbounded)
    #[arg(long)]
    pub sampling: Option<SamplingStrategy>,

    /// Hard cap on the number of placement trials
    #[arg(long)]
    pub max_iterations: Option<u64>,
}
