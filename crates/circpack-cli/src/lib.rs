//! circpack CLI library
//!
//! This module contains the core CLI logic for the circpack tool: load a
//! configuration, pack the region, and render the packing to SVG.

pub mod color;
pub mod config;
pub mod error;
pub mod error_adapter;
pub mod render;

mod args;

pub use args::Args;
pub use error::CliError;

use log::info;

use circpack::{Packer, config::PackConfig};

/// Run the circpack CLI application
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid packing configuration
/// - Invalid style colors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(output_path = args.output; "Packing circles");

    let app_config = config::load_config(args.config.as_ref())?;
    let pack_config = apply_overrides(app_config.packing().clone(), args);

    let packing = Packer::new(pack_config).pack()?;
    info!(
        circles = packing.len(),
        trials = packing.trials(),
        coverage = packing.coverage();
        "Region packed"
    );

    let document = render::render_packing(&packing, app_config.style())?;
    render::write_document(&args.output, &document)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Applies the command-line overrides on top of the loaded configuration.
fn apply_overrides(mut config: PackConfig, args: &Args) -> PackConfig {
    if let Some(seed) = args.seed {
        config = config.with_seed(Some(seed));
    }

    if let Some(sampling) = args.sampling {
        config = config.with_sampling(sampling);
    }

    if let Some(max_iterations) = args.max_iterations {
        config = config.with_max_iterations(Some(max_iterations));
    }

    config
}

#[cfg(test)]
mod tests {
    use circpack::config::SamplingStrategy;

    use super::*;

    fn args() -> Args {
        Args {
            output: "out.svg".to_string(),
            config: None,
            log_level: "off".to_string(),
            seed: None,
            sampling: None,
            max_iterations: None,
        }
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = PackConfig::default().with_seed(Some(5));
        assert_eq!(apply_overrides(config.clone(), &args()), config);
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let args = Args {
            seed: Some(9),
            sampling: Some(SamplingStrategy::Unbounded),
            max_iterations: Some(1_000),
            ..args()
        };

        let config = apply_overrides(PackConfig::default().with_seed(Some(5)), &args);

        assert_eq!(config.seed(), Some(9));
        assert_eq!(config.sampling(), SamplingStrategy::Unbounded);
        assert_eq!(config.max_iterations(), Some(1_000));
    }
}
