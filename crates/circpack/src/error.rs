//! Error types for circpack operations.
//!
//! [`ConfigError`] enumerates every way a [`PackConfig`](crate::config::PackConfig)
//! can be rejected before the packing loop starts. [`PackError`] is the
//! umbrella type returned by the [`Packer`](crate::Packer) API.

use thiserror::Error;

/// Reasons a packing configuration is refused.
///
/// Validation runs before any random number is drawn, so a run either starts
/// with a usable configuration or does not start at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_radius must be a positive finite number, got {0}")]
    InvalidMaxRadius(f32),

    #[error("min_radius must be a non-negative finite number, got {0}")]
    InvalidMinRadius(f32),

    #[error("min_radius ({min_radius}) must not exceed max_radius ({max_radius})")]
    RadiusOrder { min_radius: f32, max_radius: f32 },

    #[error("patience must be at least 1")]
    ZeroPatience,

    #[error("region dimensions must be positive finite numbers, got {width}x{height}")]
    InvalidRegion { width: f32, height: f32 },

    #[error("shrink_step must be a positive finite number, got {0}")]
    InvalidShrinkStep(f32),

    #[error("max_iterations must be at least 1 when set")]
    ZeroIterationCap,

    #[error(
        "region {width}x{height} cannot fit a circle of min_radius {min_radius} with bounded sampling"
    )]
    RegionTooSmall {
        width: f32,
        height: f32,
        min_radius: f32,
    },
}

/// The main error type for circpack operations.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
