//! Configuration types for a packing run.
//!
//! [`PackConfig`] holds every caller-supplied input of the packing engine and
//! implements [`serde::Deserialize`] so it can be loaded from external
//! sources. Missing fields fall back to the defaults documented on
//! [`PackConfig::default`].
//!
//! # Example
//!
//! ```
//! # use circpack::config::{PackConfig, SamplingStrategy};
//! # use circpack::geometry::Region;
//! let config = PackConfig::default()
//!     .with_region(Region::new(200.0, 150.0))
//!     .with_radii(50.0, 5.0)
//!     .with_patience(1000)
//!     .with_sampling(SamplingStrategy::Unbounded);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
    time::Duration,
};

use serde::{Deserialize, Serialize};

use circpack_core::geometry::Region;

use crate::error::ConfigError;

/// How candidate centers are drawn from the region.
///
/// The names match external configuration strings (snake_case).
///
/// # Variants
///
/// - `Bounded` - Centers are drawn from `[r, width - r) × [r, height - r)`,
///   so every candidate lies inside the region by construction (default)
/// - `Unbounded` - Centers are drawn from `[0, width) × [0, height)` and
///   candidates whose disk leaves the region are rejected afterwards
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingStrategy {
    #[default]
    Bounded,
    Unbounded,
}

impl SamplingStrategy {
    /// Returns true if candidates drawn with this strategy need an explicit
    /// region containment check.
    pub fn requires_bounds_check(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl FromStr for SamplingStrategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bounded" => Ok(Self::Bounded),
            "unbounded" => Ok(Self::Unbounded),
            _ => Err("Unsupported sampling strategy"),
        }
    }
}

impl From<SamplingStrategy> for &'static str {
    fn from(val: SamplingStrategy) -> Self {
        match val {
            SamplingStrategy::Bounded => "bounded",
            SamplingStrategy::Unbounded => "unbounded",
        }
    }
}

impl Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Inputs of a single packing run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// Radius of the first tier of candidates.
    max_radius: f32,

    /// The run ends once the candidate radius drops below this value.
    min_radius: f32,

    /// Rectangle being packed.
    region: Region,

    /// Consecutive rejections tolerated before the radius shrinks.
    patience: u64,

    /// Amount subtracted from the candidate radius on each shrink event.
    shrink_step: f32,

    /// Candidate center sampling strategy.
    sampling: SamplingStrategy,

    /// Hard cap on the number of trials.
    max_iterations: Option<u64>,

    /// Wall-clock budget in milliseconds.
    time_limit_ms: Option<u64>,

    /// Seed for a reproducible random source. `None` draws from the
    /// thread-local generator.
    seed: Option<u64>,
}

impl Default for PackConfig {
    /// A 600×400 region filled from radius 125 down to radius 5 in steps
    /// of 5, with a patience of 5000 rejections per tier.
    fn default() -> Self {
        Self {
            max_radius: 125.0,
            min_radius: 5.0,
            region: Region::new(600.0, 400.0),
            patience: 5_000,
            shrink_step: 5.0,
            sampling: SamplingStrategy::default(),
            max_iterations: None,
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl PackConfig {
    /// Sets the starting and terminating radii
    pub fn with_radii(mut self, max_radius: f32, min_radius: f32) -> Self {
        self.max_radius = max_radius;
        self.min_radius = min_radius;
        self
    }

    /// Sets the region to pack
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Sets the rejection budget per tier
    pub fn with_patience(mut self, patience: u64) -> Self {
        self.patience = patience;
        self
    }

    /// Sets the radius decrement applied on each shrink event
    pub fn with_shrink_step(mut self, shrink_step: f32) -> Self {
        self.shrink_step = shrink_step;
        self
    }

    /// Sets the candidate sampling strategy
    pub fn with_sampling(mut self, sampling: SamplingStrategy) -> Self {
        self.sampling = sampling;
        self
    }

    /// Caps the total number of trials
    pub fn with_max_iterations(mut self, max_iterations: Option<u64>) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets a wall-clock budget for the run
    ///
    /// The budget is kept in whole milliseconds. A non-zero limit shorter
    /// than one millisecond rounds up to one; oversized limits saturate.
    pub fn with_time_limit(mut self, time_limit: Option<Duration>) -> Self {
        self.time_limit_ms = time_limit.map(|limit| {
            let millis = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
            if millis == 0 && !limit.is_zero() {
                1
            } else {
                millis
            }
        });
        self
    }

    /// Sets the seed of the random source
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn min_radius(&self) -> f32 {
        self.min_radius
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn patience(&self) -> u64 {
        self.patience
    }

    pub fn shrink_step(&self) -> f32 {
        self.shrink_step
    }

    pub fn sampling(&self) -> SamplingStrategy {
        self.sampling
    }

    pub fn max_iterations(&self) -> Option<u64> {
        self.max_iterations
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Checks the configuration without running anything.
    ///
    /// `min_radius == max_radius` is accepted and yields a single-tier run.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checked in field order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_radius.is_finite() || self.max_radius <= 0.0 {
            return Err(ConfigError::InvalidMaxRadius(self.max_radius));
        }

        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return Err(ConfigError::InvalidMinRadius(self.min_radius));
        }

        if self.min_radius > self.max_radius {
            return Err(ConfigError::RadiusOrder {
                min_radius: self.min_radius,
                max_radius: self.max_radius,
            });
        }

        if !self.region.is_valid() {
            return Err(ConfigError::InvalidRegion {
                width: self.region.width(),
                height: self.region.height(),
            });
        }

        if self.patience == 0 {
            return Err(ConfigError::ZeroPatience);
        }

        if !self.shrink_step.is_finite() || self.shrink_step <= 0.0 {
            return Err(ConfigError::InvalidShrinkStep(self.shrink_step));
        }

        if self.max_iterations == Some(0) {
            return Err(ConfigError::ZeroIterationCap);
        }

        if self.sampling == SamplingStrategy::Bounded && !self.region.fits_diameter(self.min_radius)
        {
            return Err(ConfigError::RegionTooSmall {
                width: self.region.width(),
                height: self.region.height(),
                min_radius: self.min_radius,
            });
        }

        Ok(())
    }
}
