//! Circpack - randomized non-overlapping circle packing.
//!
//! Circles are dropped at random into a rectangular region, largest first.
//! A candidate is kept only if it overlaps nothing already placed; once
//! enough consecutive candidates have been refused the radius shrinks and
//! the search continues with smaller circles, until the radius falls below a
//! configured minimum.
//!
//! The crate produces circles and nothing else. Drawing them is left to the
//! caller.

pub mod config;

mod engine;
mod error;
mod packing;

pub use circpack_core::{circle, geometry};

pub use engine::PackingEngine;
pub use error::{ConfigError, PackError};
pub use packing::{Packing, Termination, TierSummary};

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use config::PackConfig;

/// Builder-style entry point for packing runs.
///
/// # Examples
///
/// ```rust
/// use circpack::{Packer, config::PackConfig, geometry::Region};
///
/// let config = PackConfig::default()
///     .with_region(Region::new(200.0, 150.0))
///     .with_radii(50.0, 5.0)
///     .with_patience(200)
///     .with_seed(Some(42));
///
/// let packing = Packer::new(config)
///     .pack()
///     .expect("valid configuration");
///
/// assert!(!packing.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Packer {
    config: PackConfig,
}

impl Packer {
    /// Create a new packer with the given configuration.
    pub fn new(config: PackConfig) -> Self {
        Self { config }
    }

    /// Pack the configured region.
    ///
    /// Uses a [`StdRng`] seeded from [`PackConfig::seed`] when one is set,
    /// otherwise the thread-local generator, so unseeded runs differ from
    /// each other.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Config`] if the configuration is invalid.
    pub fn pack(&self) -> Result<Packing, PackError> {
        match self.config.seed() {
            Some(seed) => {
                debug!(seed; "Using seeded random source");
                self.pack_with_rng(&mut StdRng::seed_from_u64(seed))
            }
            None => self.pack_with_rng(&mut rand::rng()),
        }
    }

    /// Pack the configured region drawing from the supplied random source.
    ///
    /// The configured seed is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::Config`] if the configuration is invalid.
    pub fn pack_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Packing, PackError> {
        let engine = PackingEngine::new(self.config.clone())?;
        Ok(engine.run(rng))
    }
}
