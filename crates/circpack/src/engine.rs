//! Randomized packing engine.
//!
//! The engine repeatedly draws a candidate circle at the current radius and
//! keeps it if it does not overlap anything accepted so far. After
//! `patience` consecutive rejections the radius shrinks by `shrink_step`,
//! and the run ends once the radius falls below `min_radius`.
//!
//! ```text
//!   ┌──────────── sample center (strategy) ◄────────────┐
//!   │                                                   │
//!   ▼                                                   │
//!  candidate ── overlaps / exits? ── no ──► accept, reset counter
//!   │
//!  yes
//!   ▼
//!  counter += 1 ── counter % patience == 0 ──► radius -= step, reset counter
//! ```

mod sampling;

use std::time::Instant;

use log::{debug, info, trace, warn};
use rand::Rng;

use circpack_core::circle::{Circle, exits_region, overlaps};

use crate::{
    config::PackConfig,
    error::ConfigError,
    packing::{Packing, Termination, TierSummary},
};

/// Mutable state of the trial loop.
///
/// `radius` never increases. `rejections` counts consecutive rejections and
/// is cleared by an acceptance or a shrink event.
#[derive(Debug)]
struct TrialState {
    radius: f32,
    rejections: u64,
    tier_accepted: usize,
    tier_trials: u64,
}

impl TrialState {
    fn new(radius: f32) -> Self {
        Self {
            radius,
            rejections: 0,
            tier_accepted: 0,
            tier_trials: 0,
        }
    }

    fn record_acceptance(&mut self) {
        self.rejections = 0;
        self.tier_accepted += 1;
    }

    /// Counts a rejection and reports whether the tier's patience ran out.
    ///
    /// A counter of zero never triggers a shrink.
    fn record_rejection(&mut self, patience: u64) -> bool {
        self.rejections += 1;
        self.rejections > 0 && self.rejections % patience == 0
    }

    /// Closes the current tier and moves to the next, smaller radius.
    fn shrink(&mut self, step: f32) -> TierSummary {
        let summary = self.summary();
        self.radius -= step;
        self.rejections = 0;
        self.tier_accepted = 0;
        self.tier_trials = 0;
        summary
    }

    fn summary(&self) -> TierSummary {
        TierSummary::new(self.radius, self.tier_accepted, self.tier_trials)
    }
}

/// Packing engine bound to a validated [`PackConfig`].
///
/// The engine holds no state between runs; each call to
/// [`PackingEngine::run`] starts from an empty accepted set.
#[derive(Debug, Clone)]
pub struct PackingEngine {
    config: PackConfig,
}

impl PackingEngine {
    /// Create an engine for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`PackConfig::validate`].
    pub fn new(config: PackConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the packing loop, drawing every candidate from `rng`.
    ///
    /// The same configuration and an identically seeded `rng` produce an
    /// identical [`Packing`].
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Packing {
        let config = &self.config;
        let region = config.region();
        let min_radius = config.min_radius();
        let deadline = config.time_limit().map(|limit| Instant::now() + limit);

        info!(
            max_radius = config.max_radius(),
            min_radius,
            width = region.width(),
            height = region.height(),
            patience = config.patience(),
            sampling:% = config.sampling();
            "Starting packing run"
        );

        let mut state = TrialState::new(config.max_radius());
        let mut accepted: Vec<Circle> = Vec::new();
        let mut tiers = Vec::new();
        let mut trials: u64 = 0;

        let termination = loop {
            if state.radius < min_radius || state.radius <= 0.0 {
                break Termination::MinRadiusReached;
            }

            if config.max_iterations().is_some_and(|cap| trials >= cap) {
                warn!(trials; "Iteration cap reached, stopping early");
                break Termination::IterationCapReached;
            }

            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                warn!(trials; "Time limit reached, stopping early");
                break Termination::DeadlineReached;
            }

            trials += 1;
            state.tier_trials += 1;

            match self.try_place(rng, &accepted, state.radius) {
                Some(circle) => {
                    trace!(
                        x = circle.center().x(),
                        y = circle.center().y(),
                        radius = circle.radius();
                        "Accepted circle"
                    );
                    accepted.push(circle);
                    state.record_acceptance();
                }
                None => {
                    if state.record_rejection(config.patience()) {
                        let tier = state.shrink(config.shrink_step());
                        debug!(
                            radius = tier.radius(),
                            accepted = tier.accepted(),
                            trials = tier.trials(),
                            next_radius = state.radius;
                            "Patience exhausted, shrinking radius"
                        );
                        tiers.push(tier);
                    }
                }
            }
        };

        let shrink_events = tiers.len();
        if termination != Termination::MinRadiusReached && state.tier_trials > 0 {
            tiers.push(state.summary());
        }

        info!(
            circles = accepted.len(),
            trials,
            shrink_events,
            termination:?;
            "Packing run finished"
        );

        Packing::new(region, accepted, tiers, trials, shrink_events, termination)
    }

    /// One trial: sample a candidate and validate it.
    ///
    /// Returns the candidate if it may be accepted.
    fn try_place<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        accepted: &[Circle],
        radius: f32,
    ) -> Option<Circle> {
        let sampling = self.config.sampling();
        let center = sampling.sample(rng, self.config.region(), radius)?;
        let candidate = Circle::new(center, radius);

        if sampling.requires_bounds_check() && exits_region(candidate, self.config.region()) {
            return None;
        }

        if accepted.iter().any(|&other| overlaps(candidate, other)) {
            return None;
        }

        Some(candidate)
    }
}
