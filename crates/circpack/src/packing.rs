//! The result of a packing run.

use serde::Serialize;

use circpack_core::{circle::Circle, geometry::Region};

/// Why a packing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The candidate radius shrank below the configured minimum.
    MinRadiusReached,
    /// The configured trial cap was hit first.
    IterationCapReached,
    /// The configured wall-clock budget ran out first.
    DeadlineReached,
}

/// Statistics for one radius tier.
///
/// A tier covers every trial made while the candidate radius held one value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierSummary {
    radius: f32,
    accepted: usize,
    trials: u64,
}

impl TierSummary {
    pub(crate) fn new(radius: f32, accepted: usize, trials: u64) -> Self {
        Self {
            radius,
            accepted,
            trials,
        }
    }

    /// Candidate radius used throughout the tier
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of circles accepted during the tier
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Number of trials made during the tier
    pub fn trials(&self) -> u64 {
        self.trials
    }
}

/// Accepted circles in acceptance order, plus how the run went.
///
/// Every circle in a `Packing` lies inside [`Packing::region`] and no two
/// circles overlap. Radii are non-increasing along the sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Packing {
    region: Region,
    circles: Vec<Circle>,
    tiers: Vec<TierSummary>,
    trials: u64,
    shrink_events: usize,
    termination: Termination,
}

impl Packing {
    pub(crate) fn new(
        region: Region,
        circles: Vec<Circle>,
        tiers: Vec<TierSummary>,
        trials: u64,
        shrink_events: usize,
        termination: Termination,
    ) -> Self {
        Self {
            region,
            circles,
            tiers,
            trials,
            shrink_events,
            termination,
        }
    }

    /// The region that was packed
    pub fn region(&self) -> Region {
        self.region
    }

    /// Accepted circles in acceptance order
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Consumes the packing and returns the accepted circles
    pub fn into_circles(self) -> Vec<Circle> {
        self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Per-tier statistics, largest radius first
    pub fn tiers(&self) -> &[TierSummary] {
        &self.tiers
    }

    /// Total number of trials made
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Number of times the candidate radius was reduced
    pub fn shrink_events(&self) -> usize {
        self.shrink_events
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Fraction of the region area covered by circles, in `[0, 1]`.
    pub fn coverage(&self) -> f32 {
        let area = self.region.area();
        if area <= 0.0 {
            return 0.0;
        }

        let covered: f32 = self.circles.iter().map(|circle| circle.area()).sum();
        (covered / area).min(1.0)
    }
}
