//! Candidate center samplers.
//!
//! Both samplers share one signature: given the random source, the region
//! and the current candidate radius they return a center, or `None` when no
//! center can be drawn for that radius. A `None` counts as a rejected trial.

use rand::Rng;

use circpack_core::geometry::{Point, Region};

use crate::config::SamplingStrategy;

impl SamplingStrategy {
    /// Draws a candidate center using this strategy.
    pub(crate) fn sample<R: Rng + ?Sized>(
        self,
        rng: &mut R,
        region: Region,
        radius: f32,
    ) -> Option<Point> {
        match self {
            Self::Bounded => sample_bounded(rng, region, radius),
            Self::Unbounded => sample_unbounded(rng, region, radius),
        }
    }
}

/// Draws a center from `[r, width - r) × [r, height - r)`.
///
/// Returns `None` without touching the random source when the region is not
/// wider and taller than the candidate diameter, since the range would be
/// empty.
pub(crate) fn sample_bounded<R: Rng + ?Sized>(
    rng: &mut R,
    region: Region,
    radius: f32,
) -> Option<Point> {
    if !region.fits_diameter(radius) {
        return None;
    }

    let x = rng.random_range(radius..region.width() - radius);
    let y = rng.random_range(radius..region.height() - radius);
    Some(Point::new(x, y))
}

/// Draws a center anywhere in `[0, width) × [0, height)`.
///
/// The caller is responsible for rejecting candidates that leave the region.
pub(crate) fn sample_unbounded<R: Rng + ?Sized>(
    rng: &mut R,
    region: Region,
    _radius: f32,
) -> Option<Point> {
    let x = rng.random_range(0.0..region.width());
    let y = rng.random_range(0.0..region.height());
    Some(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use circpack_core::circle::{Circle, exits_region};

    use super::*;

    #[test]
    fn test_bounded_samples_stay_inside() {
        let mut rng = StdRng::seed_from_u64(1);
        let region = Region::new(120.0, 80.0);

        for _ in 0..1_000 {
            let center = sample_bounded(&mut rng, region, 30.0).expect("range is not empty");
            assert!(!exits_region(Circle::new(center, 30.0), region));
        }
    }

    #[test]
    fn test_bounded_degenerate_range_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let region = Region::new(100.0, 60.0);

        assert_eq!(sample_bounded(&mut rng, region, 30.0), None);
        assert_eq!(sample_bounded(&mut rng, region, 45.0), None);
    }

    #[test]
    fn test_bounded_degenerate_range_does_not_consume_randomness() {
        let region = Region::new(100.0, 60.0);
        let mut used = StdRng::seed_from_u64(9);
        let mut fresh = StdRng::seed_from_u64(9);

        assert_eq!(sample_bounded(&mut used, region, 40.0), None);
        assert_eq!(
            sample_bounded(&mut used, region, 10.0),
            sample_bounded(&mut fresh, region, 10.0)
        );
    }

    #[test]
    fn test_unbounded_samples_cover_the_whole_region() {
        let mut rng = StdRng::seed_from_u64(2);
        let region = Region::new(50.0, 50.0);
        let mut saw_outside_candidate = false;

        for _ in 0..1_000 {
            let center = sample_unbounded(&mut rng, region, 10.0).expect("always samples");
            assert!(region.contains_point(center));
            saw_outside_candidate |= exits_region(Circle::new(center, 10.0), region);
        }

        assert!(saw_outside_candidate);
    }

    #[test]
    fn test_strategy_dispatch() {
        let region = Region::new(100.0, 100.0);
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);

        assert_eq!(
            SamplingStrategy::Bounded.sample(&mut a, region, 10.0),
            sample_bounded(&mut b, region, 10.0)
        );
        assert_eq!(
            SamplingStrategy::Unbounded.sample(&mut a, region, 10.0),
            sample_unbounded(&mut b, region, 10.0)
        );
    }
}
