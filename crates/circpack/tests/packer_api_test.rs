//! Integration tests for the Packer API
//!
//! These tests check the geometric guarantees of a packing through the
//! public API only.

use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use circpack::{
    ConfigError, PackError, Packer, Packing, Termination,
    circle::{exits_region, overlaps},
    config::{PackConfig, SamplingStrategy},
    geometry::Region,
};

fn scenario_config() -> PackConfig {
    PackConfig::default()
        .with_region(Region::new(200.0, 150.0))
        .with_radii(50.0, 5.0)
        .with_patience(1000)
}

fn check_no_overlap(packing: &Packing) -> Result<(), TestCaseError> {
    let circles = packing.circles();
    for (i, &a) in circles.iter().enumerate() {
        for &b in &circles[i + 1..] {
            let distance = a.center().distance(b.center());
            prop_assert!(
                distance >= a.radius() + b.radius(),
                "{:?} and {:?} overlap",
                a,
                b
            );
            prop_assert!(!overlaps(a, b));
        }
    }
    Ok(())
}

fn check_in_bounds(packing: &Packing) -> Result<(), TestCaseError> {
    let region = packing.region();
    for &circle in packing.circles() {
        let (x, y, r) = (circle.center().x(), circle.center().y(), circle.radius());
        prop_assert!(x - r >= 0.0);
        prop_assert!(x + r <= region.width());
        prop_assert!(y - r >= 0.0);
        prop_assert!(y + r <= region.height());
        prop_assert!(!exits_region(circle, region));
    }
    Ok(())
}

fn check_radii_non_increasing(packing: &Packing) -> Result<(), TestCaseError> {
    for pair in packing.circles().windows(2) {
        prop_assert!(pair[1].radius() <= pair[0].radius());
    }
    Ok(())
}

#[test]
fn test_scenario_packing_is_valid() {
    for sampling in [SamplingStrategy::Bounded, SamplingStrategy::Unbounded] {
        let packer = Packer::new(scenario_config().with_sampling(sampling));
        let packing = packer
            .pack_with_rng(&mut StdRng::seed_from_u64(2024))
            .expect("valid configuration");

        assert!(!packing.is_empty(), "{sampling} packing is empty");
        assert_eq!(packing.termination(), Termination::MinRadiusReached);
        check_no_overlap(&packing).unwrap();
        check_in_bounds(&packing).unwrap();
        check_radii_non_increasing(&packing).unwrap();
        assert!(packing.coverage() > 0.0 && packing.coverage() <= 1.0);
    }
}

#[test]
fn test_scenario_is_reproducible_with_seed() {
    let packer = Packer::new(scenario_config().with_seed(Some(7)));

    let first = packer.pack().expect("valid configuration");
    let second = packer.pack().expect("valid configuration");

    let bits = |packing: &Packing| -> Vec<(u32, u32, u32)> {
        packing
            .circles()
            .iter()
            .map(|c| {
                (
                    c.center().x().to_bits(),
                    c.center().y().to_bits(),
                    c.radius().to_bits(),
                )
            })
            .collect()
    };

    assert_eq!(bits(&first), bits(&second));
    assert_eq!(first, second);
}

#[test]
fn test_explicit_rng_matches_configured_seed() {
    let seeded = Packer::new(scenario_config().with_seed(Some(11)))
        .pack()
        .expect("valid configuration");
    let injected = Packer::new(scenario_config())
        .pack_with_rng(&mut StdRng::seed_from_u64(11))
        .expect("valid configuration");

    assert_eq!(seeded, injected);
}

#[test]
fn test_unseeded_packing_is_still_valid() {
    let packing = Packer::new(scenario_config().with_patience(100))
        .pack()
        .expect("valid configuration");

    check_no_overlap(&packing).unwrap();
    check_in_bounds(&packing).unwrap();
}

#[test]
fn test_invalid_config_fails_before_running() {
    let result = Packer::new(scenario_config().with_radii(5.0, 50.0)).pack();

    match result {
        Err(PackError::Config(ConfigError::RadiusOrder { .. })) => {}
        other => panic!("Expected RadiusOrder error, got {other:?}"),
    }
}

#[test]
fn test_iteration_cap_bounds_termination() {
    let packing = Packer::new(
        scenario_config()
            .with_patience(u64::MAX)
            .with_max_iterations(Some(10_000)),
    )
    .pack_with_rng(&mut StdRng::seed_from_u64(1))
    .expect("valid configuration");

    assert_eq!(packing.termination(), Termination::IterationCapReached);
    assert_eq!(packing.trials(), 10_000);
}

// ===================
// Property tests
// ===================

fn config_strategy() -> impl Strategy<Value = PackConfig> {
    let inputs = (
        40.0f32..150.0,
        40.0f32..150.0,
        8.0f32..30.0,
        2.0f32..5.0,
        1u64..60,
        prop_oneof![
            Just(SamplingStrategy::Bounded),
            Just(SamplingStrategy::Unbounded)
        ],
    );

    inputs.prop_map(|(width, height, max_radius, min_radius, patience, sampling)| {
        PackConfig::default()
            .with_region(Region::new(width, height))
            .with_radii(max_radius, min_radius)
            .with_shrink_step(3.0)
            .with_patience(patience)
            .with_sampling(sampling)
            .with_max_iterations(Some(20_000))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn packing_invariants_hold(config in config_strategy(), seed in any::<u64>()) {
        let packing = Packer::new(config)
            .pack_with_rng(&mut StdRng::seed_from_u64(seed))
            .expect("strategy only builds valid configurations");

        check_no_overlap(&packing)?;
        check_in_bounds(&packing)?;
        check_radii_non_increasing(&packing)?;
        prop_assert!(packing.trials() <= 20_000);
    }
}
