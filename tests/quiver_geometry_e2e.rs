use gradfield::{sample_field, FieldSampler, Grid, Quiver, QuiverConfig, Vec3};
use ndarray::array;

#[test]
fn every_default_sample_becomes_one_arrow() {
    let cfg = QuiverConfig::default();
    let samples = FieldSampler::new(cfg.clone()).sample().unwrap();
    let quiver = Quiver::build(&samples, &cfg);

    // W = exp(xy) > 0, so no vector is zero.
    assert_eq!(quiver.skipped(), 0);
    assert_eq!(quiver.arrows().len(), 512);

    for (arrow, (pos, vec)) in quiver.arrows().iter().zip(samples.iter()) {
        assert_eq!(arrow.tail, pos);
        let shaft = arrow.tip - arrow.tail;
        assert!((shaft.magnitude() - 0.3).abs() < 1e-12);
        // Same direction as the field vector.
        assert!(shaft.angle_between(vec).unwrap() < 1e-6);
        // Every arrow points upward.
        assert!(shaft.z > 0.0);
    }
}

#[test]
fn head_length_follows_ratio() {
    let cfg = QuiverConfig {
        arrow_length: 1.0,
        arrow_head_ratio: 0.5,
        ..QuiverConfig::default()
    };
    let grid = Grid::meshgrid(array![0.0], array![0.0], array![0.0]);
    let samples = sample_field(&grid, &|_: Vec3| Vec3::new(0.0, 3.0, 4.0));
    let quiver = Quiver::build(&samples, &cfg);
    let arrow = quiver.arrows()[0];
    assert!((arrow.tip - Vec3::new(0.0, 0.6, 0.8)).magnitude() < 1e-12);
    for barb in arrow.barbs {
        assert!(((arrow.tip - barb).magnitude() - 0.5).abs() < 1e-12);
    }
}

#[test]
fn unnormalized_arrows_keep_relative_magnitude() {
    let cfg = QuiverConfig {
        normalize: false,
        ..QuiverConfig::default()
    };
    let samples = FieldSampler::new(cfg.clone()).sample().unwrap();
    let quiver = Quiver::build(&samples, &cfg);
    for (arrow, (_, vec)) in quiver.arrows().iter().zip(samples.iter()) {
        let shaft = arrow.tip - arrow.tail;
        assert!((shaft.magnitude() - 0.3 * vec.magnitude()).abs() < 1e-9 * vec.magnitude().max(1.0));
    }
}

#[test]
fn bounds_extend_past_the_grid_by_at_most_one_arrow() {
    let cfg = QuiverConfig::default();
    let samples = FieldSampler::new(cfg.clone()).sample().unwrap();
    let (lo, hi) = Quiver::build(&samples, &cfg).bounds().unwrap();
    for (l, h) in [(lo.x, hi.x), (lo.y, hi.y), (lo.z, hi.z)] {
        assert!(l >= -2.0 - 0.3 - 1e-12 && l <= -2.0);
        assert!(h >= 2.0 && h <= 2.0 + 0.3 + 1e-12);
    }
}
