use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;
use tissue_generation::grids::{
    circle, hexa_cylinder, hexa_cylinder_oriented, hexa_disk, hexa_grid2d, hexa_grid3d,
    CylinderOptions, Orientation,
};
use tissue_generation::{GenerationError, PositionNoise};

const TOL: f64 = 1e-9;

#[test]
fn circle_zero_is_single_origin() {
    assert_eq!(circle(0, 5.0, 0.7), vec![DVec2::ZERO]);
}

#[test]
fn disk_outer_ring_on_periphery() {
    for num_t in 1..40 {
        let radius = 2.0;
        let disk = hexa_disk(num_t, radius);
        for p in &disk[..num_t] {
            assert_relative_eq!(p.length(), radius, epsilon = TOL);
        }
        // everything else is strictly inside
        for p in &disk[num_t..] {
            assert!(p.length() < radius - TOL);
        }
    }
}

#[test]
fn cylinder_capped_size() {
    for (num_t, num_z) in [(6, 2), (12, 5), (30, 10)] {
        let radius = 1.5;
        let n_cap = hexa_disk(num_t, radius).len() - num_t;
        let capped = hexa_cylinder(
            num_t,
            num_z,
            &CylinderOptions {
                radius,
                capped: true,
                orientation: Orientation::Transverse,
            },
            None,
        );
        let body = (num_t + 2) * (num_z + 2);
        assert_eq!(capped.len(), body + 2 * n_cap);
    }
}

#[test]
fn cylinder_longitudinal_swaps_axes() {
    let (num_t, num_z) = (8, 3);
    let options = CylinderOptions {
        orientation: Orientation::Longitudinal,
        ..Default::default()
    };
    let body = hexa_cylinder(num_t, num_z, &options, None);
    // the longitudinal lattice is built over (angle, height), so heights
    // take num_z + 2 distinct values
    let mut heights: Vec<f64> = body.iter().map(|p| p.z).collect();
    heights.sort_by(f64::total_cmp);
    heights.dedup_by(|a, b| (*a - *b).abs() < TOL);
    assert_eq!(heights.len(), num_z + 2);
}

#[test]
fn cylinder_rejects_unknown_orientation() {
    let err = hexa_cylinder_oriented(6, 3, 1.0, true, "invalid", None).unwrap_err();
    assert_eq!(err, GenerationError::InvalidOrientation("invalid".to_string()));
}

#[test]
fn seeded_noise_is_reproducible() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut noise = PositionNoise::new(0.1, &mut rng).unwrap();
        hexa_grid3d(3, 3, 3, 1.0, 1.0, 1.0, Some(&mut noise))
    };
    assert_eq!(run(9), run(9));
    assert_ne!(run(9), run(10));
}

#[test]
fn noise_stays_close_to_lattice() {
    let exact = hexa_grid2d(10, 10, 1.0, 1.0, None);
    let mut rng = StdRng::seed_from_u64(123);
    let mut noise = PositionNoise::new(1e-3, &mut rng).unwrap();
    let noisy = hexa_grid2d(10, 10, 1.0, 1.0, Some(&mut noise));
    for (a, b) in exact.iter().zip(&noisy) {
        // 10 sigma
        assert!(a.distance(*b) < 1e-2);
    }
}

proptest! {
    #[test]
    fn grid2d_has_padded_count(nx in 1usize..20, ny in 1usize..20, dx in 0.1f64..5.0, dy in 0.1f64..5.0) {
        let points = hexa_grid2d(nx, ny, dx, dy, None);
        prop_assert_eq!(points.len(), (nx + 2) * (ny + 2));
        let cols = nx + 2;
        for (k, p) in points.iter().enumerate() {
            let row = k / cols;
            let frac = (p.x / dx).fract();
            if row % 2 == 0 {
                prop_assert!((frac - 0.5).abs() < 1e-9);
            } else {
                prop_assert!(frac.abs() < 1e-9 || (1.0 - frac).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn grid3d_has_product_count(nx in 1usize..8, ny in 1usize..8, nz in 1usize..8) {
        prop_assert_eq!(hexa_grid3d(nx, ny, nz, 1.0, 1.0, 1.0, None).len(), nx * ny * nz);
    }

    #[test]
    fn circle_points_equidistant(n in 1usize..100, radius in 0.1f64..10.0, phase in -10.0f64..10.0) {
        let points = circle(n, radius, phase);
        prop_assert_eq!(points.len(), n);
        for p in &points {
            prop_assert!((p.length() - radius).abs() < 1e-9 * radius.max(1.0));
        }
        let step = TAU / n as f64;
        for (k, p) in points.iter().enumerate() {
            let expected = DVec2::from_angle(phase + k as f64 * step) * radius;
            prop_assert!(p.distance(expected) < 1e-9 * radius.max(1.0));
        }
    }

    #[test]
    fn cylinder_body_on_shell(num_t in 3usize..30, num_z in 1usize..10, radius in 0.5f64..3.0) {
        let body = hexa_cylinder(num_t, num_z, &CylinderOptions { radius, ..Default::default() }, None);
        // the first transverse point sits at angle zero
        let axis = DVec2::new(body[0].x - radius, body[0].y);
        for p in &body {
            let r = (DVec2::new(p.x, p.y) - axis).length();
            prop_assert!((r - radius).abs() < 1e-9);
        }
        let mean = body.iter().copied().sum::<DVec3>() / body.len() as f64;
        prop_assert!(mean.length() < 1e-9);
    }
}
