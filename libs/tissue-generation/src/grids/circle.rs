//! # Circle Sampler
//!
//! Points regularly spaced on a circle.

use glam::DVec2;
use std::f64::consts::TAU;

/// Returns `num_t` points regularly placed around a circle of radius
/// `radius`, shifted by `phase` radians from the x axis.
///
/// A circle with no points collapses to its center: `num_t == 0` returns the
/// single point at the origin. Disk rings rely on this for their innermost
/// ring.
///
/// # Example
///
/// ```rust
/// use tissue_generation::grids::circle;
///
/// let points = circle(4, 2.0, 0.0);
/// assert_eq!(points.len(), 4);
/// assert!((points[1].y - 2.0).abs() < 1e-12);
///
/// assert_eq!(circle(0, 2.0, 0.0), vec![glam::DVec2::ZERO]);
/// ```
pub fn circle(num_t: usize, radius: f64, phase: f64) -> Vec<DVec2> {
    if num_t == 0 {
        return vec![DVec2::ZERO];
    }

    let step = TAU / num_t as f64;
    (0..num_t)
        .map(|k| {
            let theta = k as f64 * step + phase;
            DVec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}
