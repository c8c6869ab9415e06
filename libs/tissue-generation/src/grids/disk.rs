//! # Disk Sampler
//!
//! Concentric rings approximating a uniformly hex-packed disk.

use super::circle::circle;
use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Point counts of the concentric rings of a disk with `num_t` points on
/// its periphery, from the outermost ring to the center.
///
/// There are `ceil(num_t / 2π) + 1` rings. Counts decrease linearly from
/// `num_t` to 0 and are truncated to integers, so the last ring is always
/// the (collapsed) center.
///
/// # Example
///
/// ```rust
/// use tissue_generation::grids::disk_ring_counts;
///
/// assert_eq!(disk_ring_counts(10), vec![10, 5, 0]);
/// assert_eq!(disk_ring_counts(0), vec![0]);
/// ```
pub fn disk_ring_counts(num_t: usize) -> Vec<usize> {
    let n_circles = (num_t as f64 / TAU).ceil() as usize + 1;
    if n_circles == 1 {
        return vec![num_t];
    }

    let start = num_t as f64;
    let step = -start / (n_circles - 1) as f64;
    let mut counts: Vec<usize> = (0..n_circles)
        .map(|k| (k as f64 * step + start) as usize)
        .collect();
    counts[n_circles - 1] = 0;
    counts
}

/// Returns points evenly spread on a disk with `num_t` points on its
/// periphery; the rest of the disk is filled automatically.
///
/// Each ring's radius is proportional to its point count and its phase is
/// `π · count / num_t`, so adjacent rings are staggered. The outermost ring
/// comes first and holds exactly `num_t` points at distance `radius`.
///
/// # Example
///
/// ```rust
/// use tissue_generation::grids::hexa_disk;
///
/// let points = hexa_disk(10, 1.0);
/// assert_eq!(points.len(), 10 + 5 + 1);
/// ```
pub fn hexa_disk(num_t: usize, radius: f64) -> Vec<DVec2> {
    let counts = disk_ring_counts(num_t);
    let mut points = Vec::with_capacity(counts.iter().map(|&n| n.max(1)).sum());

    for &count in &counts {
        let ring_radius = radius * count as f64 / num_t as f64;
        let phase = PI * count as f64 / num_t as f64;
        points.extend(circle(count, ring_radius, phase));
    }

    tracing::debug!(num_t, rings = counts.len(), points = points.len(), "generated hexagonal disk");
    points
}
