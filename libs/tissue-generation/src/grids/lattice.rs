//! # Hexagonal Lattices
//!
//! Row-staggered point grids. Every other row is shifted by half a column,
//! which turns a square grid into the centers of a hexagonal tiling.

use crate::noise::PositionNoise;
use config::constants::{HEX_GRID_PADDING, HEX_LAYER_SCALE, HEX_ROW_OFFSET};
use glam::{DVec2, DVec3};

/// Half-step stagger for a row (or layer) index: even indices are shifted.
#[inline]
fn stagger(index: usize) -> f64 {
    if index % 2 == 0 {
        HEX_ROW_OFFSET
    } else {
        0.0
    }
}

/// Creates a planar hexagonal grid of points.
///
/// The grid has `ny + 2` rows and `nx + 2` columns and is laid out row by
/// row. Even rows are shifted by half a column; columns are then scaled by
/// `dist_x` and rows by `dist_y`.
///
/// # Arguments
///
/// * `nx` - Number of inner columns
/// * `ny` - Number of inner rows
/// * `dist_x` - Spacing between columns
/// * `dist_y` - Spacing between rows
/// * `noise` - Optional Gaussian perturbation added to every coordinate
///
/// # Example
///
/// ```rust
/// use tissue_generation::grids::hexa_grid2d;
///
/// let points = hexa_grid2d(2, 1, 1.0, 1.0, None);
/// assert_eq!(points.len(), 4 * 3);
/// assert_eq!(points[0].x, 0.5); // row 0 is staggered
/// assert_eq!(points[4].x, 0.0); // row 1 is not
/// ```
pub fn hexa_grid2d(
    nx: usize,
    ny: usize,
    dist_x: f64,
    dist_y: f64,
    noise: Option<&mut PositionNoise<'_>>,
) -> Vec<DVec2> {
    let cols = nx + HEX_GRID_PADDING;
    let rows = ny + HEX_GRID_PADDING;
    let mut centers = Vec::with_capacity(cols * rows);

    for row in 0..rows {
        let offset = stagger(row);
        for col in 0..cols {
            let center = DVec2::new((col as f64 + offset) * dist_x, row as f64 * dist_y);
            centers.push(center);
        }
    }

    if let Some(noise) = noise {
        for center in &mut centers {
            *center = noise.perturb2(*center);
        }
    }

    tracing::debug!(nx, ny, points = centers.len(), "generated 2d hexagonal grid");
    centers
}

/// Creates a volumetric hexagonal grid of points.
///
/// Points are laid out layer by layer (z outermost, x innermost). Columns on
/// even rows are shifted by half a step, rows on even layers are shifted by
/// half a step, and both rows and layers are packed at `sqrt(3)/2` before the
/// per-axis spacing is applied.
///
/// # Example
///
/// ```rust
/// use tissue_generation::grids::hexa_grid3d;
///
/// let points = hexa_grid3d(3, 2, 2, 1.0, 1.0, 1.0, None);
/// assert_eq!(points.len(), 12);
/// ```
pub fn hexa_grid3d(
    nx: usize,
    ny: usize,
    nz: usize,
    dist_x: f64,
    dist_y: f64,
    dist_z: f64,
    noise: Option<&mut PositionNoise<'_>>,
) -> Vec<DVec3> {
    let spacing = DVec3::new(dist_x, dist_y, dist_z);
    let mut centers = Vec::with_capacity(nx * ny * nz);

    for layer in 0..nz {
        let z = layer as f64 * HEX_LAYER_SCALE;
        for row in 0..ny {
            let y = (row as f64 + stagger(layer)) * HEX_LAYER_SCALE;
            for col in 0..nx {
                let x = col as f64 + stagger(row);
                centers.push(DVec3::new(x, y, z) * spacing);
            }
        }
    }

    if let Some(noise) = noise {
        for center in &mut centers {
            *center = noise.perturb3(*center);
        }
    }

    tracing::debug!(nx, ny, nz, points = centers.len(), "generated 3d hexagonal grid");
    centers
}
