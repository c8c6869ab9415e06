//! # Cylinder Sampler
//!
//! Maps a planar hexagonal lattice onto a cylindrical shell, optionally
//! closing both ends with disk caps.

use super::disk::hexa_disk;
use super::lattice::hexa_grid2d;
use crate::error::{GenerationError, GenerationResult};
use crate::noise::PositionNoise;
use config::constants::DEFAULT_RADIUS;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

/// Orientation of the lattice rows with respect to the cylinder axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Long axis of the cells perpendicular to the cylinder axis.
    #[default]
    Transverse,
    /// Long axis of the cells along the cylinder axis.
    Longitudinal,
}

impl Orientation {
    /// Name used when parsing and displaying the orientation.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Transverse => "transverse",
            Orientation::Longitudinal => "longitudinal",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transverse" => Ok(Orientation::Transverse),
            "longitudinal" => Ok(Orientation::Longitudinal),
            other => Err(GenerationError::InvalidOrientation(other.to_string())),
        }
    }
}

/// Shape options of [`hexa_cylinder`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderOptions {
    /// Radius of the shell.
    pub radius: f64,
    /// Close both ends with a disk of points.
    pub capped: bool,
    /// Orientation of the lattice rows.
    pub orientation: Orientation,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            capped: false,
            orientation: Orientation::Transverse,
        }
    }
}

/// Returns points evenly spread on a cylinder with `num_t` points on the
/// periphery and `num_z` points along its length.
///
/// The body comes from [`hexa_grid2d`] with an angular spacing of
/// `2π / num_t` on both axes, so it holds `(num_t + 2) · (num_z + 2)`
/// points. The height axis is scaled by the radius, the angle axis is used
/// as is, and all three Cartesian axes are recentred on their means.
///
/// With `options.capped`, the inner rings of `hexa_disk(num_t, radius)` are
/// placed at the lowest and highest body z, before and after the body.
/// Caps are neither noised nor recentred.
///
/// `num_t` must be at least 1: the angular step divides by it.
///
/// # Example
///
/// ```rust
/// use tissue_generation::grids::{hexa_cylinder, CylinderOptions};
///
/// let points = hexa_cylinder(12, 4, &CylinderOptions::default(), None);
/// assert_eq!(points.len(), 14 * 6);
/// ```
pub fn hexa_cylinder(
    num_t: usize,
    num_z: usize,
    options: &CylinderOptions,
    noise: Option<&mut PositionNoise<'_>>,
) -> Vec<DVec3> {
    let radius = options.radius;
    let delta_t = TAU / num_t as f64;

    // (height, angle) pairs
    let points_zt: Vec<DVec2> = match options.orientation {
        Orientation::Transverse => hexa_grid2d(num_z, num_t, delta_t, delta_t, noise),
        Orientation::Longitudinal => hexa_grid2d(num_t, num_z, delta_t, delta_t, noise)
            .into_iter()
            .map(|p| DVec2::new(p.y, p.x))
            .collect(),
    };

    let mut body: Vec<DVec3> = points_zt
        .iter()
        .map(|p| {
            let (sin, cos) = p.y.sin_cos();
            DVec3::new(radius * cos, radius * sin, p.x * radius)
        })
        .collect();

    let mean = body.iter().copied().sum::<DVec3>() / body.len() as f64;
    for point in &mut body {
        *point -= mean;
    }

    if !options.capped {
        tracing::debug!(num_t, num_z, points = body.len(), "generated hexagonal cylinder");
        return body;
    }

    let (z_min, z_max) = body
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.z), hi.max(p.z))
        });

    // the outer ring of the disk duplicates the rim of the body
    let cap = hexa_disk(num_t, radius).split_off(num_t);

    let mut points = Vec::with_capacity(body.len() + 2 * cap.len());
    points.extend(cap.iter().map(|p| p.extend(z_min)));
    points.append(&mut body);
    points.extend(cap.iter().map(|p| p.extend(z_max)));

    tracing::debug!(
        num_t,
        num_z,
        cap_points = cap.len(),
        points = points.len(),
        "generated capped hexagonal cylinder"
    );
    points
}

/// String-oriented entry point of [`hexa_cylinder`].
///
/// Parses `orientation` (`"transverse"` or `"longitudinal"`) and fails with
/// [`GenerationError::InvalidOrientation`] naming the value otherwise.
///
/// # Example
///
/// ```rust
/// use tissue_generation::grids::hexa_cylinder_oriented;
///
/// assert!(hexa_cylinder_oriented(6, 3, 1.0, false, "longitudinal", None).is_ok());
/// assert!(hexa_cylinder_oriented(6, 3, 1.0, false, "diagonal", None).is_err());
/// ```
pub fn hexa_cylinder_oriented(
    num_t: usize,
    num_z: usize,
    radius: f64,
    capped: bool,
    orientation: &str,
    noise: Option<&mut PositionNoise<'_>>,
) -> GenerationResult<Vec<DVec3>> {
    let options = CylinderOptions {
        radius,
        capped,
        orientation: orientation.parse()?,
    };
    Ok(hexa_cylinder(num_t, num_z, &options, noise))
}
