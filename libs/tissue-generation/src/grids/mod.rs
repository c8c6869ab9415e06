//! # Grids
//!
//! Point samplers approximating hexagonal close packing: planar and
//! volumetric lattices, circles, disks and cylinders.
//!
//! Samplers are pure functions returning fresh point vectors. The only
//! source of nondeterminism is the optional [`PositionNoise`](crate::noise::PositionNoise),
//! whose generator is owned by the caller.

pub mod circle;
pub mod cylinder;
pub mod disk;
pub mod lattice;

pub use circle::circle;
pub use cylinder::{hexa_cylinder, hexa_cylinder_oriented, CylinderOptions, Orientation};
pub use disk::{disk_ring_counts, hexa_disk};
pub use lattice::{hexa_grid2d, hexa_grid3d};
