//! # Tissue Generation
//!
//! Initial configurations for vertex-based tissue simulations.
//!
//! ## Architecture
//!
//! ```text
//! grids::lattice ─┬─> grids::cylinder
//! grids::circle ──> grids::disk ─┘
//!
//! sheet::spec + sheet::table ──> sheet::fixture ──> SheetDatasets
//! ```
//!
//! - **Grids**: hexagonal lattices in 2D and 3D, circles, disks and
//!   cylinders, optionally perturbed by [`noise::PositionNoise`]
//! - **Sheet**: the three faces fixture with its half-edge table, built from
//!   `flat` or `planar` attribute specifications
//!
//! ## Usage
//!
//! ```rust
//! use tissue_generation::grids::{hexa_cylinder, CylinderOptions};
//! use tissue_generation::sheet::three_faces_sheet;
//!
//! let options = CylinderOptions { capped: true, ..Default::default() };
//! let seeds = hexa_cylinder(12, 6, &options, None);
//! assert!(!seeds.is_empty());
//!
//! let sheet = three_faces_sheet(true)?;
//! assert_eq!(sheet.edge_count(), 18);
//! # Ok::<(), tissue_generation::GenerationError>(())
//! ```

pub mod error;
pub mod grids;
pub mod noise;
pub mod sheet;

pub use error::{GenerationError, GenerationResult};
pub use noise::PositionNoise;
